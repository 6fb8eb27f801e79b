//! Coordinate utilities shared by rendering backends.

/// Convert a layout-space Y (top-left origin, Y down) to an output-space Y
/// (bottom-left origin, Y up). Applied exactly once per coordinate, at the
/// point of emission.
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// Round a rotation angle to two decimal digits so emitted matrices stay
/// free of floating-point churn.
pub fn round_degrees(angle: f32) -> f32 {
    (angle * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_is_its_own_inverse() {
        let page_height = 841.89;
        for y in [0.0, 12.5, 400.0, 841.89] {
            assert_eq!(flip_y(flip_y(y, page_height), page_height), y);
        }
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round_degrees(53.130_1), 53.13);
        assert_eq!(round_degrees(-53.135_2), -53.14);
        assert_eq!(round_degrees(90.0), 90.0);
    }
}
