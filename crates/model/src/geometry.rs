use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Page margins in points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Margins {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Margins {
    pub fn all(value: f32) -> Self {
        Self { left: value, top: value, right: value, bottom: value }
    }

    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self { left: horizontal, top: vertical, right: horizontal, bottom: vertical }
    }
}

/// Margin shorthand accepted in document options: a single number,
/// `[horizontal, vertical]`, or `[left, top, right, bottom]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MarginSpec {
    Uniform(f32),
    List(Vec<f32>),
}

impl MarginSpec {
    /// Number of values carried, for shape diagnostics.
    pub fn arity(&self) -> usize {
        match self {
            MarginSpec::Uniform(_) => 1,
            MarginSpec::List(values) => values.len(),
        }
    }

    /// Expand to full margins. `None` when the list arity is neither 2
    /// nor 4.
    pub fn expand(&self) -> Option<Margins> {
        match self {
            MarginSpec::Uniform(value) => Some(Margins::all(*value)),
            MarginSpec::List(values) => match values.as_slice() {
                [horizontal, vertical] => Some(Margins::symmetric(*horizontal, *vertical)),
                [left, top, right, bottom] => Some(Margins {
                    left: *left,
                    top: *top,
                    right: *right,
                    bottom: *bottom,
                }),
                _ => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_uniform_and_paired_forms() {
        assert_eq!(MarginSpec::Uniform(40.0).expand(), Some(Margins::all(40.0)));
        assert_eq!(
            MarginSpec::List(vec![10.0, 20.0]).expand(),
            Some(Margins::symmetric(10.0, 20.0))
        );
        assert_eq!(
            MarginSpec::List(vec![1.0, 2.0, 3.0, 4.0]).expand(),
            Some(Margins { left: 1.0, top: 2.0, right: 3.0, bottom: 4.0 })
        );
    }

    #[test]
    fn rejects_other_arities() {
        assert_eq!(MarginSpec::List(vec![1.0]).expand(), None);
        assert_eq!(MarginSpec::List(vec![1.0, 2.0, 3.0]).expand(), None);
        assert_eq!(MarginSpec::List(vec![1.0, 2.0, 3.0]).arity(), 3);
    }

    #[test]
    fn deserializes_shorthand_forms() {
        let uniform: MarginSpec = serde_json::from_str("40.0").unwrap();
        assert_eq!(uniform, MarginSpec::Uniform(40.0));

        let list: MarginSpec = serde_json::from_str("[10, 20]").unwrap();
        assert_eq!(list, MarginSpec::List(vec![10.0, 20.0]));
    }
}
