use crate::foundation::error::{XformError, XformResult};

pub use kurbo::{Point, Vec2};

/// Per-axis scale factors.
///
/// Callers holding a single uniform factor convert via `From<f64>`, which
/// expands `s` to `(s, s)` before the factor is stored.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Factor {
    /// Horizontal scale factor.
    pub x: f64,
    /// Vertical scale factor.
    pub y: f64,
}

impl Factor {
    /// Factor with explicit per-axis values.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<f64> for Factor {
    fn from(s: f64) -> Self {
        Self { x: s, y: s }
    }
}

impl From<(f64, f64)> for Factor {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Vec2> for Factor {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Checked conversion from a caller-supplied slice to a [`Vec2`].
pub fn vec2_from_slice(v: &[f64]) -> XformResult<Vec2> {
    match v {
        [x, y] => Ok(Vec2::new(*x, *y)),
        _ => Err(XformError::invalid_argument(format!(
            "expected 2 components, got {}",
            v.len()
        ))),
    }
}

/// Checked conversion from a caller-supplied slice to a [`Point`].
pub fn point_from_slice(p: &[f64]) -> XformResult<Point> {
    vec2_from_slice(p).map(Vec2::to_point)
}
