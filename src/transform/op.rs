//! Queued transform operations and their matrix resolution.

use crate::foundation::core::{Factor, Point, Vec2};
use crate::transform::affine::AffineMatrix;

/// One queued high-level transform operation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Operation {
    /// Shift every point by a vector.
    Translate {
        /// Displacement added to each point.
        vector: Vec2,
    },
    /// Rotate about a pivot point.
    Rotate {
        /// Angle in radians; positive is clockwise with y pointing down.
        angle: f64,
        /// Pivot left fixed by the rotation.
        origin: Point,
    },
    /// Scale about a pivot point.
    Scale {
        /// Pivot left fixed by the scaling.
        origin: Point,
        /// Per-axis scale factors.
        factor: Factor,
    },
    /// Apply a caller-supplied matrix as-is.
    Matrix {
        /// Row-major coefficients.
        matrix: AffineMatrix,
    },
}

impl Operation {
    /// Resolve this operation to its equivalent affine matrix.
    ///
    /// Pivoted rotation and scaling shift the pivot to the coordinate origin,
    /// apply the axis-aligned form, then shift back.
    pub fn resolve(&self) -> AffineMatrix {
        match *self {
            Operation::Translate { vector } => AffineMatrix::translation(vector),
            Operation::Matrix { matrix } => matrix,
            Operation::Rotate { angle, origin } => {
                about_point(origin, AffineMatrix::rotation(angle))
            }
            Operation::Scale { origin, factor } => {
                about_point(origin, AffineMatrix::scaling(factor))
            }
        }
    }
}

/// `T(origin) * mid * T(-origin)`: translate-to-origin is applied first, the
/// translate-back last, so `origin` is a fixed point of the result.
fn about_point(origin: Point, mid: AffineMatrix) -> AffineMatrix {
    let pivot = origin.to_vec2();
    AffineMatrix::translation(pivot) * mid * AffineMatrix::inverse_translation(pivot)
}

#[cfg(test)]
#[path = "../../tests/unit/transform/op.rs"]
mod tests;
