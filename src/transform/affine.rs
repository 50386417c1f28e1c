//! Row-major 2D affine matrix and its composition algebra.

use crate::foundation::core::{Factor, Point, Vec2};
use crate::foundation::error::{XformError, XformResult};

/// A 2D affine transform stored as six row-major coefficients
/// `(a, b, c, d, e, f)` of the homogeneous matrix
///
/// ```text
/// a b c
/// d e f
/// 0 0 1
/// ```
///
/// acting on points as `(a*x + b*y + c, d*x + e*y + f)`. The 6-element array
/// is also the serialized interchange form.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct AffineMatrix([f64; 6]);

impl AffineMatrix {
    /// The identity transform.
    pub const IDENTITY: Self = Self([1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);

    /// Matrix with the given row-major coefficients.
    pub const fn new(coeffs: [f64; 6]) -> Self {
        Self(coeffs)
    }

    /// Checked construction from a caller-supplied slice.
    pub fn from_slice(coeffs: &[f64]) -> XformResult<Self> {
        match coeffs {
            [a, b, c, d, e, f] => Ok(Self([*a, *b, *c, *d, *e, *f])),
            _ => Err(XformError::invalid_argument(format!(
                "matrix needs 6 coefficients, got {}",
                coeffs.len()
            ))),
        }
    }

    /// Row-major coefficients `(a, b, c, d, e, f)`.
    pub const fn coeffs(self) -> [f64; 6] {
        self.0
    }

    /// Translation by `v`.
    pub fn translation(v: Vec2) -> Self {
        Self([1.0, 0.0, v.x, 0.0, 1.0, v.y])
    }

    /// Translation by `-v`.
    pub fn inverse_translation(v: Vec2) -> Self {
        Self::translation(-v)
    }

    /// Axis-aligned scaling about the coordinate origin.
    pub fn scaling(f: Factor) -> Self {
        Self([f.x, 0.0, 0.0, 0.0, f.y, 0.0])
    }

    /// Rotation about the coordinate origin by `angle` radians, clockwise in
    /// the y-down screen convention.
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self([cos, -sin, 0.0, sin, cos, 0.0])
    }

    /// Matrix product `outer * inner`: the result applies `inner`'s transform
    /// to a point first, then `outer`'s.
    pub fn compose(outer: Self, inner: Self) -> Self {
        let [a, b, c, d, e, f] = outer.0;
        let [ia, ib, ic, id, ie, i_f] = inner.0;
        Self([
            a * ia + b * id,
            a * ib + b * ie,
            a * ic + b * i_f + c,
            d * ia + e * id,
            d * ib + e * ie,
            d * ic + e * i_f + f,
        ])
    }

    /// Collapse an ordered chain of matrices into one.
    ///
    /// The chain is in application order: the first element is applied to a
    /// point first (it ends up innermost in the product). Fails with
    /// [`XformError::InvalidArgument`] on an empty chain.
    pub fn compose_chain(chain: &[Self]) -> XformResult<Self> {
        let (first, rest) = chain.split_first().ok_or_else(|| {
            XformError::invalid_argument("cannot compose an empty matrix chain")
        })?;
        Ok(rest.iter().fold(*first, |acc, m| Self::compose(*m, acc)))
    }

    /// Apply the transform to a point.
    pub fn apply(self, p: impl Into<Point>) -> Point {
        let p = p.into();
        let [a, b, c, d, e, f] = self.0;
        Point::new(a * p.x + b * p.y + c, d * p.x + e * p.y + f)
    }

    /// Determinant of the linear part, `a*e - b*d`.
    pub fn determinant(self) -> f64 {
        let [a, b, _, d, e, _] = self.0;
        a * e - b * d
    }

    /// Closed-form inverse.
    ///
    /// Fails with [`XformError::SingularMatrix`] when the determinant is zero
    /// (for example a zero scale factor on one axis); the forward transform
    /// then collapses the plane and has no inverse.
    pub fn invert(self) -> XformResult<Self> {
        let [a, b, c, d, e, f] = self.0;
        let det = a * e - b * d;
        if det == 0.0 {
            return Err(XformError::SingularMatrix);
        }
        Ok(Self([
            e / det,
            -b / det,
            (b * f - c * e) / det,
            -d / det,
            a / det,
            (c * d - a * f) / det,
        ]))
    }
}

impl Default for AffineMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// `outer * inner`, same as [`AffineMatrix::compose`].
impl std::ops::Mul for AffineMatrix {
    type Output = AffineMatrix;

    fn mul(self, rhs: AffineMatrix) -> AffineMatrix {
        AffineMatrix::compose(self, rhs)
    }
}

/// Coefficient reshuffle into kurbo's column-major order.
impl From<AffineMatrix> for kurbo::Affine {
    fn from(m: AffineMatrix) -> Self {
        let [a, b, c, d, e, f] = m.0;
        kurbo::Affine::new([a, d, b, e, c, f])
    }
}

impl From<kurbo::Affine> for AffineMatrix {
    fn from(t: kurbo::Affine) -> Self {
        let [xx, yx, xy, yy, x0, y0] = t.as_coeffs();
        Self([xx, xy, x0, yx, yy, y0])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
