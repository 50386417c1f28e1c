//! xform2d composes 2D affine transforms from high-level operations.
//!
//! A [`TransformBuilder`] accumulates an ordered queue of operations (translate,
//! rotate about a point, scale about a point, or a raw coefficient matrix) and
//! collapses the whole queue into a single [`AffineMatrix`] on
//! [`TransformBuilder::build`]. The resulting [`CompiledTransform`] is an
//! immutable value that applies the transform to points and computes its
//! closed-form inverse.
//!
//! # Conventions
//!
//! - Matrices are six row-major coefficients `(a, b, c, d, e, f)` of the
//!   homogeneous matrix `[a b c; d e f; 0 0 1]`, acting on points as
//!   `(a*x + b*y + c, d*x + e*y + f)`.
//! - The queue order is the application order: the operation queued first is
//!   the first one applied to a point.
//! - Angles are radians; positive angles rotate clockwise in the y-down screen
//!   coordinate system.
//!
//! # Example
//!
//! ```
//! use xform2d::TransformBuilder;
//!
//! let mut b = TransformBuilder::new();
//! b.translate((10.0, 0.0)).scale((0.0, 0.0), 2.0);
//! let t = b.build()?;
//! let p = t.transform_point((1.0, 1.0));
//! assert_eq!((p.x, p.y), (22.0, 2.0));
//! # Ok::<(), xform2d::XformError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod transform;

pub use foundation::core::{Factor, Point, Vec2, point_from_slice, vec2_from_slice};
pub use foundation::error::{XformError, XformResult};
pub use transform::affine::AffineMatrix;
pub use transform::builder::TransformBuilder;
pub use transform::compiled::CompiledTransform;
pub use transform::op::Operation;
