//! Ordered, mutable accumulator of transform operations.

use std::sync::Arc;

use crate::foundation::core::{Factor, Point, Vec2, vec2_from_slice};
use crate::foundation::error::{XformError, XformResult};
use crate::transform::affine::AffineMatrix;
use crate::transform::compiled::CompiledTransform;
use crate::transform::op::Operation;

/// Builder for [`CompiledTransform`](crate::CompiledTransform) values.
///
/// Operations are queued in application order: the operation queued first is
/// the first one applied to a point. Every appender returns `&mut Self` for
/// fluent chaining; the fallible slice-based appenders leave the queue
/// untouched on error.
///
/// Building is non-destructive: the builder stays usable and can be rebuilt
/// after further mutation, producing independent transforms.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransformBuilder {
    ops: Vec<Operation>,
}

impl TransformBuilder {
    /// Builder with an empty operation queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a translation by `vector`.
    pub fn translate(&mut self, vector: impl Into<Vec2>) -> &mut Self {
        self.ops.push(Operation::Translate {
            vector: vector.into(),
        });
        self
    }

    /// Queue a translation from a caller-supplied slice.
    ///
    /// Fails with [`XformError::InvalidArgument`] unless the slice has exactly
    /// 2 components; the queue is unchanged on error.
    pub fn translate_slice(&mut self, vector: &[f64]) -> XformResult<&mut Self> {
        let vector = vec2_from_slice(vector)?;
        Ok(self.translate(vector))
    }

    /// Queue a clockwise rotation by `angle` radians about `origin`.
    pub fn rotate(&mut self, angle: f64, origin: impl Into<Point>) -> &mut Self {
        self.ops.push(Operation::Rotate {
            angle,
            origin: origin.into(),
        });
        self
    }

    /// Queue a scaling about `origin`.
    ///
    /// A scalar `factor` is expanded to both axes via [`Factor::from`].
    pub fn scale(&mut self, origin: impl Into<Point>, factor: impl Into<Factor>) -> &mut Self {
        self.ops.push(Operation::Scale {
            origin: origin.into(),
            factor: factor.into(),
        });
        self
    }

    /// Queue a raw coefficient matrix, applied as-is.
    pub fn matrix(&mut self, matrix: AffineMatrix) -> &mut Self {
        self.ops.push(Operation::Matrix { matrix });
        self
    }

    /// Queue a raw matrix from a caller-supplied slice.
    ///
    /// Fails with [`XformError::InvalidArgument`] unless the slice has exactly
    /// 6 coefficients; the queue is unchanged on error.
    pub fn matrix_slice(&mut self, coeffs: &[f64]) -> XformResult<&mut Self> {
        let matrix = AffineMatrix::from_slice(coeffs)?;
        Ok(self.matrix(matrix))
    }

    /// Append `other`'s entire operation queue after this builder's.
    ///
    /// This builder's prior operations stay first in application order,
    /// followed by `other`'s in their relative order.
    pub fn append(&mut self, other: &TransformBuilder) -> &mut Self {
        self.ops.extend_from_slice(&other.ops);
        self
    }

    /// Resolve the single operation at `index` to its matrix.
    pub fn resolve_at(&self, index: usize) -> XformResult<AffineMatrix> {
        self.ops
            .get(index)
            .map(Operation::resolve)
            .ok_or(XformError::OutOfRange {
                index,
                len: self.ops.len(),
            })
    }

    /// The queued operations in application order.
    pub fn operations(&self) -> &[Operation] {
        &self.ops
    }

    /// Number of queued operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Collapse the queue into a single [`CompiledTransform`].
    ///
    /// Every queued operation resolves to its matrix and the chain folds into
    /// one matrix with earlier-queued operations applied first. The compiled
    /// transform retains a snapshot of this builder for introspection.
    ///
    /// Fails with [`XformError::InvalidArgument`] on an empty queue.
    #[tracing::instrument(skip(self), fields(ops = self.ops.len()))]
    pub fn build(&self) -> XformResult<CompiledTransform> {
        if self.ops.is_empty() {
            return Err(XformError::invalid_argument(
                "cannot build from an empty operation queue",
            ));
        }
        let resolved: Vec<AffineMatrix> = self.ops.iter().map(Operation::resolve).collect();
        let matrix = AffineMatrix::compose_chain(&resolved)?;
        Ok(CompiledTransform::with_source(
            matrix,
            Arc::new(self.clone()),
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/builder.rs"]
mod tests;
