use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors raised when a gasifier input set is rejected or a result would be
/// undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GasifierError {
    /// A tube or fin dimension is non-positive or out of its physical range.
    #[error("invalid geometry: {field}: {source}")]
    InvalidGeometry {
        field: &'static str,
        source: ConstraintError,
    },

    /// The ambient state cannot drive the correlation (for example, a
    /// negative wind speed or air colder than the liquid).
    #[error("invalid ambient conditions: {field}: {source}")]
    InvalidAmbient {
        field: &'static str,
        source: ConstraintError,
    },

    /// A tube count or spacing is non-positive.
    #[error("invalid module layout: {field}: {source}")]
    InvalidLayout {
        field: &'static str,
        source: ConstraintError,
    },

    /// A physical constant violates its positivity invariant.
    #[error("invalid physical constant: {field}: {source}")]
    InvalidConstant {
        field: &'static str,
        source: ConstraintError,
    },

    /// A division would produce an infinite or undefined result.
    #[error("division hazard: {context}")]
    DivisionHazard { context: &'static str },
}

impl GasifierError {
    pub(super) fn geometry(field: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidGeometry { field, source }
    }

    pub(super) fn ambient(field: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidAmbient { field, source }
    }

    pub(super) fn layout(field: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidLayout { field, source }
    }

    pub(super) fn constant(field: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidConstant { field, source }
    }
}

/// Returns `value` if it is finite, otherwise a [`GasifierError::DivisionHazard`].
pub(super) fn finite(value: f64, context: &'static str) -> Result<f64, GasifierError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GasifierError::DivisionHazard { context })
    }
}
