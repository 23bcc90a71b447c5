use thiserror::Error;

/// An error returned when a model parameter violates its mathematical domain.
///
/// Domain constraints are checked once, at construction time.
/// A model that constructs successfully never fails during evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParameterError {
    /// The named parameter must be strictly greater than zero.
    ///
    /// A `NaN` parameter also produces this error, since `NaN` satisfies no
    /// ordering constraint.
    #[error("parameter `{0}` must be strictly positive")]
    NotStrictlyPositive(&'static str),
}
