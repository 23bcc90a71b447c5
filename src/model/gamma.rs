use num_traits::Float;

use super::SpawnerRecruit;
use crate::error::ParameterError;

/// The gamma spawner-recruit curve.
///
/// Recruitment follows `R = α⋅S^γ⋅e^(−β⋅S)`, the shape of a gamma-function
/// density.
/// It is the most flexible dome in the family and nests several others:
/// at `γ = 1` it is exactly the Ricker curve, at `β = 0` it degenerates to
/// the Cushing power law, and as `γ → 0` it approaches Beverton-Holt
/// behavior.
/// For positive `β` the peak sits at `S = γ/β` with recruitment
/// `α⋅(γ/β)^γ⋅e^(−γ)`.
///
/// Unlike the rest of the family, construction is fallible: the exponent
/// must satisfy `γ > 0` for the curve to rise from the origin.
///
/// # Examples
///
/// ```
/// use spawner_recruit::{Gamma, ParameterError, SpawnerRecruit};
///
/// let curve = Gamma::new(3.0, 0.1, 2.0)?;
/// let (spawners_at_max, _) = curve.max_spawn_recruits();
/// assert_eq!(spawners_at_max, 20.0);
///
/// assert!(Gamma::new(3.0, 0.1, -1.0).is_err());
/// # Ok::<(), ParameterError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gamma<T> {
    alpha: T,
    beta: T,
    gamma: T,
}

impl<T: Float> Gamma<T> {
    /// Creates a gamma curve with productivity `alpha`, density dependence
    /// `beta`, and shape exponent `gamma`.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::NotStrictlyPositive`] if `gamma <= 0`
    /// (or `gamma` is `NaN`).
    pub fn new(alpha: T, beta: T, gamma: T) -> Result<Self, ParameterError> {
        if gamma > T::zero() {
            Ok(Self { alpha, beta, gamma })
        } else {
            Err(ParameterError::NotStrictlyPositive("gamma"))
        }
    }
}

impl<T: Float> SpawnerRecruit<T> for Gamma<T> {
    fn recruit(&self, spawners: T) -> T {
        self.alpha * spawners.powf(self.gamma) * (-self.beta * spawners).exp()
    }

    fn max_recruits(&self) -> T {
        self.alpha * (self.gamma / self.beta).powf(self.gamma) * (-self.gamma).exp()
    }

    fn max_spawn_recruits(&self) -> (T, T) {
        (self.gamma / self.beta, self.max_recruits())
    }
}
