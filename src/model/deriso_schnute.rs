use num_traits::Float;

use super::SpawnerRecruit;

/// The Deriso-Schnute spawner-recruit curve.
///
/// Recruitment follows `R = α⋅S⋅(1 − β⋅γ⋅S)^(1/γ)`.
/// The exponent `γ` interpolates between familiar shapes: the curve is
/// asymptotic or dome-shaped depending on its value, nesting Beverton-Holt
/// (`γ → −1`) and Ricker (`γ → 0`) as limiting cases.
/// The peak sits at `S = 1/(β⋅(1+γ))` with recruitment
/// `(α/β)⋅(1+γ)^(−(1+γ)/γ)`.
///
/// Beyond `S = 1/(β⋅γ)` the base of the fractional power goes negative and
/// evaluation yields `NaN`; callers working in that regime are outside the
/// curve's biological domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerisoSchnute<T> {
    alpha: T,
    beta: T,
    gamma: T,
}

impl<T: Float> DerisoSchnute<T> {
    /// Creates a Deriso-Schnute curve with productivity `alpha`, density
    /// dependence `beta`, and shape exponent `gamma`.
    #[must_use]
    pub fn new(alpha: T, beta: T, gamma: T) -> Self {
        Self { alpha, beta, gamma }
    }
}

impl<T: Float> SpawnerRecruit<T> for DerisoSchnute<T> {
    fn recruit(&self, spawners: T) -> T {
        let one = T::one();
        self.alpha
            * spawners
            * (one - self.beta * self.gamma * spawners).powf(one / self.gamma)
    }

    fn max_recruits(&self) -> T {
        let one = T::one();
        let one_plus_gamma = one + self.gamma;
        (self.alpha / self.beta) * one_plus_gamma.powf(-one_plus_gamma / self.gamma)
    }

    fn max_spawn_recruits(&self) -> (T, T) {
        let spawners_at_max = T::one() / (self.beta * (T::one() + self.gamma));
        (spawners_at_max, self.max_recruits())
    }
}
