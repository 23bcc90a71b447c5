use num_traits::Float;

use super::SpawnerRecruit;

/// The Ludwig-Walters spawner-recruit curve, a generalized Ricker.
///
/// Recruitment follows `R = α⋅S⋅e^(−β⋅S^γ)`.
/// The extra exponent `γ` controls how sharply density dependence sets in;
/// at `γ = 1` the curve is exactly the Ricker.
/// For positive parameters the curve is dome-shaped, peaking at
/// `S = (βγ)^(−1/γ)` with recruitment `α⋅(βγ)^(−1/γ)⋅e^(−1/γ)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LudwigWalters<T> {
    alpha: T,
    beta: T,
    gamma: T,
}

impl<T: Float> LudwigWalters<T> {
    /// Creates a Ludwig-Walters curve with productivity `alpha`, density
    /// dependence `beta`, and compensation exponent `gamma`.
    #[must_use]
    pub fn new(alpha: T, beta: T, gamma: T) -> Self {
        Self { alpha, beta, gamma }
    }

    // Spawner abundance at the peak: setting dR/dS = 0 gives
    // β⋅γ⋅S^γ = 1, so S = (βγ)^(−1/γ).
    fn spawners_at_max(&self) -> T {
        (self.beta * self.gamma).powf(-T::one() / self.gamma)
    }
}

impl<T: Float> SpawnerRecruit<T> for LudwigWalters<T> {
    fn recruit(&self, spawners: T) -> T {
        self.alpha * spawners * (-self.beta * spawners.powf(self.gamma)).exp()
    }

    fn max_recruits(&self) -> T {
        self.alpha * self.spawners_at_max() * (-T::one() / self.gamma).exp()
    }

    fn max_spawn_recruits(&self) -> (T, T) {
        (self.spawners_at_max(), self.max_recruits())
    }
}
