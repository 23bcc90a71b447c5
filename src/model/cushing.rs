use num_traits::Float;

use super::SpawnerRecruit;

/// The Cushing spawner-recruit curve, an unbounded power law.
///
/// Recruitment follows `R = α⋅S^γ` with no density-dependent limit, so the
/// supremum is infinite and is only approached in the limit of infinite
/// spawner abundance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cushing<T> {
    alpha: T,
    gamma: T,
}

impl<T: Float> Cushing<T> {
    /// Creates a Cushing curve with productivity `alpha` and exponent `gamma`.
    #[must_use]
    pub fn new(alpha: T, gamma: T) -> Self {
        Self { alpha, gamma }
    }
}

impl<T: Float> SpawnerRecruit<T> for Cushing<T> {
    fn recruit(&self, spawners: T) -> T {
        self.alpha * spawners.powf(self.gamma)
    }

    fn max_recruits(&self) -> T {
        T::infinity()
    }

    fn max_spawn_recruits(&self) -> (T, T) {
        (T::infinity(), T::infinity())
    }
}
