use num_traits::Float;

use super::SpawnerRecruit;

/// The Ricker spawner-recruit curve.
///
/// Recruitment follows `R = α⋅S⋅e^(−β⋅S)`: near-linear growth at low stock
/// sizes, then overcompensation as density dependence takes hold.
/// The curve is dome-shaped, peaking at `S = 1/β` with recruitment
/// `α/(β⋅e)` and declining toward zero beyond the peak.
///
/// # Examples
///
/// ```
/// use spawner_recruit::{Ricker, SpawnerRecruit};
///
/// let curve = Ricker::new(3.0, 0.1);
/// let (spawners_at_max, max) = curve.max_spawn_recruits();
///
/// assert_eq!(spawners_at_max, 10.0);
/// assert!((max - 3.0 / (0.1 * std::f64::consts::E)).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ricker<T> {
    alpha: T,
    beta: T,
}

impl<T: Float> Ricker<T> {
    /// Creates a Ricker curve with productivity `alpha` and density
    /// dependence `beta`.
    #[must_use]
    pub fn new(alpha: T, beta: T) -> Self {
        Self { alpha, beta }
    }
}

impl<T: Float> SpawnerRecruit<T> for Ricker<T> {
    fn recruit(&self, spawners: T) -> T {
        self.alpha * spawners * (-self.beta * spawners).exp()
    }

    fn max_recruits(&self) -> T {
        self.alpha / (self.beta * T::one().exp())
    }

    fn max_spawn_recruits(&self) -> (T, T) {
        (T::one() / self.beta, self.max_recruits())
    }
}
