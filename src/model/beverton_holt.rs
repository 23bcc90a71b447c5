use num_traits::Float;

use super::SpawnerRecruit;

/// The Beverton-Holt spawner-recruit curve.
///
/// Recruitment follows `R = α⋅S / (1 + β⋅S)`, where:
/// - `S` is spawner abundance,
/// - `α` is the productivity at low stock size (the slope at the origin),
/// - `β` controls the strength of density dependence.
///
/// The curve rises monotonically and saturates: recruitment approaches the
/// asymptote `α/β` as spawners grow without bound, so the maximum is never
/// attained at any finite abundance.
///
/// # Examples
///
/// ```
/// use spawner_recruit::{BevertonHolt, SpawnerRecruit};
///
/// let curve = BevertonHolt::new(2.0, 0.5);
/// assert_eq!(curve.recruit(2.0), 2.0);
///
/// let (spawners_at_max, max) = curve.max_spawn_recruits();
/// assert_eq!(spawners_at_max, f64::INFINITY);
/// assert_eq!(max, 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BevertonHolt<T> {
    alpha: T,
    beta: T,
}

impl<T: Float> BevertonHolt<T> {
    /// Creates a Beverton-Holt curve with productivity `alpha` and density
    /// dependence `beta`.
    ///
    /// Both parameters are expected to be positive; negative values are not
    /// biologically meaningful but are not rejected.
    #[must_use]
    pub fn new(alpha: T, beta: T) -> Self {
        Self { alpha, beta }
    }
}

impl<T: Float> SpawnerRecruit<T> for BevertonHolt<T> {
    fn recruit(&self, spawners: T) -> T {
        self.alpha * spawners / (T::one() + self.beta * spawners)
    }

    fn max_recruits(&self) -> T {
        self.alpha / self.beta
    }

    fn max_spawn_recruits(&self) -> (T, T) {
        (T::infinity(), self.max_recruits())
    }
}
