use num_traits::Float;

use super::{BevertonHolt, SpawnerRecruit};

/// The Shepherd spawner-recruit curve.
///
/// Recruitment follows `R = α⋅S / (1 + β⋅S^γ)`.
/// The exponent `γ` alone determines the curve's character:
///
/// - `γ > 1`: dome-shaped.
///   The peak sits at `S = (β⋅(γ−1))^(−1/γ)` with recruitment
///   `(α/(βγ))⋅(β⋅(γ−1))^((γ−1)/γ)`.
/// - `γ = 1`: exactly the Beverton-Holt curve with the same `α` and `β`,
///   and the derived statistics delegate to it.
/// - `γ < 1`: Cushing-like, with unbounded recruitment; the supremum and
///   its location are both infinite.
///
/// # Examples
///
/// ```
/// use spawner_recruit::{BevertonHolt, Shepherd, SpawnerRecruit};
///
/// // At gamma = 1 the Shepherd curve is a Beverton-Holt curve.
/// let shepherd = Shepherd::new(2.0, 0.5, 1.0);
/// let beverton_holt = BevertonHolt::new(2.0, 0.5);
///
/// assert_eq!(shepherd.max_recruits(), beverton_holt.max_recruits());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shepherd<T> {
    alpha: T,
    beta: T,
    gamma: T,
}

impl<T: Float> Shepherd<T> {
    /// Creates a Shepherd curve with productivity `alpha`, density
    /// dependence `beta`, and shape exponent `gamma`.
    #[must_use]
    pub fn new(alpha: T, beta: T, gamma: T) -> Self {
        Self { alpha, beta, gamma }
    }
}

impl<T: Float> SpawnerRecruit<T> for Shepherd<T> {
    fn recruit(&self, spawners: T) -> T {
        self.alpha * spawners / (T::one() + self.beta * spawners.powf(self.gamma))
    }

    fn max_recruits(&self) -> T {
        self.max_spawn_recruits().1
    }

    fn max_spawn_recruits(&self) -> (T, T) {
        let one = T::one();

        if self.gamma > one {
            let scale = self.beta * (self.gamma - one);
            let spawners_at_max = scale.powf(-one / self.gamma);
            let max = self.alpha / (self.beta * self.gamma)
                * scale.powf((self.gamma - one) / self.gamma);
            (spawners_at_max, max)
        } else if self.gamma == one {
            BevertonHolt::new(self.alpha, self.beta).max_spawn_recruits()
        } else {
            (T::infinity(), T::infinity())
        }
    }
}
