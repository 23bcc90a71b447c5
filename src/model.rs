mod beverton_holt;
mod cushing;
mod deriso_schnute;
mod gamma;
mod ludwig_walters;
mod ricker;
mod shepherd;

use num_traits::Float;

pub use beverton_holt::BevertonHolt;
pub use cushing::Cushing;
pub use deriso_schnute::DerisoSchnute;
pub use gamma::Gamma;
pub use ludwig_walters::LudwigWalters;
pub use ricker::Ricker;
pub use shepherd::Shepherd;

/// The shared contract of every spawner-recruit curve.
///
/// Implementors are immutable value objects whose parameters are fixed at
/// construction.
/// All three operations are pure functions of those parameters (and, for
/// [`recruit`], the supplied spawner abundance), so a model can be evaluated
/// repeatedly and shared freely.
///
/// Curves are defined for spawner abundances `S >= 0` and satisfy
/// `recruit(0) == 0`: no spawners produce no recruits.
/// Callers are responsible for supplying non-negative spawner values;
/// parameter combinations outside a curve's biologically meaningful range
/// yield ordinary IEEE infinities or `NaN`s rather than panics.
///
/// [`recruit`]: SpawnerRecruit::recruit
pub trait SpawnerRecruit<T: Float> {
    /// Evaluates the curve at the given spawner abundance.
    fn recruit(&self, spawners: T) -> T;

    /// Returns the supremum of recruitment over all spawner abundances.
    ///
    /// Finite for asymptotic and dome-shaped curves, infinite for unbounded
    /// ones.
    fn max_recruits(&self) -> T;

    /// Returns the spawner abundance at which recruitment peaks, paired with
    /// the peak recruitment itself.
    ///
    /// For dome-shaped curves the abundance is the finite location of the
    /// peak; for curves that only approach their supremum in the limit it is
    /// infinite.
    fn max_spawn_recruits(&self) -> (T, T);
}
