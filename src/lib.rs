//! Classical spawner-recruit curves for fisheries population dynamics.
//!
//! A spawner-recruit curve relates spawning-stock abundance ("spawners") to
//! the resulting offspring abundance ("recruits").
//! This crate provides the family of closed-form curves catalogued by
//! Quinn & Deriso, *Quantitative Fish Dynamics* (1999):
//!
//! - [`BevertonHolt`]: asymptotic saturation
//! - [`Ricker`]: dome-shaped overcompensation
//! - [`LudwigWalters`]: generalized Ricker
//! - [`Cushing`]: unbounded power law
//! - [`DerisoSchnute`]: asymptotic or dome-shaped, depending on its exponent
//! - [`Shepherd`]: power-law, asymptotic, or dome-shaped, depending on its exponent
//! - [`Gamma`]: dome-shaped, nesting Ricker and Cushing as special cases
//!
//! Every curve implements the [`SpawnerRecruit`] trait, so calling code can
//! evaluate recruitment and query the curve's peak without knowing which
//! equation is in use.
//! Models are immutable after construction and every operation is a pure
//! function, so instances are freely shareable across threads.
//!
//! All models are generic over a floating-point representation via
//! [`num_traits::Float`]; `f64` is the usual choice.
//!
//! # Examples
//!
//! ```
//! use spawner_recruit::{BevertonHolt, SpawnerRecruit};
//!
//! let curve = BevertonHolt::new(2.0, 0.5);
//!
//! // Two units of spawning stock produce two recruits.
//! assert_eq!(curve.recruit(2.0), 2.0);
//!
//! // Recruitment saturates at alpha / beta.
//! assert_eq!(curve.max_recruits(), 4.0);
//! ```

mod error;
mod model;

pub use error::ParameterError;
pub use model::{
    BevertonHolt, Cushing, DerisoSchnute, Gamma, LudwigWalters, Ricker, Shepherd, SpawnerRecruit,
};
