//! # Univariate linear regression with batch gradient descent
//!
//! ## The Big Picture
//!
//! `descent-linear` is a crate in the `descent` ecosystem, a minimal toolkit for gradient
//! based model fitting in pure Rust.
//!
//! ## Current state
//!
//! `descent-linear` provides a pure Rust implementation of univariate [linear
//! regression](struct.LinearDescent.html), fitted by running a fixed number of batch gradient
//! descent steps over the full training set.
//!
//! ## Examples
//!
//! There is a usage example in the `examples/` directory. To run, use:
//!
//! ```bash
//! $ cargo run --example house_prices
//! ```
//!
mod algorithm;
mod error;
mod hyperparams;

pub use algorithm::gradient_descent;
pub use error::{LinearDescentError, Result};
pub use hyperparams::{LinearDescentParams, LinearDescentValidParams};

use descent::Float;

/// A univariate linear model fitted with batch gradient descent.
///
/// The model snapshots the slope and intercept reached after the last update step, together
/// with the training loss recorded after every step. It answers point queries with
/// [`predict_point`](Self::predict_point) and batch queries through the
/// [`Predict`](descent::traits::Predict) trait.
pub struct LinearDescent<F: Float> {
    slope: F,
    intercept: F,
    losses: Vec<F>,
}

impl<F: Float> LinearDescent<F> {
    /// Create default hyperparameters
    pub fn params() -> LinearDescentParams<F> {
        LinearDescentParams::new()
    }
}
