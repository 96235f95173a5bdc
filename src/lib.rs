//! `descent` provides building blocks for fitting statistical models with gradient based
//! optimizers in Rust.
//!
//! Kin in spirit to Python's `scikit-learn`, it bundles a dataset abstraction, hyperparameter
//! checking and common regression metrics, so that the algorithm crates under `algorithms/`
//! only have to implement their numerical core.
//!
//! ## Current state
//!
//! The foundation crate contains no learning algorithm itself. A single model is provided by
//! the `descent-linear` member crate: univariate linear regression trained with batch
//! gradient descent.
//!

pub mod dataset;
pub mod error;
mod metrics_regression;
pub mod param_guard;
pub mod prelude;
pub mod traits;

pub use dataset::{Dataset, DatasetBase, Float};
pub use error::Error;
pub use param_guard::ParamGuard;

/// Common metrics functions for regression
pub mod metrics {
    pub use crate::metrics_regression::Regression;
}
