//! An error when fitting a linear model with gradient descent
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LinearDescentError>;

/// An error when fitting a linear model with gradient descent
#[derive(Error, Debug)]
pub enum LinearDescentError {
    #[error("learning rate must be finite, but is {0}")]
    InvalidLearningRate(f32),
    #[error("initial slope must be finite, but is {0}")]
    InvalidInitialSlope(f32),
    #[error("initial intercept must be finite, but is {0}")]
    InvalidInitialIntercept(f32),
    #[error(transparent)]
    BaseCrate(#[from] descent::Error),
}
