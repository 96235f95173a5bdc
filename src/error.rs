//! Error types in descent
//!

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("mismatched lengths: {0} observations against {1} targets")]
    MismatchedLengths(usize, usize),
    #[error("not enough samples: at least one observation is required")]
    NotEnoughSamples,
}
