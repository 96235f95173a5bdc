//! Datasets
//!
//! This module implements the dataset struct and various helper traits to extend its
//! functionality.
use ndarray::{ArrayBase, Ix1, OwnedRepr, ScalarOperand};

use num_traits::{FromPrimitive, NumAssignOps, NumCast, Signed};

use std::fmt;
use std::iter::Sum;

mod impl_dataset;
mod impl_records;

/// Floating point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point number and
/// implements them for 32bit and 64bit floating points. They are used in records of a dataset
/// and in the targets as well.
pub trait Float:
    FromPrimitive
    + num_traits::Float
    + PartialOrd
    + Sync
    + Send
    + Default
    + fmt::Display
    + fmt::Debug
    + Signed
    + Sum
    + NumAssignOps
    + ScalarOperand
    + approx::AbsDiffEq
{
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}
impl Float for f64 {}

/// Collection of observations
///
/// A record is a single observation of the independent variable. This trait abstracts over
/// the containers holding such observations and exposes their number.
pub trait Records: Sized {
    type Elem;

    fn observations(&self) -> usize;
}

/// A set of paired observations
///
/// A `DatasetBase` combines records with their target values. The records are borrowed
/// read-only by any fitting routine and never mutated.
pub struct DatasetBase<R: Records, T> {
    pub records: R,
    pub targets: T,
}

/// A univariate dataset with owned records and targets
pub type Dataset<F> = DatasetBase<ArrayBase<OwnedRepr<F>, Ix1>, ArrayBase<OwnedRepr<F>, Ix1>>;
