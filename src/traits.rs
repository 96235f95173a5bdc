//! Provide traits for the different classes of algorithms
//!

use crate::dataset::{DatasetBase, Float, Records};
use ndarray::{ArrayBase, Data, Dimension};
use std::error::Error;

/// Fittable algorithms
///
/// A fittable algorithm consumes a dataset and produces a model. The trait is implemented for
/// checked hyperparameter sets, which verify the shape of the training data before estimating
/// the model.
pub trait Fit<R: Records, T, E: Error> {
    type Object;

    fn fit(&self, dataset: &DatasetBase<R, T>) -> Result<Self::Object, E>;
}

/// Predict with models which create targets in place
pub trait PredictInplace<R: Records, T> {
    /// Predict something in place
    fn predict_inplace(&self, x: &R, y: &mut T);

    /// Create targets that `predict_inplace` works with
    fn default_target(&self, x: &R) -> T;
}

/// Predict with model for new data
pub trait Predict<R, T> {
    fn predict(&self, x: R) -> T;
}

impl<'a, F: Float, D, I, T, O> Predict<&'a ArrayBase<D, I>, T> for O
where
    D: Data<Elem = F>,
    I: Dimension,
    O: PredictInplace<ArrayBase<D, I>, T>,
{
    fn predict(&self, records: &'a ArrayBase<D, I>) -> T {
        let mut targets = self.default_target(records);
        self.predict_inplace(records, &mut targets);
        targets
    }
}

impl<'a, R: Records, S, T, O> Predict<&'a DatasetBase<R, S>, T> for O
where
    O: PredictInplace<R, T>,
{
    fn predict(&self, dataset: &'a DatasetBase<R, S>) -> T {
        let mut targets = self.default_target(&dataset.records);
        self.predict_inplace(&dataset.records, &mut targets);
        targets
    }
}
