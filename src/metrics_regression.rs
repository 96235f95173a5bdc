//! Common metrics for regression
//!
//! This module implements common comparison metrics for continuous variables.

use ndarray::prelude::*;
use ndarray::IntoNdProducer;
use ndarray::{Data, NdFloat};
use num_traits::FromPrimitive;
use std::ops::Sub;

/// Regression metrics trait
pub trait Regression<
    'a,
    A: 'a,
    T: IntoNdProducer<Item = &'a A, Dim = Ix1, Output = ArrayView1<'a, A>>,
>
{
    /// Maximal error between two continuous variables
    fn max_error(&self, compare_to: T) -> A;
    /// Mean error between two continuous variables
    fn mean_absolute_error(&self, compare_to: T) -> A;
    /// Mean squared error between two continuous variables
    fn mean_squared_error(&self, compare_to: T) -> A;
    /// Median absolute error between two continuous variables
    fn median_absolute_error(&self, compare_to: T) -> A;
    /// R squared coefficient, is the proportion of the variance in the dependent variable that
    /// is predictable from the independent variable.
    ///
    /// To evaluate the accuracy of a prediction, use
    /// ```ignore
    /// prediction.r2(ground_truth)
    /// ```
    fn r2(&self, compare_to: T) -> A;
}

impl<
        'a,
        A: 'a + NdFloat + FromPrimitive,
        D: Data<Elem = A>,
        T: IntoNdProducer<Item = &'a A, Dim = Ix1, Output = ArrayView1<'a, A>>,
    > Regression<'a, A, T> for ArrayBase<D, Ix1>
{
    fn max_error(&self, compare_to: T) -> A {
        let compare_to: ArrayView1<'a, A> = compare_to.into_producer();

        self.sub(&compare_to)
            .iter()
            .map(|x| x.abs())
            .fold(A::neg_infinity(), A::max)
    }

    fn mean_absolute_error(&self, compare_to: T) -> A {
        let compare_to = compare_to.into_producer();

        self.sub(&compare_to).mapv(|x| x.abs()).mean().unwrap()
    }

    fn mean_squared_error(&self, compare_to: T) -> A {
        let compare_to = compare_to.into_producer();

        self.sub(&compare_to).mapv(|x| x * x).mean().unwrap()
    }

    fn median_absolute_error(&self, compare_to: T) -> A {
        let compare_to = compare_to.into_producer();

        let mut abs_error = self.sub(&compare_to).mapv(|x| x.abs()).to_vec();
        abs_error.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let mid = abs_error.len() / 2;
        if abs_error.len() % 2 == 0 {
            (abs_error[mid - 1] + abs_error[mid]) / A::from(2.0).unwrap()
        } else {
            abs_error[mid]
        }
    }

    // r2 = 1 - sum((pred_i - y_i)^2)/sum((mean_y - y_i)^2)
    // if the mean is of `compare_to`, then the denominator
    // should compare `compare_to` and the mean, and not self and the mean
    fn r2(&self, compare_to: T) -> A {
        let compare_to = compare_to.into_producer();

        let mean = compare_to.mean().unwrap();

        A::one()
            - self.sub(&compare_to).mapv(|x| x * x).sum()
                / (compare_to.mapv(|x| (x - mean) * (x - mean)).sum() + A::from(1e-10).unwrap())
    }
}
