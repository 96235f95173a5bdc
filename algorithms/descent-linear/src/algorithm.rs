//! Batch gradient descent for a univariate linear model
use crate::error::{LinearDescentError, Result};
use crate::hyperparams::LinearDescentValidParams;
use crate::LinearDescent;
use descent::dataset::{Dataset, DatasetBase};
use descent::traits::{Fit, PredictInplace};
use descent::{Error, Float};
use ndarray::{Array1, ArrayBase, Data, Ix1};

/// Number of loss values kept at most, further iterations stop recording.
const MAX_LOSS_HISTORY: usize = 100_000;

impl<F: Float, D: Data<Elem = F>> Fit<ArrayBase<D, Ix1>, ArrayBase<D, Ix1>, LinearDescentError>
    for LinearDescentValidParams<F>
{
    type Object = LinearDescent<F>;

    /// Fit a univariate linear model to the observations in `dataset`.
    ///
    /// The records hold the independent variable, the targets the dependent one; both must
    /// have the same length and must not be empty.
    ///
    /// Runs exactly `iterations` update steps starting from the configured initial
    /// parameters. Every step evaluates the gradient of the halved mean squared error over
    /// the full training set at the current parameters and then applies both updates at
    /// once. The loss after each step is recorded into the returned model.
    fn fit(
        &self,
        dataset: &DatasetBase<ArrayBase<D, Ix1>, ArrayBase<D, Ix1>>,
    ) -> Result<Self::Object> {
        let x = dataset.records();
        let y = dataset.targets();

        if x.len() != y.len() {
            return Err(Error::MismatchedLengths(x.len(), y.len()).into());
        }
        if x.is_empty() {
            return Err(Error::NotEnoughSamples.into());
        }

        let mut slope = self.initial_slope();
        let mut intercept = self.initial_intercept();
        let mut losses = Vec::with_capacity(self.iterations().min(MAX_LOSS_HISTORY as u64) as usize);

        for _ in 0..self.iterations() {
            let (slope_grad, intercept_grad) = gradient(slope, intercept, x, y);
            slope = slope - self.learning_rate() * slope_grad;
            intercept = intercept - self.learning_rate() * intercept_grad;

            if losses.len() < MAX_LOSS_HISTORY {
                losses.push(cost(slope, intercept, x, y));
            }
        }

        Ok(LinearDescent {
            slope,
            intercept,
            losses,
        })
    }
}

/// View the fitted parameters and make predictions with a fitted gradient descent model
impl<F: Float> LinearDescent<F> {
    /// Get the fitted slope
    pub fn slope(&self) -> F {
        self.slope
    }

    /// Get the fitted intercept
    pub fn intercept(&self) -> F {
        self.intercept
    }

    /// Training losses recorded after each update step
    ///
    /// The loss is the halved mean squared error over the training set. At most 100 000
    /// entries are kept.
    pub fn losses(&self) -> &[F] {
        &self.losses
    }

    /// Evaluate the fitted line at a single point
    ///
    /// A non-finite `x` propagates through the arithmetic and yields a non-finite result
    /// instead of an error.
    pub fn predict_point(&self, x: F) -> F {
        self.slope * x + self.intercept
    }
}

impl<F: Float, D: Data<Elem = F>> PredictInplace<ArrayBase<D, Ix1>, Array1<F>>
    for LinearDescent<F>
{
    /// Given an input vector `x` of observations, `predict` returns the value of the fitted
    /// line at every observation.
    fn predict_inplace(&self, x: &ArrayBase<D, Ix1>, y: &mut Array1<F>) {
        assert_eq!(
            x.len(),
            y.len(),
            "The number of data points must match the number of output targets."
        );

        *y = x.mapv(|xi| self.slope * xi + self.intercept);
    }

    fn default_target(&self, x: &ArrayBase<D, Ix1>) -> Array1<F> {
        Array1::zeros(x.len())
    }
}

/// Fit a univariate linear model with batch gradient descent.
///
/// Convenience wrapper around [`LinearDescent::params`]: assembles the two observation
/// vectors into a [`Dataset`], runs `iterations` update steps with the given learning rate
/// from the given initial parameters and returns the fitted model.
pub fn gradient_descent<F: Float>(
    x: Array1<F>,
    y: Array1<F>,
    initial_slope: F,
    initial_intercept: F,
    learning_rate: F,
    iterations: u64,
) -> Result<LinearDescent<F>> {
    LinearDescent::params()
        .initial_slope(initial_slope)
        .initial_intercept(initial_intercept)
        .learning_rate(learning_rate)
        .iterations(iterations)
        .fit(&Dataset::new(x, y))
}

/// Gradient of the halved mean squared error with respect to slope and intercept, evaluated
/// over the full training set at the given parameters.
fn gradient<F: Float, D: Data<Elem = F>>(
    slope: F,
    intercept: F,
    x: &ArrayBase<D, Ix1>,
    y: &ArrayBase<D, Ix1>,
) -> (F, F) {
    let mut slope_grad = F::zero();
    let mut intercept_grad = F::zero();

    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let residual = slope * xi + intercept - yi;
        slope_grad += residual * xi;
        intercept_grad += residual;
    }

    let n = F::cast(x.len());
    (slope_grad / n, intercept_grad / n)
}

/// Halved mean squared error of the line against the training set.
///
/// Halving cancels the factor of two the differentiation introduces, so the gradient above
/// is exactly the derivative of this quantity.
fn cost<F: Float, D: Data<Elem = F>>(
    slope: F,
    intercept: F,
    x: &ArrayBase<D, Ix1>,
    y: &ArrayBase<D, Ix1>,
) -> F {
    let squared_residuals = x
        .iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| {
            let residual = slope * xi + intercept - yi;
            residual * residual
        })
        .sum::<F>();

    squared_residuals / (F::cast(2.) * F::cast(x.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use descent::traits::Predict;
    use ndarray::array;

    fn house_prices() -> Dataset<f64> {
        // sizes in thousands of square feet against prices in thousands of dollars
        Dataset::new(array![1.0, 2.0, 3.0], array![300.0, 500.0, 680.0])
    }

    #[test]
    fn zero_iterations_keep_the_initial_parameters() {
        let model = LinearDescent::params()
            .initial_slope(2.0)
            .initial_intercept(-1.0)
            .iterations(0)
            .fit(&house_prices())
            .unwrap();

        assert_abs_diff_eq!(model.slope(), 2.0);
        assert_abs_diff_eq!(model.intercept(), -1.0);
        assert_abs_diff_eq!(model.predict_point(3.5), 2.0 * 3.5 - 1.0);
        assert!(model.losses().is_empty());
    }

    #[test]
    fn perfect_fit_is_a_fixed_point() {
        // all observations already lie on y = 2x + 1, so both derivatives vanish
        let dataset = Dataset::new(array![0.0, 1.0, 2.0], array![1.0, 3.0, 5.0]);
        let model = LinearDescent::params()
            .initial_slope(2.0)
            .initial_intercept(1.0)
            .learning_rate(0.1)
            .iterations(1)
            .fit(&dataset)
            .unwrap();

        assert_abs_diff_eq!(model.slope(), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(model.intercept(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn loss_decreases_monotonically() {
        let model = LinearDescent::params()
            .learning_rate(0.05)
            .iterations(500)
            .fit(&house_prices())
            .unwrap();

        for pair in model.losses().windows(2) {
            assert!(pair[1] <= pair[0]);
        }
    }

    #[test]
    fn converges_to_the_least_squares_line() {
        let model = gradient_descent(
            array![1.0, 2.0, 3.0],
            array![300.0, 500.0, 680.0],
            0.0,
            0.0,
            0.01,
            10_000,
        )
        .unwrap();

        // closed form least squares solution for this data
        assert_abs_diff_eq!(model.slope(), 190.0, epsilon = 0.1);
        assert_abs_diff_eq!(model.intercept(), 340.0 / 3.0, epsilon = 0.1);
        assert_abs_diff_eq!(
            model.predict_point(1.5),
            190.0 * 1.5 + 340.0 / 3.0,
            epsilon = 0.5
        );
    }

    #[test]
    fn halved_schedule_with_doubled_rate_differs() {
        // the update rule is not a function of learning_rate * iterations alone
        let coarse: LinearDescent<f64> = gradient_descent(
            array![1.0, 2.0, 3.0],
            array![300.0, 500.0, 680.0],
            0.0,
            0.0,
            0.1,
            5,
        )
        .unwrap();
        let fine: LinearDescent<f64> = gradient_descent(
            array![1.0, 2.0, 3.0],
            array![300.0, 500.0, 680.0],
            0.0,
            0.0,
            0.05,
            10,
        )
        .unwrap();

        assert!((coarse.slope() - fine.slope()).abs() > 1.0);
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let dataset = Dataset::new(Array1::<f64>::zeros(0), Array1::<f64>::zeros(0));
        let result = LinearDescent::params().fit(&dataset);

        assert!(matches!(
            result,
            Err(LinearDescentError::BaseCrate(Error::NotEnoughSamples))
        ));
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let dataset = Dataset::new(array![1.0, 2.0], array![1.0]);
        let result = LinearDescent::params().fit(&dataset);

        assert!(matches!(
            result,
            Err(LinearDescentError::BaseCrate(Error::MismatchedLengths(2, 1)))
        ));
    }

    #[test]
    fn invalid_learning_rate_is_rejected_before_fitting() {
        let result = LinearDescent::params()
            .learning_rate(f64::NAN)
            .fit(&house_prices());

        assert!(matches!(
            result,
            Err(LinearDescentError::InvalidLearningRate(_))
        ));
    }

    #[test]
    fn oversized_learning_rate_diverges_silently() {
        let model: LinearDescent<f64> = gradient_descent(
            array![1.0, 2.0, 3.0],
            array![300.0, 500.0, 680.0],
            0.0,
            0.0,
            1e3,
            200,
        )
        .unwrap();

        assert!(!model.slope().is_finite());
        assert!(!model.predict_point(1.5).is_finite());
    }

    #[test]
    fn batch_prediction_agrees_with_point_prediction() {
        let model = gradient_descent(
            array![1.0, 2.0, 3.0],
            array![300.0, 500.0, 680.0],
            0.0,
            0.0,
            0.01,
            10_000,
        )
        .unwrap();

        let predictions = model.predict(&array![1.0, 1.5]);

        assert_abs_diff_eq!(
            predictions,
            array![model.predict_point(1.0), model.predict_point(1.5)],
            epsilon = 1e-12
        );

        // predicting on a dataset evaluates the line at its records
        let over_dataset = model.predict(&house_prices());

        assert_abs_diff_eq!(
            over_dataset,
            array![
                model.predict_point(1.0),
                model.predict_point(2.0),
                model.predict_point(3.0)
            ],
            epsilon = 1e-12
        );
    }

    #[test]
    fn one_loss_entry_per_iteration() {
        let model = LinearDescent::params()
            .iterations(25)
            .fit(&house_prices())
            .unwrap();

        assert_eq!(model.losses().len(), 25);
    }

    #[test]
    fn non_finite_query_propagates() {
        let model = gradient_descent(
            array![1.0, 2.0, 3.0],
            array![300.0, 500.0, 680.0],
            0.0,
            0.0,
            0.01,
            100,
        )
        .unwrap();

        assert!(model.predict_point(f64::NAN).is_nan());
        assert!(model.predict_point(f64::INFINITY).is_infinite());
    }
}
