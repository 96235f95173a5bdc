use crate::error::LinearDescentError;
use crate::Result;
use descent::{Float, ParamGuard};

/// A verified hyperparameter set ready for the estimation of a gradient descent linear
/// regression model
///
/// See [`LinearDescentParams`](crate::LinearDescentParams) for more information.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearDescentValidParams<F> {
    pub(crate) learning_rate: F,
    pub(crate) iterations: u64,
    pub(crate) initial_slope: F,
    pub(crate) initial_intercept: F,
}

impl<F: Float> LinearDescentValidParams<F> {
    pub fn learning_rate(&self) -> F {
        self.learning_rate
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn initial_slope(&self) -> F {
        self.initial_slope
    }

    pub fn initial_intercept(&self) -> F {
        self.initial_intercept
    }
}

/// A hyperparameter set for univariate linear regression fitted with batch gradient descent
///
/// The parameters select the starting point of the descent and the fixed update schedule.
/// The optimizer executes exactly [`iterations`](Self::iterations) steps; it performs no
/// convergence test and no early exit, so a run with the same data and parameters always
/// yields the same model.
///
/// The parameter set can be verified into a
/// [`LinearDescentValidParams`](crate::hyperparams::LinearDescentValidParams) by calling
/// [ParamGuard::check](Self::check). It is also possible to directly fit a model with
/// [Fit::fit](descent::traits::Fit::fit) which implicitly verifies the parameter set prior to
/// the model estimation and forwards any error.
///
/// # Parameters
/// | Name | Default | Purpose | Range |
/// | :--- | :--- | :---| :--- |
/// | [learning_rate](Self::learning_rate) | `0.01` | Step size of each descent update | finite |
/// | [iterations](Self::iterations) | `1000` | Number of update steps | `[0, inf)` |
/// | [initial_slope](Self::initial_slope) | `0.0` | Slope before the first update | finite |
/// | [initial_intercept](Self::initial_intercept) | `0.0` | Intercept before the first update | finite |
///
/// # Errors
///
/// The following errors can come from invalid hyperparameters:
///
/// Returns [`InvalidLearningRate`](LinearDescentError::InvalidLearningRate) if the learning
/// rate is not finite.
///
/// Returns [`InvalidInitialSlope`](LinearDescentError::InvalidInitialSlope) or
/// [`InvalidInitialIntercept`](LinearDescentError::InvalidInitialIntercept) if a starting
/// parameter is not finite.
///
/// # Example
///
/// ```rust
/// use descent::prelude::*;
/// use descent_linear::{LinearDescent, LinearDescentError};
/// use ndarray::array;
///
/// let dataset = Dataset::new(array![1.0, 2.0, 3.0], array![300.0, 500.0, 680.0]);
///
/// // fit a model with an unchecked parameter set
/// let model = LinearDescent::params()
///     .learning_rate(0.01)
///     .iterations(10_000)
///     .fit(&dataset)?;
///
/// // transform into a verified parameter set
/// let checked = LinearDescent::<f64>::params().learning_rate(0.01).check()?;
/// # Ok::<(), LinearDescentError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct LinearDescentParams<F>(pub(crate) LinearDescentValidParams<F>);

impl<F: Float> Default for LinearDescentParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure and fit a gradient descent linear regression model
impl<F: Float> LinearDescentParams<F> {
    /// Create default hyperparameters with a zero starting point
    pub fn new() -> LinearDescentParams<F> {
        Self(LinearDescentValidParams {
            learning_rate: F::cast(0.01),
            iterations: 1000,
            initial_slope: F::zero(),
            initial_intercept: F::zero(),
        })
    }

    /// Set the learning rate.
    ///
    /// Defaults to `0.01` if not set
    ///
    /// `learning_rate` must be finite. Choosing a value small enough for the scale of the
    /// data is the caller's concern: an oversized rate makes the parameters diverge towards
    /// infinity without raising an error.
    pub fn learning_rate(mut self, learning_rate: F) -> Self {
        self.0.learning_rate = learning_rate;
        self
    }

    /// Set the number of update steps executed by the optimizer.
    ///
    /// Defaults to `1000` if not set
    ///
    /// With `0` the returned model carries the initial parameters unchanged.
    pub fn iterations(mut self, iterations: u64) -> Self {
        self.0.iterations = iterations;
        self
    }

    /// Set the slope the descent starts from.
    ///
    /// Defaults to `0.0` if not set
    ///
    /// `initial_slope` must be finite
    pub fn initial_slope(mut self, initial_slope: F) -> Self {
        self.0.initial_slope = initial_slope;
        self
    }

    /// Set the intercept the descent starts from.
    ///
    /// Defaults to `0.0` if not set
    ///
    /// `initial_intercept` must be finite
    pub fn initial_intercept(mut self, initial_intercept: F) -> Self {
        self.0.initial_intercept = initial_intercept;
        self
    }
}

impl<F: Float> ParamGuard for LinearDescentParams<F> {
    type Checked = LinearDescentValidParams<F>;
    type Error = LinearDescentError;

    /// Validate the hyperparameters
    fn check_ref(&self) -> Result<&Self::Checked> {
        if !self.0.learning_rate.is_finite() {
            Err(LinearDescentError::InvalidLearningRate(
                self.0.learning_rate.to_f32().unwrap(),
            ))
        } else if !self.0.initial_slope.is_finite() {
            Err(LinearDescentError::InvalidInitialSlope(
                self.0.initial_slope.to_f32().unwrap(),
            ))
        } else if !self.0.initial_intercept.is_finite() {
            Err(LinearDescentError::InvalidInitialIntercept(
                self.0.initial_intercept.to_f32().unwrap(),
            ))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LinearDescent;

    #[test]
    fn default_params_are_valid() {
        let params = LinearDescent::<f64>::params().check_unwrap();

        assert_eq!(params.learning_rate(), 0.01);
        assert_eq!(params.iterations(), 1000);
        assert_eq!(params.initial_slope(), 0.0);
        assert_eq!(params.initial_intercept(), 0.0);
    }

    #[test]
    fn negative_learning_rate_passes_checking() {
        // a negative rate ascends the cost surface, which is a tuning concern and not an error
        let result = LinearDescent::<f64>::params().learning_rate(-0.5).check();

        assert!(result.is_ok());
    }

    #[test]
    fn nan_learning_rate_is_rejected() {
        let result = LinearDescent::<f64>::params().learning_rate(f64::NAN).check();

        assert!(matches!(
            result,
            Err(LinearDescentError::InvalidLearningRate(_))
        ));
    }

    #[test]
    fn infinite_initial_parameters_are_rejected() {
        let result = LinearDescent::<f64>::params()
            .initial_slope(f64::INFINITY)
            .check();
        assert!(matches!(
            result,
            Err(LinearDescentError::InvalidInitialSlope(_))
        ));

        let result = LinearDescent::<f64>::params()
            .initial_intercept(f64::NEG_INFINITY)
            .check();
        assert!(matches!(
            result,
            Err(LinearDescentError::InvalidInitialIntercept(_))
        ));
    }
}
