use descent::metrics::Regression;
use descent::prelude::*;
use descent_linear::{LinearDescent, Result};
use ndarray::array;

fn main() -> Result<()> {
    // house sizes in thousands of square feet against prices in thousands of dollars
    let dataset = Dataset::new(array![1.0, 2.0, 3.0], array![300.0, 500.0, 680.0]);

    let model = LinearDescent::params()
        .learning_rate(0.01)
        .iterations(10_000)
        .fit(&dataset)?;

    println!("slope:     {}", model.slope());
    println!("intercept: {}", model.intercept());
    println!("final training loss: {}", model.losses().last().unwrap());

    println!("price of a 1500 sqft house: {}", model.predict_point(1.5));

    // score the fit on the training set
    let fitted = model.predict(dataset.records());
    println!("r2: {}", fitted.r2(dataset.targets()));

    Ok(())
}
