use super::{Dataset, DatasetBase, Float, Records};
use ndarray::{s, Array1};

impl<R: Records, T> DatasetBase<R, T> {
    /// Create a new dataset from records and targets
    pub fn new(records: R, targets: T) -> DatasetBase<R, T> {
        DatasetBase { records, targets }
    }

    /// A reference to the records
    pub fn records(&self) -> &R {
        &self.records
    }

    /// A reference to the targets
    pub fn targets(&self) -> &T {
        &self.targets
    }
}

impl<F: Float> Dataset<F> {
    /// Split the dataset into two disjoint parts
    ///
    /// The first part contains `ratio` of the observations, rounded up, the remainder goes to
    /// the second part. The order of observations is preserved, no shuffling is performed.
    pub fn split_with_ratio(self, ratio: f32) -> (Dataset<F>, Dataset<F>) {
        let n = (self.records.len() as f32 * ratio).ceil() as usize;
        let n = n.min(self.records.len());

        let DatasetBase { records, targets } = self;
        let first_records = records.slice(s![..n]).to_owned();
        let second_records = records.slice(s![n..]).to_owned();
        let first_targets = targets.slice(s![..n]).to_owned();
        let second_targets = targets.slice(s![n..]).to_owned();

        (
            DatasetBase::new(first_records, first_targets),
            DatasetBase::new(second_records, second_targets),
        )
    }

    /// Map targets with a function
    pub fn map_targets<T, G: FnMut(&F) -> T>(self, fnc: G) -> DatasetBase<Array1<F>, Array1<T>> {
        let DatasetBase { records, targets } = self;

        DatasetBase {
            records,
            targets: targets.map(fnc),
        }
    }
}

impl<F: Float> From<(Array1<F>, Array1<F>)> for Dataset<F> {
    fn from(data: (Array1<F>, Array1<F>)) -> Self {
        DatasetBase {
            records: data.0,
            targets: data.1,
        }
    }
}
