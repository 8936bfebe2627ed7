use serde::{Serialize, Deserialize};


/// Summary of the non-missing values of a numeric attribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericStatistics {
    /// Number of non-missing values.
    pub count: usize,
    /// Minimum value. `f64::NAN` if `count == 0`.
    pub min: f64,
    /// Maximum value. `f64::NAN` if `count == 0`.
    pub max: f64,
    /// Mean value. `f64::NAN` if `count == 0`.
    pub mean: f64,
    /// Population standard deviation. `f64::NAN` if `count == 0`.
    pub std_dev: f64,
}


impl NumericStatistics {
    pub(crate) fn from_values<I>(values: I) -> Self
        where I: Iterator<Item = f64>,
    {
        let mut count = 0_usize;
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        let mut sum = 0.0;
        let mut sq_sum = 0.0;
        values.for_each(|v| {
            count += 1;
            min = min.min(v);
            max = max.max(v);
            sum += v;
            sq_sum += v * v;
        });

        if count == 0 {
            return Self {
                count, min: f64::NAN, max: f64::NAN,
                mean: f64::NAN, std_dev: f64::NAN,
            };
        }

        let n = count as f64;
        let mean = sum / n;
        let std_dev = (sq_sum / n - mean * mean).max(0.0).sqrt();
        Self { count, min, max, mean, std_dev, }
    }
}
