//! Maps raw values to interval codes.


/// Returns the index of the interval of `cuts` containing `value`,
/// i.e., the number of cuts `<= value`.
/// Returns `None` for a missing value.
#[inline]
pub fn interval_index(value: f64, cuts: &[f64]) -> Option<usize> {
    if value.is_nan() {
        return None;
    }
    Some(cuts.partition_point(|&cut| cut <= value))
}


/// Returns the interval code of `value` as `f64`.
/// A missing value stays missing.
#[inline]
pub fn encode(value: f64, cuts: &[f64]) -> f64 {
    interval_index(value, cuts)
        .map(|i| i as f64)
        .unwrap_or(f64::NAN)
}


/// Display labels of the `cuts.len() + 1` intervals.
pub(crate) fn interval_labels(cuts: &[f64]) -> Vec<String> {
    if cuts.is_empty() {
        return vec!["(-inf, +inf)".to_string()];
    }

    let n_cuts = cuts.len();
    let mut labels = Vec::with_capacity(n_cuts + 1);
    labels.push(format!("(-inf, {})", cuts[0]));
    cuts.windows(2)
        .for_each(|w| { labels.push(format!("[{}, {})", w[0], w[1])); });
    labels.push(format!("[{}, +inf)", cuts[n_cuts - 1]));
    labels
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_values_belong_to_the_upper_interval() {
        let cuts = [1.0, 2.0, 3.0];
        assert_eq!(interval_index(0.5, &cuts), Some(0));
        assert_eq!(interval_index(1.0, &cuts), Some(1));
        assert_eq!(interval_index(2.5, &cuts), Some(2));
        assert_eq!(interval_index(3.0, &cuts), Some(3));
        assert_eq!(interval_index(99.0, &cuts), Some(3));
    }


    #[test]
    fn missing_stays_missing() {
        assert!(encode(f64::NAN, &[1.0, 2.0]).is_nan());
        assert!(encode(f64::NAN, &[]).is_nan());
        assert_eq!(encode(7.0, &[]), 0.0);
    }


    #[test]
    fn labels_cover_every_interval() {
        assert_eq!(interval_labels(&[]), vec!["(-inf, +inf)"]);
        assert_eq!(
            interval_labels(&[30.0, 40.5]),
            vec!["(-inf, 30)", "[30, 40.5)", "[40.5, +inf)"]
        );
    }
}
