//! Entropy-minimizing boundary search and the MDL acceptance rule
//! of Fayyad and Irani.
use crate::distribution::{entropy, n_present};
use super::cut_generator::midpoint;


/// The best binary boundary of a sorted `(value, class)` slice.
#[derive(Debug, Clone)]
pub(crate) struct Boundary {
    /// Index of the first item of the right part.
    pub(crate) position: usize,
    pub(crate) cut: f64,
    pub(crate) weighted_entropy: f64,
    pub(crate) total: Vec<usize>,
    pub(crate) left: Vec<usize>,
    pub(crate) right: Vec<usize>,
}


impl Boundary {
    /// Information gain of the boundary.
    #[inline]
    pub(crate) fn gain(&self) -> f64 {
        entropy(&self.total) - self.weighted_entropy
    }


    /// Returns `true` if the MDL criterion accepts this boundary.
    pub(crate) fn is_accepted(&self) -> bool {
        mdlp_accepts(&self.total, &self.left, &self.right, self.gain())
    }
}


/// Returns the boundary between two distinct adjacent values
/// minimizing the weighted entropy of both sides.
/// The leftmost one wins ties.
/// Returns `None` if `items` holds fewer than 2 distinct values.
pub(crate) fn best_boundary(items: &[(f64, usize)], n_classes: usize)
    -> Option<Boundary>
{
    let n_items = items.len();
    if n_items < 2 { return None; }

    let mut total = vec![0_usize; n_classes];
    items.iter().for_each(|&(_, y)| { total[y] += 1; });

    let mut left = vec![0_usize; n_classes];
    let mut right = total.clone();
    let mut best: Option<(usize, f64)> = None;
    for i in 1..n_items {
        let y = items[i - 1].1;
        left[y] += 1;
        right[y] -= 1;
        if items[i - 1].0 == items[i].0 { continue; }

        let weighted = (i as f64 * entropy(&left)
            + (n_items - i) as f64 * entropy(&right))
            / n_items as f64;
        if best.map_or(true, |(_, e)| weighted < e) {
            best = Some((i, weighted));
        }
    }

    let (position, weighted_entropy) = best?;
    let mut left = vec![0_usize; n_classes];
    items[..position].iter().for_each(|&(_, y)| { left[y] += 1; });
    let right = total.iter()
        .zip(&left)
        .map(|(t, l)| t - l)
        .collect();
    let cut = midpoint(items[position - 1].0, items[position].0);

    Some(Boundary { position, cut, weighted_entropy, total, left, right, })
}


/// The MDL stopping rule: accept the split if
/// `gain > (log2(N - 1) + delta) / N`, where
/// `delta = log2(3^k - 2) - (k * E - k0 * E0 - k1 * E1)`.
pub(crate) fn mdlp_accepts(
    total: &[usize],
    left: &[usize],
    right: &[usize],
    gain: f64,
) -> bool
{
    let n = total.iter().sum::<usize>();
    if n < 2 { return false; }
    let n = n as f64;

    let k = n_present(total) as f64;
    let k0 = n_present(left) as f64;
    let k1 = n_present(right) as f64;

    let delta = (3f64.powf(k) - 2.0).log2()
        - (k * entropy(total) - k0 * entropy(left) - k1 * entropy(right));
    let bound = ((n - 1.0).log2() + delta) / n;
    gain > bound
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separable_classes_are_accepted() {
        let items = [(23.0, 0), (25.0, 0), (35.0, 1), (45.0, 1)];
        let boundary = best_boundary(&items, 2).unwrap();
        assert_eq!(boundary.position, 2);
        assert_eq!(boundary.cut, 30.0);
        assert!((boundary.gain() - 1.0).abs() < 1e-12);
        assert!(boundary.is_accepted());
    }


    #[test]
    fn pure_range_is_rejected() {
        let items = [(23.0, 0), (25.0, 0)];
        let boundary = best_boundary(&items, 2).unwrap();
        assert!(!boundary.is_accepted());
    }


    #[test]
    fn single_value_has_no_boundary() {
        let items = [(1.0, 0), (1.0, 1), (1.0, 0)];
        assert!(best_boundary(&items, 2).is_none());
        assert!(best_boundary(&[], 2).is_none());
    }
}
