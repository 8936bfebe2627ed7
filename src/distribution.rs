//! Label distribution utilities shared by the discretizers
//! and the decision tree.
use crate::Sample;


/// Counts the records in `indices` per class.
/// Records whose decision is missing are skipped.
pub fn class_counts(sample: &Sample, indices: &[usize]) -> Vec<usize> {
    let mut counts = vec![0_usize; sample.header().n_classes()];
    indices.iter()
        .filter_map(|&i| sample.decision(i))
        .for_each(|y| { counts[y] += 1; });
    counts
}


/// Returns the Shannon entropy (in bits) of a frequency vector.
/// The entropy of an all-zero vector is `0`.
pub fn entropy(counts: &[usize]) -> f64 {
    let total = counts.iter().sum::<usize>();
    if total == 0 { return 0.0; }
    let total = total as f64;

    counts.iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / total;
            -p * p.log2()
        })
        .sum::<f64>()
}


/// Returns the chi-square statistic of the `2 x k` contingency table
/// whose rows are `left` and `right`.
/// Terms with zero expected count are skipped.
pub fn chi_square(left: &[usize], right: &[usize]) -> f64 {
    let left_total = left.iter().sum::<usize>() as f64;
    let right_total = right.iter().sum::<usize>() as f64;
    let total = left_total + right_total;
    if total == 0.0 { return 0.0; }

    left.iter()
        .zip(right)
        .map(|(&l, &r)| {
            let column = (l + r) as f64;
            [(l as f64, left_total), (r as f64, right_total)].into_iter()
                .map(|(observed, row)| {
                    let expected = row * column / total;
                    if expected == 0.0 {
                        0.0
                    } else {
                        (observed - expected).powi(2) / expected
                    }
                })
                .sum::<f64>()
        })
        .sum::<f64>()
}


/// Returns the class with the largest count.
/// Ties go to the smallest class code.
/// Returns `None` for an all-zero vector.
pub fn majority(counts: &[usize]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (y, &c) in counts.iter().enumerate() {
        if c == 0 { continue; }
        match best {
            Some((_, b)) if b >= c => {},
            _ => { best = Some((y, c)); },
        }
    }
    best.map(|(y, _)| y)
}


/// Number of classes with a nonzero count.
#[inline]
pub fn n_present(counts: &[usize]) -> usize {
    counts.iter().filter(|&&c| c > 0).count()
}


/// Element-wise sum of `other` into `acc`.
#[inline]
pub(crate) fn accumulate(acc: &mut [usize], other: &[usize]) {
    acc.iter_mut()
        .zip(other)
        .for_each(|(a, b)| { *a += b; });
}


/// Information gain of splitting `parent` into `branches`.
/// `parent` must be the element-wise sum of `branches`.
pub fn information_gain<B>(parent: &[usize], branches: &[B]) -> f64
    where B: AsRef<[usize]>
{
    let total = parent.iter().sum::<usize>() as f64;
    if total == 0.0 { return 0.0; }
    let weighted = branches.iter()
        .map(|branch| {
            let branch = branch.as_ref();
            let size = branch.iter().sum::<usize>() as f64;
            size / total * entropy(branch)
        })
        .sum::<f64>();
    entropy(parent) - weighted
}


/// Gain ratio of splitting `parent` into `branches`:
/// the information gain divided by the entropy of the branch sizes.
/// Returns `None` if fewer than 2 branches are non-empty.
pub fn gain_ratio<B>(parent: &[usize], branches: &[B]) -> Option<f64>
    where B: AsRef<[usize]>
{
    let sizes = branches.iter()
        .map(|branch| branch.as_ref().iter().sum::<usize>())
        .collect::<Vec<_>>();
    if n_present(&sizes) < 2 { return None; }

    let split_info = entropy(&sizes);
    Some(information_gain(parent, branches) / split_info)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entropy_of_degenerate_vectors() {
        assert_eq!(entropy(&[]), 0.0);
        assert_eq!(entropy(&[0, 0, 0]), 0.0);
        assert_eq!(entropy(&[0, 7, 0]), 0.0);
    }


    #[test]
    fn entropy_is_bounded_by_log_of_present_classes() {
        let cases: [&[usize]; 4] = [&[1, 1], &[3, 1, 0], &[2, 2, 2, 2], &[5, 1, 9]];
        for counts in cases {
            let bound = (n_present(counts) as f64).log2();
            assert!(entropy(counts) <= bound + 1e-12);
        }
        assert!((entropy(&[4, 4]) - 1.0).abs() < 1e-12);
        assert!((entropy(&[1, 1, 1, 1]) - 2.0).abs() < 1e-12);
    }


    #[test]
    fn chi_square_of_a_separated_table() {
        // [[1, 0], [0, 1]]: every expected count is 0.5.
        assert!((chi_square(&[1, 0], &[0, 1]) - 2.0).abs() < 1e-12);
        // Identical rows carry no evidence.
        assert_eq!(chi_square(&[2, 0], &[1, 0]), 0.0);
        assert_eq!(chi_square(&[0, 0], &[0, 0]), 0.0);
    }


    #[test]
    fn majority_prefers_smallest_code_on_ties() {
        assert_eq!(majority(&[0, 3, 3]), Some(1));
        assert_eq!(majority(&[1, 0, 2]), Some(2));
        assert_eq!(majority(&[0, 0]), None);
    }


    #[test]
    fn gain_ratio_needs_two_branches() {
        let parent = [2, 2];
        assert_eq!(gain_ratio(&parent, &[vec![2, 2], vec![0, 0]]), None);
        let ratio = gain_ratio(&parent, &[vec![2, 0], vec![0, 2]]).unwrap();
        assert!((ratio - 1.0).abs() < 1e-12);
    }
}
