//! Maximal discernibility (MD) heuristics.
//!
//! A *conflicting pair* is a pair of records with different classes.
//! A cut on a numeric attribute discerns a pair if the values of the
//! two records lie on opposite sides of it. Pairs that differ on a
//! nominal conditional attribute are discerned from the start.
//! Both heuristics greedily add the cut discerning most of the
//! remaining pairs; the global one over the whole sample, the local one
//! recursively on the two record subsets each cut induces.
use fixedbitset::FixedBitSet;

use crate::{Sample, Progress, NoProgress};
use crate::error::Result;
use crate::progress::check;
use super::cut_generator::*;


/// A cut chosen by the greedy step.
#[derive(Debug, Clone, Copy)]
struct BestCut {
    attribute: usize,
    cut: f64,
    discerned: usize,
}


/// The conflicting pairs among a set of records,
/// with the set of pairs already discerned.
struct Discernibility<'a> {
    sample: &'a Sample,
    pairs: Vec<(usize, usize)>,
    discerned: FixedBitSet,
}


impl<'a> Discernibility<'a> {
    /// Collects the conflicting pairs of the records in `indices`.
    fn new(sample: &'a Sample, indices: &[usize]) -> Self {
        let nominal = sample.header()
            .conditional_indices()
            .filter(|&a| sample.header()[a].is_nominal())
            .collect::<Vec<_>>();

        let mut pairs = Vec::new();
        for (k, &i) in indices.iter().enumerate() {
            let yi = match sample.decision(i) {
                Some(y) => y,
                None => { continue; },
            };
            for &j in &indices[k + 1..] {
                match sample.decision(j) {
                    Some(yj) if yj != yi => {},
                    _ => { continue; },
                }
                let by_nominal = nominal.iter().any(|&a| {
                    let attr = &sample.header()[a];
                    match (attr.local_code(sample.value(i, a)), attr.local_code(sample.value(j, a))) {
                        (Some(ci), Some(cj)) => ci != cj,
                        _ => false,
                    }
                });
                if !by_nominal {
                    pairs.push((i, j));
                }
            }
        }

        let discerned = FixedBitSet::with_capacity(pairs.len());
        Self { sample, pairs, discerned, }
    }


    /// Returns `true` if every pair is discerned.
    fn is_complete(&self) -> bool {
        self.discerned.count_ones(..) == self.pairs.len()
    }


    /// Returns the cut discerning most of the remaining pairs.
    /// Ties go to the smaller attribute index, then to the smaller cut.
    fn best_cut(&self, attributes: &[usize], indices: &[usize])
        -> Option<BestCut>
    {
        let mut best: Option<BestCut> = None;
        for &attribute in attributes {
            let mut values = indices.iter()
                .map(|&i| self.sample.value(i, attribute))
                .filter(|v| !v.is_nan())
                .collect::<Vec<_>>();
            values.sort_by(|a, b| a.total_cmp(b));
            values.dedup();
            if values.len() < 2 { continue; }

            // Pair `(lo, hi)` is discerned by the cuts
            // between `values[rank(lo)]` and `values[rank(hi)]`.
            let mut diff = vec![0_i64; values.len()];
            for (p, &(i, j)) in self.pairs.iter().enumerate() {
                if self.discerned.contains(p) { continue; }
                let (vi, vj) = (
                    self.sample.value(i, attribute),
                    self.sample.value(j, attribute),
                );
                if vi.is_nan() || vj.is_nan() || vi == vj { continue; }
                let (lo, hi) = if vi < vj { (vi, vj) } else { (vj, vi) };
                diff[values.partition_point(|&v| v < lo)] += 1;
                diff[values.partition_point(|&v| v < hi)] -= 1;
            }

            let mut running = 0_i64;
            for k in 0..values.len() - 1 {
                running += diff[k];
                let discerned = running.max(0) as usize;
                if best.map_or(true, |b| discerned > b.discerned) {
                    best = Some(BestCut {
                        attribute,
                        cut: midpoint(values[k], values[k + 1]),
                        discerned,
                    });
                }
            }
        }
        best.filter(|b| b.discerned > 0)
    }


    /// Marks the pairs discerned by `cut` on `attribute`.
    fn apply(&mut self, attribute: usize, cut: f64) {
        for (p, &(i, j)) in self.pairs.iter().enumerate() {
            if self.discerned.contains(p) { continue; }
            let (vi, vj) = (
                self.sample.value(i, attribute),
                self.sample.value(j, attribute),
            );
            if vi.is_nan() || vj.is_nan() { continue; }
            if (vi < cut) != (vj < cut) {
                self.discerned.insert(p);
            }
        }
    }
}


fn collect(
    sample: &Sample,
    attributes: &[usize],
    mut found: Vec<Vec<f64>>,
) -> Vec<Option<Vec<f64>>>
{
    let mut cuts = vec![None; sample.header().len()];
    for &attribute in attributes {
        let values = std::mem::take(&mut found[attribute]);
        cuts[attribute] = Some(normalize(values));
    }
    cuts
}


/// Global MD heuristic: greedy cut selection over the whole sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct MdGlobal;


impl MdGlobal {
    /// Construct a new instance of [`MdGlobal`].
    pub fn new() -> Self {
        Self
    }


    fn run(&self, sample: &Sample, progress: &dyn Progress)
        -> Result<Vec<Option<Vec<f64>>>>
    {
        let attributes = sample.header().numeric_indices().collect::<Vec<_>>();
        let indices = all_indices(sample);
        let mut found = vec![Vec::new(); sample.header().len()];

        let mut table = Discernibility::new(sample, &indices);
        while !table.is_complete() {
            check(progress)?;
            let best = match table.best_cut(&attributes, &indices) {
                Some(best) => best,
                None => { break; },
            };
            found[best.attribute].push(best.cut);
            table.apply(best.attribute, best.cut);
        }

        Ok(collect(sample, &attributes, found))
    }
}


impl CutGenerator for MdGlobal {
    fn name(&self) -> &str {
        "MD heuristic (global)"
    }


    fn generate_cuts(&self, attribute: usize, sample: &Sample) -> Vec<f64> {
        self.run(sample, &NoProgress)
            .ok()
            .and_then(|mut cuts| cuts[attribute].take())
            .unwrap_or_default()
    }


    fn generate_all(&self, sample: &Sample, progress: &mut dyn Progress)
        -> Result<Vec<Option<Vec<f64>>>>
    {
        progress.set(self.name(), 1);
        let cuts = self.run(sample, &*progress)?;
        progress.step();
        Ok(cuts)
    }
}


/// Local MD heuristic: each chosen cut splits the records in two,
/// and the search continues independently on both subsets
/// until their records are pairwise indiscernible.
#[derive(Debug, Clone, Copy, Default)]
pub struct MdLocal;


impl MdLocal {
    /// Construct a new instance of [`MdLocal`].
    pub fn new() -> Self {
        Self
    }


    fn run(&self, sample: &Sample, progress: &dyn Progress)
        -> Result<Vec<Option<Vec<f64>>>>
    {
        let attributes = sample.header().numeric_indices().collect::<Vec<_>>();
        let mut found = vec![Vec::new(); sample.header().len()];
        split_locally(sample, &attributes, all_indices(sample), &mut found, progress)?;
        Ok(collect(sample, &attributes, found))
    }
}


/// Records missing the cut attribute go to both subsets.
fn split_locally(
    sample: &Sample,
    attributes: &[usize],
    indices: Vec<usize>,
    found: &mut [Vec<f64>],
    progress: &dyn Progress,
) -> Result<()>
{
    check(progress)?;

    let table = Discernibility::new(sample, &indices);
    if table.is_complete() { return Ok(()); }
    let best = match table.best_cut(attributes, &indices) {
        Some(best) => best,
        None => { return Ok(()); },
    };
    found[best.attribute].push(best.cut);

    let mut left = Vec::new();
    let mut right = Vec::new();
    for i in indices {
        let value = sample.value(i, best.attribute);
        if value.is_nan() {
            left.push(i);
            right.push(i);
        } else if value < best.cut {
            left.push(i);
        } else {
            right.push(i);
        }
    }

    split_locally(sample, attributes, left, found, progress)?;
    split_locally(sample, attributes, right, found, progress)
}


impl CutGenerator for MdLocal {
    fn name(&self) -> &str {
        "MD heuristic (local)"
    }


    fn generate_cuts(&self, attribute: usize, sample: &Sample) -> Vec<f64> {
        self.run(sample, &NoProgress)
            .ok()
            .and_then(|mut cuts| cuts[attribute].take())
            .unwrap_or_default()
    }


    fn generate_all(&self, sample: &Sample, progress: &mut dyn Progress)
        -> Result<Vec<Option<Vec<f64>>>>
    {
        progress.set(self.name(), 1);
        let cuts = self.run(sample, &*progress)?;
        progress.step();
        Ok(cuts)
    }
}
