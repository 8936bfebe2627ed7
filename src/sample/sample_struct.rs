use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::Index;

use polars::prelude::{DataFrame, DataType, Series};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::error::{MiniSplitsError, Result};
use super::attribute_struct::*;
use super::header::Header;
use super::statistics::NumericStatistics;


/// Struct `Sample` holds a batch of records sharing one [`Header`].
/// Each record is a vector of `f64`, one value per attribute;
/// `f64::NAN` stands for a missing value and
/// nominal values are stored as their local codes.
///
/// Algorithms in this crate only borrow a `Sample`
/// and never modify it.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) header: Header,
    pub(super) records: Vec<Vec<f64>>,
}


impl Sample {
    /// Construct a sample from a header and records.
    /// Returns an error if a record does not fit the header
    /// or if the decision attribute is not nominal.
    pub fn new(header: Header, records: Vec<Vec<f64>>) -> Result<Self> {
        if let Some(decision) = header.decision() {
            if !decision.is_nominal() {
                return Err(MiniSplitsError::NotNominal(decision.name().to_string()));
            }
        }
        records.iter()
            .try_for_each(|record| header.check_width(record))?;
        Ok(Self { header, records, })
    }


    /// Convert `polars::DataFrame` and `polars::Series` into `Sample`.
    /// Utf8 columns become nominal attributes,
    /// the other columns are cast to `f64`.
    /// The target series becomes the (nominal) decision attribute,
    /// placed after the columns of `data`.
    pub fn from_dataframe(data: DataFrame, target: Series) -> Result<Self> {
        let mut attributes = Vec::with_capacity(data.width() + 1);
        let mut columns = Vec::with_capacity(data.width() + 1);
        for series in data.get_columns() {
            let (attribute, column) = column_from_series(series)?;
            attributes.push(attribute);
            columns.push(column);
        }

        let (mut attribute, column) = column_from_series(&target)?;
        let column = attribute.into_nominal(&column);
        attributes.push(attribute.with_role(AttributeRole::Decision));
        columns.push(column);

        let header = Header::new(attributes);
        let records = transpose(columns, data.height());
        Self::new(header, records)
    }


    /// Read a CSV format file to `Sample` type.
    /// Cells that are empty or `?` are missing values.
    /// A column whose non-missing cells all parse as `f64` is numeric,
    /// the other columns are nominal.
    pub fn from_csv<P>(file: P, has_header: bool) -> Result<Self>
        where P: AsRef<Path>,
    {
        // Open the given `file`.
        let file = File::open(file)?;
        let mut lines = BufReader::new(file).lines();

        let mut names = None;
        if has_header {
            if let Some(line) = lines.next() {
                let line = line?;
                names = Some(split_line(&line));
            }
        }

        let mut rows = Vec::new();
        for line in lines {
            let line = line?;
            if line.trim().is_empty() { continue; }
            rows.push(split_line(&line));
        }

        let width = names.as_ref()
            .map(Vec::len)
            .or_else(|| rows.first().map(Vec::len))
            .unwrap_or(0);

        // If the header does not exist,
        // construct a dummy one.
        let names = names.unwrap_or_else(|| {
            (1..=width).map(|i| format!("Feat. [{i}]")).collect()
        });

        if let Some(row) = rows.iter().find(|row| row.len() != width) {
            return Err(MiniSplitsError::HeaderMismatch {
                expected: width,
                found: row.len(),
            });
        }

        let (attributes, columns): (Vec<_>, Vec<_>) = names.into_iter()
            .enumerate()
            .map(|(j, name)| {
                let cells = rows.iter()
                    .map(|row| row[j].as_str())
                    .collect::<Vec<_>>();
                column_from_cells(name, &cells)
            })
            .unzip();

        let header = Header::new(attributes);
        let records = transpose(columns, rows.len());
        Self::new(header, records)
    }


    /// Set the attribute named `target` as the decision attribute.
    /// A numeric attribute is converted into a nominal one.
    pub fn set_target<S: AsRef<str>>(mut self, target: S) -> Result<Self> {
        let target = target.as_ref();
        let pos = self.header.position(target)
            .ok_or_else(|| MiniSplitsError::UnknownAttribute(target.to_string()))?;

        let attribute = &mut self.header.attributes_mut()[pos];
        if attribute.is_numeric() {
            let column = self.records.iter()
                .map(|record| record[pos])
                .collect::<Vec<_>>();
            let codes = attribute.into_nominal(&column);
            self.records.iter_mut()
                .zip(codes)
                .for_each(|(record, code)| { record[pos] = code; });
        }
        self.header.set_decision(pos)?;
        Ok(self)
    }


    /// Returns the header.
    pub fn header(&self) -> &Header {
        &self.header
    }


    /// Returns the records.
    pub fn records(&self) -> &[Vec<f64>] {
        &self.records[..]
    }


    /// Returns the pair of the number of records and
    /// the number of attributes.
    pub fn shape(&self) -> (usize, usize) {
        (self.records.len(), self.header.len())
    }


    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }


    /// Returns `true` if the sample has no record.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }


    /// Returns the value of `attribute` in the record `row`.
    #[inline]
    pub fn value(&self, row: usize, attribute: usize) -> f64 {
        self.records[row][attribute]
    }


    /// Returns the class (local code of the decision) of the record `row`,
    /// or `None` if it is missing.
    #[inline]
    pub fn decision(&self, row: usize) -> Option<usize> {
        let d = self.header.decision_index()?;
        self.header[d].local_code(self.records[row][d])
    }


    /// Returns an error if no decision attribute is set.
    pub(crate) fn check_target(&self) -> Result<()> {
        match self.header.decision_index() {
            Some(_) => Ok(()),
            None => Err(MiniSplitsError::MissingTarget),
        }
    }


    /// Number of records per class.
    pub fn decision_distribution(&self) -> Vec<usize> {
        let indices = (0..self.len()).collect::<Vec<_>>();
        crate::distribution::class_counts(self, &indices)
    }


    /// Statistics of a numeric attribute over its non-missing values.
    /// Returns `None` for a nominal attribute.
    pub fn numeric_statistics(&self, attribute: usize)
        -> Option<NumericStatistics>
    {
        if !self.header[attribute].is_numeric() {
            return None;
        }
        let values = self.records.iter()
            .map(|record| record[attribute])
            .filter(|v| !v.is_nan());
        Some(NumericStatistics::from_values(values))
    }


    /// Returns the pairs `(value, class)` of the records in `indices`
    /// whose value on `attribute` and decision are both present,
    /// sorted by value.
    pub(crate) fn labeled_values(&self, attribute: usize, indices: &[usize])
        -> Vec<(f64, usize)>
    {
        let mut items = indices.iter()
            .filter_map(|&i| {
                let value = self.value(i, attribute);
                if value.is_nan() { return None; }
                self.decision(i).map(|y| (value, y))
            })
            .collect::<Vec<_>>();
        items.sort_by(|a, b| a.0.total_cmp(&b.0));
        items
    }


    /// Returns a new sample made of the records in `indices`.
    pub fn subset(&self, indices: &[usize]) -> Self {
        let records = indices.iter()
            .map(|&i| self.records[i].clone())
            .collect();
        Self { header: self.header.clone(), records, }
    }


    /// Split the records at random into `(train, holdout)`,
    /// where `holdout` receives `ratio` of the records.
    /// A non-empty sample always keeps at least one record in `train`.
    /// Both parts keep the original record order.
    pub fn split_holdout(&self, ratio: f64, seed: u64) -> (Self, Self) {
        let mut indices = (0..self.len()).collect::<Vec<_>>();
        let mut rng = StdRng::seed_from_u64(seed);
        indices.shuffle(&mut rng);

        let n_holdout = ((self.len() as f64 * ratio).round() as usize)
            .min(self.len().saturating_sub(1));
        let (holdout, train) = indices.split_at_mut(n_holdout);
        holdout.sort_unstable();
        train.sort_unstable();

        (self.subset(train), self.subset(holdout))
    }
}


impl Index<usize> for Sample {
    type Output = [f64];
    fn index(&self, row: usize) -> &Self::Output {
        &self.records[row][..]
    }
}


/// Returns `true` if the raw cell denotes a missing value.
#[inline]
pub(super) fn is_missing(cell: &str) -> bool {
    cell.is_empty() || cell == "?"
}


fn split_line(line: &str) -> Vec<String> {
    line.split(',')
        .map(|cell| cell.trim().to_string())
        .collect()
}


fn column_from_cells(name: String, cells: &[&str]) -> (Attribute, Vec<f64>) {
    let parsed = cells.iter()
        .map(|cell| {
            if is_missing(cell) { Some(f64::NAN) } else { cell.parse::<f64>().ok() }
        })
        .collect::<Option<Vec<_>>>();

    if let Some(column) = parsed {
        return (Attribute::numeric(name), column);
    }

    let mut dict = NominalDictionary::new();
    let column = cells.iter()
        .map(|cell| {
            if is_missing(cell) { f64::NAN } else { dict.intern(cell) as f64 }
        })
        .collect();
    let values = Vec::<String>::from(dict);
    (Attribute::nominal_with_values(name, values), column)
}


fn column_from_series(series: &Series) -> Result<(Attribute, Vec<f64>)> {
    let name = series.name();
    if series.dtype() == &DataType::Utf8 {
        let mut dict = NominalDictionary::new();
        let column = series.utf8()?
            .into_iter()
            .map(|cell| match cell {
                Some(raw) if !is_missing(raw) => dict.intern(raw) as f64,
                _ => f64::NAN,
            })
            .collect();
        let values = Vec::<String>::from(dict);
        return Ok((Attribute::nominal_with_values(name, values), column));
    }

    let series = series.cast(&DataType::Float64)?;
    let column = series.f64()?
        .into_iter()
        .map(|v| v.unwrap_or(f64::NAN))
        .collect();
    Ok((Attribute::numeric(name), column))
}


fn transpose(columns: Vec<Vec<f64>>, n_records: usize) -> Vec<Vec<f64>> {
    (0..n_records).map(|i| columns.iter().map(|col| col[i]).collect())
        .collect()
}
