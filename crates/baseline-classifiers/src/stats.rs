use std::collections::BTreeMap;

use ndarray::{Array1, Array2};

use crate::error::BaselineError;

/// Label-distribution summary computed from training labels.
///
/// Classes are kept in ascending order; `counts` and `probabilities` are
/// aligned with `classes`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassPrior<L> {
    classes: Vec<L>,
    counts: Vec<usize>,
    probabilities: Array1<f64>,
    majority: usize,
}

impl<L: Clone + Ord> ClassPrior<L> {
    /// Count label occurrences and derive the empirical class prior.
    ///
    /// # Errors
    ///
    /// `BaselineError::EmptyTrainingSet` when `y` is empty.
    pub fn from_labels(y: &[L]) -> Result<Self, BaselineError> {
        if y.is_empty() {
            return Err(BaselineError::EmptyTrainingSet);
        }

        let mut tally: BTreeMap<&L, usize> = BTreeMap::new();
        for label in y {
            *tally.entry(label).or_insert(0) += 1;
        }

        let n = y.len() as f64;
        let classes: Vec<L> = tally.keys().map(|&l| l.clone()).collect();
        let counts: Vec<usize> = tally.values().copied().collect();
        let probabilities = counts.iter().map(|&c| c as f64 / n).collect::<Array1<f64>>();

        // First maximum, so ties go to the smallest label.
        let mut majority = 0;
        for (i, &c) in counts.iter().enumerate() {
            if c > counts[majority] {
                majority = i;
            }
        }

        Ok(Self {
            classes,
            counts,
            probabilities,
            majority,
        })
    }

    pub fn classes(&self) -> &[L] {
        &self.classes
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn probabilities(&self) -> &Array1<f64> {
        &self.probabilities
    }

    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }

    pub fn majority_index(&self) -> usize {
        self.majority
    }

    pub fn majority_label(&self) -> &L {
        &self.classes[self.majority]
    }

    pub fn index_of(&self, label: &L) -> Option<usize> {
        self.classes.binary_search(label).ok()
    }

    /// `n_rows` one-hot rows, all hot at `class_index`.
    pub fn one_hot(&self, n_rows: usize, class_index: usize) -> Array2<f64> {
        one_hot_rows(self.n_classes(), std::iter::repeat(class_index).take(n_rows))
    }

    /// The class prior repeated for `n_rows` rows.
    pub fn tile(&self, n_rows: usize) -> Array2<f64> {
        Array2::from_shape_fn((n_rows, self.n_classes()), |(_, j)| self.probabilities[j])
    }
}

/// Build a matrix of one-hot rows from class indices.
pub fn one_hot_rows<I>(n_classes: usize, indices: I) -> Array2<f64>
where
    I: IntoIterator<Item = usize>,
{
    let indices: Vec<usize> = indices.into_iter().collect();
    let mut out = Array2::<f64>::zeros((indices.len(), n_classes));
    for (row, &idx) in indices.iter().enumerate() {
        out[(row, idx)] = 1.0;
    }
    out
}

/// Index of the first maximum of every row.
pub fn argmax_rows(proba: &Array2<f64>) -> Vec<usize> {
    proba
        .rows()
        .into_iter()
        .map(|row| {
            let mut best = 0;
            for (j, &v) in row.iter().enumerate() {
                if v > row[best] {
                    best = j;
                }
            }
            best
        })
        .collect()
}

/// Fraction of positions where `predicted` equals `expected`.
pub fn accuracy<L: PartialEq>(predicted: &[L], expected: &[L]) -> f64 {
    assert_eq!(
        predicted.len(),
        expected.len(),
        "predicted and expected must have equal lengths"
    );
    if expected.is_empty() {
        return 0.0;
    }
    let hits = predicted
        .iter()
        .zip(expected)
        .filter(|(p, e)| p == e)
        .count();
    hits as f64 / expected.len() as f64
}
