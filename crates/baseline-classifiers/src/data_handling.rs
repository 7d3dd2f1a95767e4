//! Panel data structures for sequence classification.
//!
//! A panel is a collection of instances, each instance a fixed number of
//! channels, each channel a numeric series. Two layouts are supported:
//! a dense `(instances, channels, timepoints)` array for equal-length data,
//! and a nested layout that allows series of unequal length.
use ndarray::{Array2, Array3, Axis};

use crate::error::BaselineError;

/// Structural summary of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelShape {
    pub n_instances: usize,
    pub n_channels: usize,
    /// Common series length, `None` when series lengths differ.
    pub series_length: Option<usize>,
}

/// Instances × channels × variable-length series.
#[derive(Debug, Clone, PartialEq)]
pub struct NestedPanel {
    instances: Vec<Vec<Vec<f64>>>,
    n_channels: usize,
}

impl NestedPanel {
    /// Build a nested panel, checking that every instance has the same
    /// number of channels.
    pub fn new(instances: Vec<Vec<Vec<f64>>>) -> Result<Self, BaselineError> {
        let n_channels = instances.first().map(|inst| inst.len()).unwrap_or(0);
        if let Some((idx, inst)) = instances
            .iter()
            .enumerate()
            .find(|(_, inst)| inst.len() != n_channels)
        {
            return Err(BaselineError::InvalidPanel(format!(
                "instance {} has {} channels, expected {}",
                idx,
                inst.len(),
                n_channels
            )));
        }
        Ok(Self {
            instances,
            n_channels,
        })
    }

    /// One univariate instance per series.
    pub fn univariate(series: Vec<Vec<f64>>) -> Self {
        Self {
            instances: series.into_iter().map(|s| vec![s]).collect(),
            n_channels: 1,
        }
    }

    pub fn instances(&self) -> &[Vec<Vec<f64>>] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn n_channels(&self) -> usize {
        self.n_channels
    }

    fn common_length(&self) -> Option<usize> {
        let mut lengths = self.instances.iter().flatten().map(|s| s.len());
        let first = lengths.next()?;
        lengths.all(|l| l == first).then_some(first)
    }
}

/// Sequence instances in either supported layout.
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    Dense(Array3<f64>),
    Nested(NestedPanel),
}

impl Panel {
    pub fn n_instances(&self) -> usize {
        match self {
            Panel::Dense(x) => x.len_of(Axis(0)),
            Panel::Nested(x) => x.len(),
        }
    }

    pub fn n_channels(&self) -> usize {
        match self {
            Panel::Dense(x) => x.len_of(Axis(1)),
            Panel::Nested(x) => x.n_channels(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.n_instances() == 0
    }

    pub fn shape(&self) -> PanelShape {
        match self {
            Panel::Dense(x) => {
                let (n, d, m) = x.dim();
                PanelShape {
                    n_instances: n,
                    n_channels: d,
                    series_length: Some(m),
                }
            }
            Panel::Nested(x) => PanelShape {
                n_instances: x.len(),
                n_channels: x.n_channels(),
                series_length: x.common_length(),
            },
        }
    }

    /// A panel of identical shape with every value replaced by zero.
    pub fn zeros_like(&self) -> Panel {
        match self {
            Panel::Dense(x) => Panel::Dense(Array3::zeros(x.raw_dim())),
            Panel::Nested(x) => Panel::Nested(NestedPanel {
                instances: x
                    .instances
                    .iter()
                    .map(|inst| inst.iter().map(|s| vec![0.0; s.len()]).collect())
                    .collect(),
                n_channels: x.n_channels,
            }),
        }
    }

    /// Returns true when every value in the panel is zero.
    #[cfg(test)]
    pub(crate) fn is_zero(&self) -> bool {
        match self {
            Panel::Dense(x) => x.iter().all(|&v| v == 0.0),
            Panel::Nested(x) => x.instances.iter().flatten().flatten().all(|&v| v == 0.0),
        }
    }
}

impl From<Array3<f64>> for Panel {
    fn from(value: Array3<f64>) -> Self {
        Panel::Dense(value)
    }
}

/// Rows are univariate instances, columns timepoints.
impl From<Array2<f64>> for Panel {
    fn from(value: Array2<f64>) -> Self {
        Panel::Dense(value.insert_axis(Axis(1)))
    }
}

impl From<NestedPanel> for Panel {
    fn from(value: NestedPanel) -> Self {
        Panel::Nested(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dense_shape() {
        let panel = Panel::from(Array3::<f64>::ones((4, 2, 7)));
        assert_eq!(
            panel.shape(),
            PanelShape {
                n_instances: 4,
                n_channels: 2,
                series_length: Some(7)
            }
        );
    }

    #[test]
    fn two_dimensional_input_is_univariate() {
        let panel = Panel::from(Array2::<f64>::ones((3, 5)));
        assert_eq!(panel.n_instances(), 3);
        assert_eq!(panel.n_channels(), 1);
        assert_eq!(panel.shape().series_length, Some(5));
    }

    #[test]
    fn nested_unequal_lengths_have_no_common_length() {
        let panel = Panel::from(NestedPanel::univariate(vec![vec![1.0, 2.0], vec![3.0]]));
        assert_eq!(panel.shape().series_length, None);
        assert_eq!(panel.n_instances(), 2);
    }

    #[test]
    fn nested_rejects_inconsistent_channels() {
        let err = NestedPanel::new(vec![vec![vec![1.0], vec![2.0]], vec![vec![3.0]]]).unwrap_err();
        assert!(matches!(err, BaselineError::InvalidPanel(_)));
    }

    #[test]
    fn zeros_like_keeps_shape() {
        let nested = NestedPanel::new(vec![
            vec![vec![1.0, f64::NAN, 3.0], vec![4.0]],
            vec![vec![5.0], vec![6.0, 7.0]],
        ])
        .unwrap();
        let panel = Panel::from(nested);
        let zeros = panel.zeros_like();
        assert!(zeros.is_zero());
        assert!(!panel.is_zero());
        assert_eq!(zeros.shape(), panel.shape());
        if let Panel::Nested(z) = &zeros {
            assert_eq!(z.instances()[0][0].len(), 3);
            assert_eq!(z.instances()[1][1].len(), 2);
        } else {
            panic!("expected nested placeholder");
        }

        let dense = Panel::from(Array3::<f64>::from_elem((2, 3, 4), 9.0));
        let dense_zeros = dense.zeros_like();
        assert!(dense_zeros.is_zero());
        assert_eq!(dense_zeros.shape(), dense.shape());
    }

    #[test]
    fn empty_nested_panel() {
        let panel = Panel::from(NestedPanel::new(vec![]).unwrap());
        assert!(panel.is_empty());
        assert_eq!(panel.n_channels(), 0);
    }
}
