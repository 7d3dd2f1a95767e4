//! baseline-classifiers: feature-agnostic reference classifiers for panel data.
//!
//! This crate provides a `DummyClassifier` that predicts labels for sequence
//! instances from label statistics gathered at fit time (or from a fixed
//! constant), never from the sequence values themselves. It is meant as the
//! floor any real classifier on the same data has to beat.
//!
//! Layout: `data_handling` holds the panel types, `stats` the class-prior
//! summary, `models` one engine per strategy behind the `BaselineEngine`
//! trait, and `dummy` the adapter that feeds engines a zero placeholder.
pub mod config;
pub mod data_handling;
pub mod dummy;
pub mod error;
pub mod io;
pub mod models;
pub mod stats;

pub use config::{DummyConfig, Strategy};
pub use data_handling::{NestedPanel, Panel, PanelShape};
pub use dummy::DummyClassifier;
pub use error::BaselineError;
