pub mod classifier_trait;
pub mod constant;
pub mod factory;
pub mod most_frequent;
pub mod prior;
pub mod stratified;
pub mod uniform;
pub mod utils;

pub use classifier_trait::{BaselineEngine, Label};
