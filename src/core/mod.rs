pub mod dataset;
pub mod labels;

pub use dataset::Dataset;
pub use labels::{LabelEncoder, class_distribution};
