pub mod file_parsing;
pub mod math;

pub use math::{determinant, matrix_inverse};
