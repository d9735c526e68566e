pub mod gaussian;
pub mod uniform;

pub use gaussian::sample_gaussian_vector;
pub use uniform::{sample_uniform_vector, sample_uniform_matrix, sample_binary_vector};
