pub mod modular;
pub mod vector;
pub mod matrix;
pub mod gadget;

pub use vector::ZqVector;
pub use matrix::ZqMatrix;
pub use gadget::{bit_decomp, bit_recompose, powers_of_two, tensor, tensor_mod};
