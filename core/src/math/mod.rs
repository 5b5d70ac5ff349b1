pub mod matrix;
pub mod transpose;
pub mod validate;

pub use matrix::{Dimensions, Element, Matrix};
pub use transpose::transpose;
pub use validate::{validate, validate_compatible, validate_operands, validate_rows};
