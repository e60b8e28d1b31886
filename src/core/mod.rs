pub mod bit_coder;
pub mod model;
pub mod shared;
pub mod text_coder;
pub mod triangle;
