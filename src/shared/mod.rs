pub mod header;
pub mod texture;
