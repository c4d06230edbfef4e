pub mod classification;
pub mod common;
