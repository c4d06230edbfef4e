pub mod advisor;
pub mod entities;
pub mod local_inference;
pub mod ports;
pub mod prompt;
pub mod scoring;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
