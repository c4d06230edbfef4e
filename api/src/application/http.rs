pub mod classification;
pub mod health;
pub mod server;
