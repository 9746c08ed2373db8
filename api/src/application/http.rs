pub mod file;
pub mod health;
pub mod server;
