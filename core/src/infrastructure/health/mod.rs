pub mod repository;

pub use repository::DatabaseHealthCheck;
