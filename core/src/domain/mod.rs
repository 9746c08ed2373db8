pub mod authentication;
pub mod common;
pub mod health;
pub mod storage;
