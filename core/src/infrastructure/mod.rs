pub mod db;
pub mod health;
pub mod jwt;
pub mod storage;
pub mod uploads;
