use std::time::Instant;

use sea_orm::{ConnectionTrait, DatabaseConnection};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
};

/// Pings the database. Without a connection (in-memory backend) it always reports healthy.
#[derive(Debug, Clone)]
pub struct DatabaseHealthCheck {
    db: Option<DatabaseConnection>,
}

impl DatabaseHealthCheck {
    pub fn new(db: Option<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl HealthCheckRepository for DatabaseHealthCheck {
    async fn health(&self) -> Result<u64, CoreError> {
        let Some(db) = &self.db else {
            return Ok(0);
        };

        let start = Instant::now();
        db.execute_unprepared("SELECT 1").await.map_err(|e| {
            error!("Database health check failed: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(start.elapsed().as_millis() as u64)
    }

    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        match self.health().await {
            Ok(latency_ms) => Ok(DatabaseHealthStatus {
                healthy: true,
                latency_ms,
            }),
            Err(_) => Ok(DatabaseHealthStatus {
                healthy: false,
                latency_ms: 0,
            }),
        }
    }
}
