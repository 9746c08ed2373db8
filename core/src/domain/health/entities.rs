use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseHealthStatus {
    pub healthy: bool,
    pub latency_ms: u64,
}
