use redis::aio::ConnectionManager;
use tracing::debug;

use crate::common::DatabaseError;

pub async fn check_health(conn: &ConnectionManager) -> Result<(), DatabaseError> {
    debug!("Running Redis health check");

    let mut conn = conn.clone();
    let pong: String = redis::cmd("PING")
        .query_async(&mut conn)
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(format!("Redis: {}", e)))?;

    if pong != "PONG" {
        return Err(DatabaseError::HealthCheckFailed(format!(
            "Redis: unexpected PING reply {}",
            pong
        )));
    }
    Ok(())
}
