//! ShapeService trait definition and the Postgres-backed implementation

use async_trait::async_trait;
use sqlx::PgPool;

use super::types::{ShapeError, ShapeRow};

/// Trait for shape stores (Postgres in production, stubs in tests)
#[async_trait]
pub trait ShapeService: Send + Sync {
    /// Fetch all stored shapes as raw rows
    async fn list_shapes(&self) -> Result<Vec<ShapeRow>, ShapeError>;

    /// Current time as reported by the database, for connectivity checks
    async fn database_time(&self) -> Result<String, ShapeError>;
}

/// Shape service backed by a shared PostGIS connection pool
pub struct PgShapeService {
    pool: PgPool,
}

impl PgShapeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Probe the database once and log the outcome. A failed probe is not
    /// fatal; requests will surface their own errors.
    pub async fn probe(&self) {
        match self.database_time().await {
            Ok(time) => tracing::info!("Connected to PostgreSQL, server time {}", time),
            Err(e) => tracing::error!("PostgreSQL connection check failed: {}", e),
        }
    }
}

#[async_trait]
impl ShapeService for PgShapeService {
    async fn list_shapes(&self) -> Result<Vec<ShapeRow>, ShapeError> {
        let rows = sqlx::query_as::<_, ShapeRow>(
            "SELECT id, name, ST_AsGeoJSON(geom) AS geometry FROM shapes",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn database_time(&self) -> Result<String, ShapeError> {
        let time: String = sqlx::query_scalar("SELECT NOW()::text")
            .fetch_one(&self.pool)
            .await?;
        Ok(time)
    }
}
