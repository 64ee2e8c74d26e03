#[cfg(feature = "sqlite")]
use std::time::Duration;

#[cfg(feature = "sqlite")]
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr, Schema};

/// Configuration for the blog database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Connection to the blog database.
///
/// Owns the single SeaORM connection pool; the schema is provisioned at
/// init time because there is no separate migrations tool.
#[cfg(feature = "sqlite")]
pub struct BlogDatabase {
    pub conn: DbConn,
}

#[cfg(feature = "sqlite")]
impl BlogDatabase {
    /// Connect and make sure the posts table exists.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!(url = %config.url, "Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let conn = Database::connect(opts).await?;
        Self::create_schema(&conn).await?;

        tracing::info!(
            "Database connected (pool: {})",
            config.max_connections
        );

        Ok(Self { conn })
    }

    /// Create the posts table from the entity definition, idempotently.
    /// The unique title constraint lands here, so uniqueness is enforced
    /// by the engine rather than by a check-then-insert in the service.
    async fn create_schema(conn: &DbConn) -> Result<(), DbErr> {
        let backend = conn.get_database_backend();
        let schema = Schema::new(backend);

        let mut statement = schema.create_table_from_entity(super::entity::post::Entity);
        statement.if_not_exists();

        conn.execute(backend.build(&statement)).await?;
        Ok(())
    }
}
