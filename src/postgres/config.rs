use deadpool_postgres::Config as PgConfig;
use tokio_postgres::NoTls;

use crate::error::DataAccessError;
use crate::pool::ConnectionPool;

impl ConnectionPool {
    /// Asynchronous initializer for a PostgreSQL [`ConnectionPool`].
    ///
    /// # Errors
    ///
    /// Returns `DataAccessError::Config` when a required field is
    /// missing, or `DataAccessError::Connection` if pool creation
    /// fails.
    pub async fn new_postgres(pg_config: PgConfig) -> Result<Self, DataAccessError> {
        if pg_config.dbname.is_none() {
            return Err(DataAccessError::Config("dbname is required".to_string()));
        }
        if pg_config.host.is_none() {
            return Err(DataAccessError::Config("host is required".to_string()));
        }
        if pg_config.port.is_none() {
            return Err(DataAccessError::Config("port is required".to_string()));
        }
        if pg_config.user.is_none() {
            return Err(DataAccessError::Config("user is required".to_string()));
        }
        if pg_config.password.is_none() {
            return Err(DataAccessError::Config("password is required".to_string()));
        }

        let pool = pg_config
            .create_pool(Some(deadpool_postgres::Runtime::Tokio1), NoTls)
            .map_err(|e| {
                DataAccessError::Connection(format!("failed to create Postgres pool: {e}"))
            })?;

        Ok(ConnectionPool::Postgres(pool))
    }
}
