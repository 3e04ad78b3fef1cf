use tracing::{debug, error};

use crate::error::DataAccessError;
use crate::mapper::RowMapper;
use crate::pool::{ConnectionPool, StatementExecutor};
use crate::provider::ConnectionProvider;
use crate::statement::StatementRequest;
use crate::types::SqlValue;

/// The execution template: parameterized statement execution with
/// row mapping, over a connection acquisition policy.
///
/// Every operation is one self-contained unit: acquire a connection
/// lease, prepare the statement, bind the arguments positionally in
/// order, execute, and release every acquired resource on success and
/// failure alike. DAOs built on top never see a connection, statement,
/// or cursor.
///
/// All failures surface as a single [`DataAccessError`] carrying the
/// underlying cause; no driver error type escapes, and no retry happens
/// inside the template.
#[derive(Clone)]
pub struct SqlTemplate {
    provider: ConnectionProvider,
}

impl SqlTemplate {
    #[must_use]
    pub fn new(provider: ConnectionProvider) -> Self {
        Self { provider }
    }

    /// Template over a pool, acquiring a fresh connection per call.
    #[must_use]
    pub fn with_pool(pool: ConnectionPool) -> Self {
        Self::new(ConnectionProvider::Pool(pool))
    }

    /// Execute `sql` as a read and map every returned row, in cursor
    /// order. Zero rows is a valid result and yields an empty vec.
    ///
    /// # Errors
    ///
    /// Any driver failure during acquire/prepare/bind/execute, and any
    /// mapper failure, aborts the call with a [`DataAccessError`]; no
    /// partial result is returned.
    pub async fn query<M>(
        &self,
        sql: &str,
        mapper: &M,
        args: &[SqlValue],
    ) -> Result<Vec<M::Output>, DataAccessError>
    where
        M: RowMapper,
    {
        let mut lease = self.provider.acquire().await?;
        debug!(sql, args = args.len(), "executing query");
        let row_set = lease
            .connection()
            .execute_select(sql, args)
            .await
            .map_err(|e| {
                error!(sql, error = %e, "query failed");
                e
            })?;

        let mut mapped = Vec::with_capacity(row_set.len());
        for row in row_set.rows() {
            mapped.push(mapper.map_row(row).map_err(|e| {
                error!(sql, error = %e, "row mapping failed");
                e
            })?);
        }
        Ok(mapped)
    }

    /// Execute `sql` as a read expected to identify exactly one row,
    /// and map it.
    ///
    /// # Errors
    ///
    /// Zero rows fails with [`DataAccessError::NoResult`]; more than one
    /// row fails with [`DataAccessError::UnexpectedRowCount`] rather
    /// than silently returning the first. Driver and mapper failures
    /// behave as in [`Self::query`].
    pub async fn query_for_object<M>(
        &self,
        sql: &str,
        mapper: &M,
        args: &[SqlValue],
    ) -> Result<M::Output, DataAccessError>
    where
        M: RowMapper,
    {
        let mut found = self.query(sql, mapper, args).await?;
        match found.len() {
            0 => {
                debug!(sql, "query matched no rows");
                Err(DataAccessError::NoResult)
            }
            1 => Ok(found.remove(0)),
            actual => {
                debug!(sql, actual, "query matched more than one row");
                Err(DataAccessError::UnexpectedRowCount { expected: 1, actual })
            }
        }
    }

    /// Execute `sql` as a mutation and return the number of rows the
    /// driver reports as affected. Callers that require an exact count
    /// (e.g. "exactly one row updated") must check the returned value.
    ///
    /// # Errors
    ///
    /// Any driver failure aborts the call with a [`DataAccessError`].
    pub async fn update(&self, sql: &str, args: &[SqlValue]) -> Result<usize, DataAccessError> {
        let mut lease = self.provider.acquire().await?;
        debug!(sql, args = args.len(), "executing update");
        lease.connection().execute_dml(sql, args).await.map_err(|e| {
            error!(sql, error = %e, "update failed");
            e
        })
    }

    /// Execute several mutations over a single connection lease,
    /// returning the total affected-row count. Stops at the first
    /// failing statement.
    ///
    /// # Errors
    ///
    /// The first driver failure aborts the call with a
    /// [`DataAccessError`]; statements already executed are not rolled
    /// back by the template (wrap the template in a transaction-bound
    /// provider for atomicity).
    pub async fn update_many(
        &self,
        requests: &[StatementRequest],
    ) -> Result<usize, DataAccessError> {
        let mut lease = self.provider.acquire().await?;
        let mut total = 0;
        for request in requests {
            debug!(sql = %request.sql, args = request.args.len(), "executing update");
            total += lease
                .connection()
                .execute_dml(&request.sql, &request.args)
                .await
                .map_err(|e| {
                    error!(sql = %request.sql, error = %e, "update failed");
                    e
                })?;
        }
        Ok(total)
    }

    /// Run a multi-statement SQL script with no parameters (DDL, seed
    /// data).
    ///
    /// # Errors
    ///
    /// Any driver failure aborts the call with a [`DataAccessError`].
    pub async fn batch(&self, sql: &str) -> Result<(), DataAccessError> {
        let mut lease = self.provider.acquire().await?;
        debug!(sql, "executing batch");
        lease.connection().execute_batch(sql).await.map_err(|e| {
            error!(sql, error = %e, "batch failed");
            e
        })
    }
}
