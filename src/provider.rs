use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::error::DataAccessError;
use crate::pool::{ConnectionPool, PooledConnection};

/// A connection handed to a transaction owner and shared with templates.
///
/// The owner opens/commits the transaction on it; every template call
/// made through a [`ConnectionProvider::TransactionBound`] provider
/// joins that transaction.
pub type SharedConnection = Arc<Mutex<PooledConnection>>;

/// How a template call obtains its connection.
///
/// Two acquisition policies exist, and both read and write paths use
/// the same one — whichever the template was constructed with:
///
/// - `Pool`: *direct* policy. Each call leases a fresh connection and
///   returns it to the pool when the call completes or fails.
/// - `TransactionBound`: *transaction-aware* policy. Each call reuses
///   the one bound connection, so its statements participate in the
///   transaction the owner has open on it. Releasing the lease unlocks
///   the handle but never closes it; the owner does that.
#[derive(Clone)]
pub enum ConnectionProvider {
    Pool(ConnectionPool),
    TransactionBound(SharedConnection),
}

impl ConnectionProvider {
    #[must_use]
    pub fn pool(pool: ConnectionPool) -> Self {
        ConnectionProvider::Pool(pool)
    }

    #[must_use]
    pub fn transaction_bound(conn: SharedConnection) -> Self {
        ConnectionProvider::TransactionBound(conn)
    }

    /// Acquire a connection for the duration of one statement execution.
    ///
    /// The returned lease releases on drop, on every exit path.
    ///
    /// # Errors
    ///
    /// Returns the pool error when a direct-policy lease cannot be
    /// produced. A transaction-bound acquire only waits for the handle.
    pub async fn acquire(&self) -> Result<ConnectionLease, DataAccessError> {
        match self {
            ConnectionProvider::Pool(pool) => {
                Ok(ConnectionLease::Leased(pool.get_connection().await?))
            }
            ConnectionProvider::TransactionBound(shared) => {
                Ok(ConnectionLease::Shared(Arc::clone(shared).lock_owned().await))
            }
        }
    }
}

impl PooledConnection {
    /// Wrap this connection for sharing between a transaction owner and
    /// one or more transaction-bound providers.
    #[must_use]
    pub fn into_shared(self) -> SharedConnection {
        Arc::new(Mutex::new(self))
    }
}

/// Exclusive use of one connection for one statement execution.
///
/// `Leased` returns the connection to its pool on drop; `Shared`
/// releases the lock on the bound connection without closing it.
pub enum ConnectionLease {
    Leased(PooledConnection),
    Shared(OwnedMutexGuard<PooledConnection>),
}

impl ConnectionLease {
    pub fn connection(&mut self) -> &mut PooledConnection {
        match self {
            ConnectionLease::Leased(conn) => conn,
            ConnectionLease::Shared(guard) => guard,
        }
    }
}
