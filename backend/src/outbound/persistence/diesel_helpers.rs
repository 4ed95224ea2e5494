//! Error mapping and row collection shared by the Diesel read adapters.
//!
//! Every repository port exposes the same two failure kinds, `Connection`
//! and `Query`. These helpers take the port's snake_case constructors so
//! each adapter only names its own error type.

use tracing::{debug, warn};

use super::pool::PoolError;

/// Map a pool failure through a repository's connection constructor.
pub(crate) fn map_pool_failure<E>(error: PoolError, connection: impl FnOnce(String) -> E) -> E {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    warn!(%message, "content store connection unavailable");
    connection(message)
}

/// Classify a Diesel failure as a connection or query error.
///
/// Driver messages are logged at debug level and never copied into the
/// returned error, which only names the failed operation.
pub(crate) fn map_diesel_failure<E>(
    error: diesel::result::Error,
    operation: &'static str,
    query: impl FnOnce(String) -> E,
    connection: impl FnOnce(String) -> E,
) -> E {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), operation, "diesel read failed");
        }
        other => debug!(error = %other, operation, "diesel read failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection(format!("{operation}: connection closed"))
        }
        DieselError::DeserializationError(_) => query(format!("{operation}: row decoding failed")),
        _ => query(format!("{operation}: database error")),
    }
}

/// Collect row conversion results, mapping the first error through `map_err`.
pub(crate) fn collect_rows<T, E>(
    results: impl Iterator<Item = Result<T, String>>,
    map_err: impl FnOnce(String) -> E,
) -> Result<Vec<T>, E> {
    results.collect::<Result<Vec<_>, _>>().map_err(map_err)
}
