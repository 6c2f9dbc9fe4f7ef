//! Database error classification
//!
//! Every `sqlx::Error` is sorted into one of three kinds so callers can tell
//! an unreachable database apart from a rejected statement.

use std::fmt;

/// Which integrity rule a rejected statement broke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    Unique,
    ForeignKey,
    NotNull,
    Check,
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unique => "unique",
            Self::ForeignKey => "foreign key",
            Self::NotNull => "not null",
            Self::Check => "check",
        };
        f.write_str(name)
    }
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// The database could not be reached, or refused the session
    #[error("database connection failed: {0}")]
    Connection(#[source] sqlx::Error),

    /// A statement violated an integrity constraint
    #[error("{kind} constraint violation: {source}")]
    Constraint {
        kind: ConstraintKind,
        constraint: Option<String>,
        #[source]
        source: sqlx::Error,
    },

    /// Any other statement failure (syntax, missing table, decode, ...)
    #[error("statement failed: {0}")]
    Statement(#[source] sqlx::Error),
}

impl DbError {
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    pub fn constraint_kind(&self) -> Option<ConstraintKind> {
        match self {
            Self::Constraint { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// SQLSTATE classes that mean "no usable session" rather than "bad statement":
/// 08 connection exception, 28 invalid authorization, 3D invalid catalog
/// (database missing), 57P operator intervention (shutdown).
const CONNECTION_SQLSTATE_PREFIXES: &[&str] = &["08", "28", "3D", "57P"];

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Configuration(_) => Self::Connection(err),
            sqlx::Error::Database(db_err) => {
                let kind = match db_err.kind() {
                    sqlx::error::ErrorKind::UniqueViolation => Some(ConstraintKind::Unique),
                    sqlx::error::ErrorKind::ForeignKeyViolation => {
                        Some(ConstraintKind::ForeignKey)
                    }
                    sqlx::error::ErrorKind::NotNullViolation => Some(ConstraintKind::NotNull),
                    sqlx::error::ErrorKind::CheckViolation => Some(ConstraintKind::Check),
                    _ => None,
                };

                if let Some(kind) = kind {
                    let constraint = db_err.constraint().map(str::to_owned);
                    return Self::Constraint {
                        kind,
                        constraint,
                        source: err,
                    };
                }

                let refused = db_err.code().is_some_and(|code| {
                    CONNECTION_SQLSTATE_PREFIXES
                        .iter()
                        .any(|prefix| code.starts_with(prefix))
                });
                if refused {
                    Self::Connection(err)
                } else {
                    Self::Statement(err)
                }
            }
            _ => Self::Statement(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_timeout_is_connection() {
        let err = DbError::from(sqlx::Error::PoolTimedOut);
        assert!(err.is_connection());
    }

    #[test]
    fn io_error_is_connection() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = DbError::from(sqlx::Error::Io(io));
        assert!(err.is_connection());
    }

    #[test]
    fn row_not_found_is_statement() {
        let err = DbError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, DbError::Statement(_)));
        assert_eq!(err.constraint_kind(), None);
    }

    #[test]
    fn constraint_kind_display() {
        assert_eq!(ConstraintKind::ForeignKey.to_string(), "foreign key");
        assert_eq!(ConstraintKind::Unique.to_string(), "unique");
    }
}
