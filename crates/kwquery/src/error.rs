use derive_more::Display;
use kwquery_core::{
    db::{CriteriaError, QueryError, SessionError, StoreError},
    error::{ErrorClass, ErrorOrigin as CoreErrorOrigin, InternalError},
};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::Query(QueryErrorKind::NotFound))
    }
}

impl From<InternalError> for Error {
    fn from(err: InternalError) -> Self {
        let kind = match (err.class, err.origin) {
            (ErrorClass::Unconfigured, _) => ErrorKind::Session(SessionErrorKind::NotConfigured),
            (ErrorClass::Conflict, CoreErrorOrigin::Session) => {
                ErrorKind::Session(SessionErrorKind::AlreadyRegistered)
            }
            (ErrorClass::NotFound, _) => ErrorKind::Query(QueryErrorKind::NotFound),
            (ErrorClass::NotUnique, _) => ErrorKind::Query(QueryErrorKind::NotUnique),
            (ErrorClass::Conflict, CoreErrorOrigin::Store) => ErrorKind::Store(StoreErrorKind::Conflict),
            (ErrorClass::InvalidInput, CoreErrorOrigin::Load) => ErrorKind::Load,
            (ErrorClass::InvalidInput, _) => ErrorKind::Query(QueryErrorKind::Invalid),
            (ErrorClass::Unsupported, _) => ErrorKind::Query(QueryErrorKind::Unsupported),
            _ => ErrorKind::Internal,
        };

        Self::new(kind, err.origin.into(), err.message)
    }
}

impl From<QueryError> for Error {
    fn from(err: QueryError) -> Self {
        InternalError::from(err).into()
    }
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        InternalError::from(err).into()
    }
}

impl From<CriteriaError> for Error {
    fn from(err: CriteriaError) -> Self {
        InternalError::from(err).into()
    }
}

impl From<SessionError> for Error {
    fn from(err: SessionError) -> Self {
        InternalError::from(err).into()
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    Query(QueryErrorKind),
    Session(SessionErrorKind),
    Store(StoreErrorKind),

    /// A load mapping does not fit the entity model.
    Load,

    /// The caller cannot remediate this.
    Internal,
}

///
/// QueryErrorKind
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum QueryErrorKind {
    /// Criteria name something the model does not have.
    Invalid,

    /// The operator does not apply to the attribute or value.
    Unsupported,

    /// Valid query, but no rows matched.
    NotFound,

    /// Query expected one row but matched many.
    NotUnique,
}

///
/// SessionErrorKind
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum SessionErrorKind {
    NotConfigured,
    AlreadyRegistered,
}

///
/// StoreErrorKind
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum StoreErrorKind {
    /// Duplicate primary key.
    Conflict,
}

///
/// ErrorOrigin
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Criteria,
    Store,
    Session,
    Load,
    Serialize,
}

impl From<CoreErrorOrigin> for ErrorOrigin {
    fn from(origin: CoreErrorOrigin) -> Self {
        match origin {
            CoreErrorOrigin::Criteria => Self::Criteria,
            CoreErrorOrigin::Store => Self::Store,
            CoreErrorOrigin::Session => Self::Session,
            CoreErrorOrigin::Load => Self::Load,
            CoreErrorOrigin::Serialize => Self::Serialize,
        }
    }
}
