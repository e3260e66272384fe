use crate::{
    db::{backend::Backend, session::DbSession},
    error::{ErrorClass, ErrorOrigin, InternalError},
};
use parking_lot::RwLock;
use std::{fmt, sync::Arc};
use thiserror::Error as ThisError;

///
/// SessionError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum SessionError {
    #[error("no session registered")]
    NotConfigured,

    #[error("a session is already registered; pass force to replace it")]
    AlreadyRegistered,
}

impl SessionError {
    pub(crate) const fn class(&self) -> ErrorClass {
        match self {
            Self::NotConfigured => ErrorClass::Unconfigured,
            Self::AlreadyRegistered => ErrorClass::Conflict,
        }
    }
}

impl From<SessionError> for InternalError {
    fn from(err: SessionError) -> Self {
        Self::new(err.class(), ErrorOrigin::Session, err.to_string())
    }
}

///
/// SessionProvider
///
/// A ready session, or a factory called on every [`SessionSlot::session`].
///

pub enum SessionProvider<B: Backend> {
    Value(Arc<DbSession<B>>),
    Factory(Box<dyn Fn() -> Arc<DbSession<B>> + Send + Sync>),
}

impl<B: Backend> SessionProvider<B> {
    fn resolve(&self) -> Arc<DbSession<B>> {
        match self {
            Self::Value(session) => Arc::clone(session),
            Self::Factory(factory) => factory(),
        }
    }
}

impl<B: Backend> fmt::Debug for SessionProvider<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(_) => f.write_str("SessionProvider::Value"),
            Self::Factory(_) => f.write_str("SessionProvider::Factory"),
        }
    }
}

///
/// SessionSlot
///
/// Configure-once holder for the session used by code that does not thread
/// a `DbSession` through explicitly. The first registration wins; replacing
/// it requires `force`.
///
/// ```ignore
/// static SESSION: SessionSlot<MemoryStore> = SessionSlot::new();
///
/// SESSION.register_value(DbSession::new(MemoryStore::new()), false)?;
/// let db = SESSION.session()?;
/// ```
///

pub struct SessionSlot<B: Backend> {
    provider: RwLock<Option<SessionProvider<B>>>,
}

impl<B: Backend> SessionSlot<B> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            provider: parking_lot::const_rwlock(None),
        }
    }

    pub fn register(&self, provider: SessionProvider<B>, force: bool) -> Result<(), SessionError> {
        let mut slot = self.provider.write();
        if slot.is_some() && !force {
            return Err(SessionError::AlreadyRegistered);
        }
        tracing::debug!(target: "kwquery", ?provider, force, "session registered");
        *slot = Some(provider);

        Ok(())
    }

    pub fn register_value(&self, session: DbSession<B>, force: bool) -> Result<(), SessionError> {
        self.register(SessionProvider::Value(Arc::new(session)), force)
    }

    pub fn register_factory<F>(&self, factory: F, force: bool) -> Result<(), SessionError>
    where
        F: Fn() -> Arc<DbSession<B>> + Send + Sync + 'static,
    {
        self.register(SessionProvider::Factory(Box::new(factory)), force)
    }

    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.provider.read().is_some()
    }

    /// The registered session, or the factory's result.
    pub fn session(&self) -> Result<Arc<DbSession<B>>, SessionError> {
        self.provider
            .read()
            .as_ref()
            .map(SessionProvider::resolve)
            .ok_or(SessionError::NotConfigured)
    }

    /// Forget the registered provider.
    pub fn clear(&self) {
        *self.provider.write() = None;
    }
}

impl<B: Backend> Default for SessionSlot<B> {
    fn default() -> Self {
        Self::new()
    }
}
