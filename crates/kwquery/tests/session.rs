mod common;

use common::{Treatment, populate, session};
use kwquery::{
    Error,
    core::db::SessionError,
    error::{ErrorKind, SessionErrorKind},
    prelude::*,
};
use std::sync::Arc;

static SESSION: SessionSlot<MemoryStore> = SessionSlot::new();

// One test owns the process-wide slot so ordering between tests cannot leak.
#[test]
fn process_wide_slot_lifecycle() {
    let err = SESSION.session().err().map(Error::from);
    assert_eq!(
        err.map(|e| e.kind),
        Some(ErrorKind::Session(SessionErrorKind::NotConfigured))
    );

    SESSION.register_value(session(), false).unwrap();
    let db = SESSION.session().unwrap();
    assert_eq!(Treatment::count(&*db, criteria!()).unwrap(), 18);

    let again = SESSION.register_value(DbSession::new(MemoryStore::new()), false);
    assert_eq!(again, Err(SessionError::AlreadyRegistered));
    assert_eq!(
        Error::from(SessionError::AlreadyRegistered).kind,
        ErrorKind::Session(SessionErrorKind::AlreadyRegistered)
    );

    SESSION
        .register_value(DbSession::new(MemoryStore::new()), true)
        .unwrap();
    let replaced = SESSION.session().unwrap();
    assert_eq!(Treatment::count(&*replaced, criteria!()).unwrap(), 0);

    SESSION.clear();
    assert!(!SESSION.is_registered());
}

#[test]
fn factory_provider_builds_sessions_on_demand() {
    let slot = SessionSlot::new();
    let shared = Arc::new(session());
    let handle = Arc::clone(&shared);
    slot.register_factory(move || Arc::clone(&handle), false)
        .unwrap();

    let db = slot.session().unwrap();
    assert!(Arc::ptr_eq(&db, &shared));
    assert_eq!(Treatment::count(&*db, criteria!(status__name = "ko")).unwrap(), 8);
}

#[test]
fn factory_can_build_fresh_sessions() {
    let slot = SessionSlot::new();
    slot.register_factory(
        || {
            let db = DbSession::new(MemoryStore::new()).debug();
            populate(&db);
            Arc::new(db)
        },
        false,
    )
    .unwrap();

    let a = slot.session().unwrap();
    let b = slot.session().unwrap();
    assert!(!Arc::ptr_eq(&a, &b));
    assert!(a.is_debug());
    assert_eq!(Treatment::count(&*b, criteria!()).unwrap(), 18);
}
