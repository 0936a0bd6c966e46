//! # waymark-db-mem
//!
//! In-memory implementation of the Waymark repositories with the same
//! access discipline as a pooled SQL backend: any number of concurrent
//! readers, a single writer, and a transaction scope that either
//! commits all repository writes or none of them.

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::{ops::Deref, sync::Arc};

use waymark_core::usecases as uc;

mod store;

pub use store::Store;

pub struct DbReadOnly<'a> {
    guard: RwLockReadGuard<'a, Store>,
}

impl Deref for DbReadOnly<'_> {
    type Target = Store;
    fn deref(&self) -> &Store {
        &self.guard
    }
}

pub struct DbReadWrite<'a> {
    guard: RwLockWriteGuard<'a, Store>,
}

impl Deref for DbReadWrite<'_> {
    type Target = Store;
    fn deref(&self) -> &Store {
        &self.guard
    }
}

impl DbReadWrite<'_> {
    /// Run `f` against a transaction-scoped view of the repositories.
    ///
    /// The store is snapshotted up front; if the closure signals a
    /// failure the snapshot is restored, so no partial state of the
    /// batch ever becomes observable.
    pub fn transaction<T, F, E>(&mut self, f: F) -> Result<T, uc::Error>
    where
        F: FnOnce(&Store) -> Result<T, E>,
        E: Into<uc::Error>,
    {
        let snapshot = self.guard.clone();
        match f(&self.guard) {
            Ok(value) => Ok(value),
            Err(err) => {
                log::debug!("Rolling back transaction");
                *self.guard = snapshot;
                Err(err.into())
            }
        }
    }
}

/// Shared handle to one in-memory database.
///
/// Only a single connection with write access is handed out at a
/// time; multiple read connections can be used concurrently. This
/// mirrors the locking pattern used around a pooled SQL backend and
/// is what makes the transaction snapshot sound.
#[derive(Default, Clone)]
pub struct Connections {
    store: Arc<RwLock<Store>>,
}

impl Connections {
    pub fn init() -> Self {
        Self::default()
    }

    pub fn shared(&self) -> DbReadOnly<'_> {
        DbReadOnly {
            guard: self.store.read(),
        }
    }

    pub fn exclusive(&self) -> DbReadWrite<'_> {
        DbReadWrite {
            guard: self.store.write(),
        }
    }
}
