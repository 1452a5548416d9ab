//! Lock-guarded graph handle for use across threads.
//!
//! Traversals keep their visitation state outside the backend, so any number
//! of them can run under the read lock at once. Edge and mark mutation goes
//! through the write lock.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::backend::Graph;

pub struct SharedGraph<G> {
    inner: Arc<RwLock<G>>,
}

impl<G> Clone for SharedGraph<G> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<G> SharedGraph<G>
where
    G: Graph,
{
    pub fn new(graph: G) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, G> {
        self.inner.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, G> {
        self.inner.write()
    }

    /// Run `f` with shared access, e.g. a traversal.
    pub fn traverse<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&G) -> R,
    {
        let guard = self.inner.read();
        f(&guard)
    }

    /// Run `f` with exclusive access, e.g. edge or mark updates.
    pub fn mutate<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut G) -> R,
    {
        let mut guard = self.inner.write();
        f(&mut guard)
    }

    /// Unwrap the graph if this is the last handle.
    pub fn try_into_inner(self) -> Result<G, Self> {
        Arc::try_unwrap(self.inner)
            .map(RwLock::into_inner)
            .map_err(|inner| Self { inner })
    }
}
