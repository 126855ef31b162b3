//! Thread-safe handle to a store.

use crate::error::{Error, Result};
use crate::snapshot::Snapshot;
use crate::{Malachite, Node, NodeId};
use malachite_topology::Sector;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A cloneable, shareable store.
///
/// Writes hold the write lock for the whole call, so the id check and the
/// insertion happen together and no reader sees a half-built node. Reads
/// share the read lock and return owned copies.
#[derive(Debug, Clone)]
pub struct SharedMalachite {
    inner: Arc<RwLock<Malachite>>,
}

impl SharedMalachite {
    pub fn new(engine: Malachite) -> Self {
        Self {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Malachite>> {
        self.inner.read().map_err(|_| Error::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Malachite>> {
        self.inner.write().map_err(|_| Error::LockPoisoned)
    }

    pub fn crystallize(
        &self,
        content: impl Into<String>,
        parent_id: impl AsRef<str>,
        mutation_degree: f64,
    ) -> Result<NodeId> {
        self.write()?.crystallize(content, parent_id, mutation_degree)
    }

    pub fn create_void(&self, parent_id: impl AsRef<str>, description: &str) -> Result<NodeId> {
        self.write()?.create_void(parent_id, description)
    }

    pub fn get(&self, id: impl AsRef<str>) -> Result<Option<Node>> {
        Ok(self.read()?.get(id).cloned())
    }

    pub fn trace_ray(&self, node_id: impl AsRef<str>) -> Result<Vec<Node>> {
        Ok(self.read()?.trace_ray(node_id).into_iter().cloned().collect())
    }

    pub fn scan_sector(&self, sector: Sector) -> Result<Vec<Node>> {
        Ok(self.read()?.scan_sector(sector).into_iter().cloned().collect())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    pub fn snapshot(&self) -> Result<Snapshot> {
        Ok(self.read()?.snapshot())
    }
}

impl From<Malachite> for SharedMalachite {
    fn from(engine: Malachite) -> Self {
        Self::new(engine)
    }
}
