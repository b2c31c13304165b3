//! In-memory interface directory for testing.
//!
//! Holds interfaces in a shared map that tests can change between requests
//! to simulate interfaces appearing, disappearing, or the directory becoming
//! unreachable.

use super::{InterfaceDirectory, InterfaceIndex, InterfaceRecord};
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::future::Future;
use std::io;
use std::sync::{Arc, Mutex};

struct MemoryDirectoryInner {
    interfaces: HashMap<InterfaceIndex, Option<String>>,
    unavailable: bool,
    list_calls: usize,
    lookup_calls: usize,
}

/// Interface directory backed by a shared in-memory map.
///
/// Clones share state, so a test can keep a handle while the engine owns
/// another.
///
/// # Example
///
/// ```rust
/// use ifalias_persist::directory::MemoryDirectory;
///
/// let directory = MemoryDirectory::new()
///     .with_interface(1, "Loopback")
///     .with_interface(3, "Production");
///
/// let handle = directory.clone();
/// handle.remove(3);
/// assert_eq!(directory.len(), 1);
/// ```
#[derive(Clone)]
pub struct MemoryDirectory {
    inner: Arc<Mutex<MemoryDirectoryInner>>,
}

impl MemoryDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(MemoryDirectoryInner {
                interfaces: HashMap::new(),
                unavailable: false,
                list_calls: 0,
                lookup_calls: 0,
            })),
        }
    }

    /// Builder form of [`insert`](Self::insert) with an alias.
    pub fn with_interface(self, index: InterfaceIndex, alias: impl Into<String>) -> Self {
        self.insert(index, Some(alias.into()));
        self
    }

    /// Add or replace an interface. `None` means no alias is configured.
    pub fn insert(&self, index: InterfaceIndex, alias: Option<String>) {
        let mut inner = self.inner.lock().unwrap();
        inner.interfaces.insert(index, alias);
    }

    /// Remove an interface, returning whether it existed.
    pub fn remove(&self, index: InterfaceIndex) -> bool {
        let mut inner = self.inner.lock().unwrap();
        inner.interfaces.remove(&index).is_some()
    }

    /// Make every subsequent query fail with [`Error::Directory`].
    pub fn set_unavailable(&self, unavailable: bool) {
        let mut inner = self.inner.lock().unwrap();
        inner.unavailable = unavailable;
    }

    /// Number of interfaces.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().interfaces.len()
    }

    /// Check if the directory has no interfaces.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current alias of an interface, `None` if it does not exist.
    pub fn alias(&self, index: InterfaceIndex) -> Option<Option<String>> {
        self.inner.lock().unwrap().interfaces.get(&index).cloned()
    }

    /// Number of `list_indices` calls served so far.
    pub fn list_calls(&self) -> usize {
        self.inner.lock().unwrap().list_calls
    }

    /// Number of `lookup` calls served so far.
    pub fn lookup_calls(&self) -> usize {
        self.inner.lock().unwrap().lookup_calls
    }

    fn unavailable_error() -> Error {
        Error::directory(
            "<memory>",
            io::Error::new(io::ErrorKind::NotConnected, "directory unavailable"),
        )
    }
}

impl Default for MemoryDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock().unwrap();
        f.debug_struct("MemoryDirectory")
            .field("interfaces", &inner.interfaces.len())
            .field("unavailable", &inner.unavailable)
            .finish()
    }
}

impl InterfaceDirectory for MemoryDirectory {
    fn list_indices(&self) -> impl Future<Output = Result<Vec<InterfaceIndex>>> + Send {
        let result = {
            let mut inner = self.inner.lock().unwrap();
            inner.list_calls += 1;
            if inner.unavailable {
                Err(Self::unavailable_error())
            } else {
                Ok(inner.interfaces.keys().copied().collect())
            }
        };
        async move { result }
    }

    fn lookup(&self, index: InterfaceIndex) -> impl Future<Output = Result<InterfaceRecord>> + Send {
        let result = {
            let mut inner = self.inner.lock().unwrap();
            inner.lookup_calls += 1;
            if inner.unavailable {
                Err(Self::unavailable_error())
            } else {
                inner
                    .interfaces
                    .get(&index)
                    .map(|alias| InterfaceRecord::new(index, alias.clone()))
                    .ok_or(Error::NotFound { index })
            }
        };
        async move { result }
    }
}
