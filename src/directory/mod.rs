//! Interface directory abstraction.
//!
//! Provides the [`InterfaceDirectory`] trait the command engine queries, and a
//! sysfs-backed implementation for Linux hosts.
//!
//! Implementations must not cache between calls: the set of interfaces can
//! change between any two requests, and every call reflects the directory as
//! it is at that moment.

mod sysfs;

#[cfg(any(test, feature = "testing"))]
mod memory;

pub use sysfs::*;

#[cfg(any(test, feature = "testing"))]
pub use memory::*;

use crate::error::Result;
use std::future::Future;

/// Interface index as assigned by the operating system (`ifIndex`).
pub type InterfaceIndex = u32;

/// One interface as seen by the directory at query time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceRecord {
    /// Interface index.
    pub index: InterfaceIndex,
    /// Interface alias; empty when none is configured.
    pub alias: String,
}

impl InterfaceRecord {
    /// Build a record, normalizing an absent alias to the empty string.
    pub fn new(index: InterfaceIndex, alias: Option<String>) -> Self {
        Self {
            index,
            alias: alias.unwrap_or_default(),
        }
    }
}

/// Read-only query surface over the live interface set.
///
/// Errors other than [`Error::NotFound`](crate::Error::NotFound) mean the
/// directory itself could not be consulted and are fatal to the command loop.
pub trait InterfaceDirectory: Send + Sync {
    /// Snapshot of all interface indices currently known.
    ///
    /// Order is unspecified and the result may be empty.
    fn list_indices(&self) -> impl Future<Output = Result<Vec<InterfaceIndex>>> + Send;

    /// Fetch the interface with the given index.
    ///
    /// Returns [`Error::NotFound`](crate::Error::NotFound) if no interface
    /// with that index currently exists.
    fn lookup(&self, index: InterfaceIndex) -> impl Future<Output = Result<InterfaceRecord>> + Send;
}
