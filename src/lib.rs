//! # ifalias-persist
//!
//! net-snmp `pass_persist` sub-agent serving the `IF-MIB::ifAlias` column
//! (`.1.3.6.1.2.1.31.1.1.1.18`) from the host's live interface directory.
//!
//! ## Features
//!
//! - Exact `pass_persist` reply grammar (`PONG`, `NONE`, `not-writable`, values)
//! - GETNEXT over an unordered, changing interface set
//! - Read-only: every `set` is refused
//! - Malformed input and missing interfaces never break the pipe
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ifalias_persist::directory::{DEFAULT_SYSFS_ROOT, SysfsDirectory};
//! use ifalias_persist::handler::Engine;
//! use tokio::io::BufReader;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), ifalias_persist::Error> {
//!     let directory = SysfsDirectory::open(DEFAULT_SYSFS_ROOT).await?;
//!     let engine = Engine::new(directory);
//!
//!     engine
//!         .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
//!         .await
//! }
//! ```
//!
//! Registered in `snmpd.conf` with:
//!
//! ```text
//! pass_persist .1.3.6.1.2.1.31.1.1.1.18 /usr/local/bin/ifalias-persist
//! ```

pub mod codec;
pub mod directory;
pub mod error;
pub mod handler;
pub mod oid;
pub mod prelude;

#[cfg(feature = "cli")]
pub mod cli;

pub use directory::{InterfaceDirectory, InterfaceIndex, InterfaceRecord};
pub use error::{Error, Result};
pub use handler::{Engine, Request, Response};
pub use oid::Oid;
