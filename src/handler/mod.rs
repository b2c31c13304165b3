//! pass_persist protocol handling.
//!
//! This module implements the agent side of net-snmp's `pass_persist`
//! protocol for the ifAlias column:
//!
//! - [`Command`] and [`Request`] - The closed command vocabulary
//! - [`RequestReader`] - Reads command groups from the input stream
//! - [`Engine`] - Dispatches requests against an interface directory
//! - [`Response`] - Replies and their wire text
//! - [`IndexTable`] - Sorted index snapshot used for GETNEXT
//!
//! # Wire Protocol
//!
//! The master agent writes a command line followed by its arguments, one per
//! line, and waits for the reply:
//!
//! ```text
//! PING              ->  PONG
//! get               ->  .1.3.6.1.2.1.31.1.1.1.18.3
//! .1.3.6.1.2.1.31.1.1.1.18.3      string
//!                       Production
//! getnext           ->  NONE
//! .1.3.6.1.2.1.31.1.1.1.18.4
//! set               ->  not-writable
//! .1.3.6.1.2.1.31.1.1.1.18.3
//! string Lab
//! ```
//!
//! # GETNEXT
//!
//! GETNEXT returns the interface with the smallest index strictly greater than
//! the one in the request. The request OID need not name an existing
//! interface, and the bare column OID sorts before all of them, which is how
//! a table walk starts.

mod command;
mod engine;
mod index_table;
mod reader;
mod results;

pub use command::{Command, Request};
pub use engine::Engine;
pub use index_table::IndexTable;
pub use reader::RequestReader;
pub use results::{Response, STRING_TYPE};
