//! Prelude module for convenient imports.
//!
//! ```rust,no_run
//! use ifalias_persist::prelude::*;
//! ```
//!
//! This imports:
//! - Core types: [`Engine`], [`Request`], [`Response`], [`Oid`]
//! - Directory types: [`InterfaceDirectory`], [`InterfaceRecord`], [`SysfsDirectory`]
//! - Error handling: [`Error`], [`Result`]
//! - The [`oid!`] macro

pub use crate::directory::{InterfaceDirectory, InterfaceIndex, InterfaceRecord, SysfsDirectory};
pub use crate::error::{Error, Result};
pub use crate::handler::{Engine, Request, Response};
pub use crate::oid::Oid;

#[doc(no_inline)]
pub use crate::oid;
