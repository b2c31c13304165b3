//! Responses written back to the master agent.

use crate::codec;
use crate::directory::InterfaceRecord;
use crate::oid::Oid;

/// Type tag net-snmp expects for ifAlias values (`DisplayString`).
pub const STRING_TYPE: &str = "string";

/// Reply to one command group.
///
/// `Display` renders the exact pass_persist wire text, without the final
/// newline the engine appends when writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Reply to `PING`.
    Pong,
    /// Reply to every `set`.
    NotWritable,
    /// No instance for a `get`/`getnext` (written as `NONE`).
    NoValue,
    /// An instance: OID, type tag, and alias on three lines.
    Value {
        /// Instance OID.
        oid: Oid,
        /// Alias, possibly empty.
        alias: String,
    },
}

impl Response {
    /// Build a value response for an interface.
    ///
    /// Line breaks inside the alias would split the reply, so they are
    /// replaced by spaces.
    pub fn value(record: InterfaceRecord) -> Self {
        let alias = if record.alias.contains(['\n', '\r']) {
            record.alias.replace(['\n', '\r'], " ")
        } else {
            record.alias
        };

        Response::Value {
            oid: codec::encode(record.index),
            alias,
        }
    }

    /// Returns `true` if this is a value result.
    pub fn is_value(&self) -> bool {
        matches!(self, Response::Value { .. })
    }
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Response::Pong => f.write_str("PONG"),
            Response::NotWritable => f.write_str("not-writable"),
            Response::NoValue => f.write_str("NONE"),
            Response::Value { oid, alias } => write!(f, "{}\n{}\n{}", oid, STRING_TYPE, alias),
        }
    }
}
