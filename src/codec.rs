//! Mapping between ifAlias instance OIDs and interface indices.
//!
//! The ifAlias column (`IF-MIB::ifAlias`, `.1.3.6.1.2.1.31.1.1.1.18`) is indexed
//! by `ifIndex`, so every instance OID is the column OID plus exactly one arc.

use crate::directory::InterfaceIndex;
use crate::error::{Error, OidErrorKind, Result};
use crate::oid::Oid;

/// Arcs of the ifAlias column, `.1.3.6.1.2.1.31.1.1.1.18`.
pub const BASE_ARCS: &[u32] = &[1, 3, 6, 1, 2, 1, 31, 1, 1, 1, 18];

/// The ifAlias column OID.
pub fn base_oid() -> Oid {
    Oid::from_slice(BASE_ARCS)
}

/// Decode an instance OID into an interface index.
///
/// The bare column OID decodes to `0`, which sorts before every real
/// interface and is what GETNEXT uses to start a table walk.
///
/// # Examples
///
/// ```
/// use ifalias_persist::codec::decode;
///
/// assert_eq!(decode(".1.3.6.1.2.1.31.1.1.1.18").unwrap(), 0);
/// assert_eq!(decode(".1.3.6.1.2.1.31.1.1.1.18.123").unwrap(), 123);
/// assert!(decode(".1.3.6.1.2.1.31.1.1.1.18.a").is_err());
/// assert!(decode(".1.3.6.1.2.1").is_err());
/// ```
pub fn decode(text: &str) -> Result<InterfaceIndex> {
    let oid = Oid::parse(text)?;
    let base = base_oid();

    if !oid.starts_with(&base) {
        return Err(Error::malformed_oid(OidErrorKind::OutsideBase, text));
    }

    match &oid.arcs()[base.len()..] {
        [] => Ok(0),
        [index] => Ok(*index),
        rest => Err(Error::malformed_oid(
            OidErrorKind::TooManyArcs { count: rest.len() },
            text,
        )),
    }
}

/// Encode an interface index as its ifAlias instance OID.
pub fn encode(index: InterfaceIndex) -> Oid {
    base_oid().child(index)
}
