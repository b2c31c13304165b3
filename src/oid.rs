//! Object Identifier (OID) type.
//!
//! OIDs are stored as `SmallVec<[u32; 16]>` to avoid heap allocation for common OIDs.
//! Text form follows net-snmp's pass_persist convention: arcs joined by `.`
//! with a leading dot (`.1.3.6.1.2.1.31.1.1.1.18.3`).

use crate::error::{Error, OidErrorKind, Result};
use smallvec::SmallVec;
use std::fmt;

/// Object Identifier.
///
/// Stored as a sequence of arc values (u32). Uses SmallVec to avoid
/// heap allocation for OIDs with 16 or fewer arcs.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Oid {
    arcs: SmallVec<[u32; 16]>,
}

impl Oid {
    /// Create an OID from a slice of arcs.
    ///
    /// # Examples
    ///
    /// ```
    /// use ifalias_persist::oid::Oid;
    ///
    /// let oid = Oid::from_slice(&[1, 3, 6, 1, 2, 1, 31]);
    /// assert_eq!(oid.to_string(), ".1.3.6.1.2.1.31");
    /// ```
    pub fn from_slice(arcs: &[u32]) -> Self {
        Self {
            arcs: SmallVec::from_slice(arcs),
        }
    }

    /// Parse an OID from net-snmp dotted notation (e.g. `.1.3.6.1.2.1.31`).
    ///
    /// Parsing is strict: the leading dot is required, every arc must be a
    /// non-empty run of ASCII digits that fits in a `u32`. Sign characters,
    /// whitespace, and doubled dots are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use ifalias_persist::oid::Oid;
    ///
    /// let oid = Oid::parse(".1.3.6.1").unwrap();
    /// assert_eq!(oid.arcs(), &[1, 3, 6, 1]);
    ///
    /// assert!(Oid::parse("1.3.6.1").is_err());
    /// assert!(Oid::parse(".1..3").is_err());
    /// assert!(Oid::parse(".1.+3").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::malformed_oid(OidErrorKind::Empty, s));
        }

        let Some(body) = s.strip_prefix('.') else {
            return Err(Error::malformed_oid(OidErrorKind::MissingLeadingDot, s));
        };

        let mut arcs = SmallVec::new();
        for part in body.split('.') {
            arcs.push(parse_arc(part).ok_or_else(|| {
                Error::malformed_oid(OidErrorKind::InvalidArc, s)
            })?);
        }

        Ok(Self { arcs })
    }

    /// Get the arc values.
    pub fn arcs(&self) -> &[u32] {
        &self.arcs
    }

    /// Get the number of arcs.
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    /// Check if the OID is empty.
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Check if this OID starts with another OID.
    ///
    /// An OID always starts with itself.
    pub fn starts_with(&self, other: &Oid) -> bool {
        self.arcs.len() >= other.arcs.len() && self.arcs[..other.arcs.len()] == other.arcs[..]
    }

    /// Create a child OID by appending an arc.
    ///
    /// # Examples
    ///
    /// ```
    /// use ifalias_persist::oid;
    ///
    /// let column = oid!(1, 3, 6, 1, 2, 1, 31, 1, 1, 1, 18);
    /// assert_eq!(column.child(3).to_string(), ".1.3.6.1.2.1.31.1.1.1.18.3");
    /// ```
    pub fn child(&self, arc: u32) -> Oid {
        let mut arcs = self.arcs.clone();
        arcs.push(arc);
        Oid { arcs }
    }
}

/// Parse one decimal arc; `None` on anything but plain ASCII digits in range.
fn parse_arc(part: &str) -> Option<u32> {
    // `u32::from_str` accepts a leading '+', which is not a valid arc.
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl fmt::Debug for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Oid({})", self)
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for arc in &self.arcs {
            write!(f, ".{}", arc)?;
        }
        Ok(())
    }
}

impl PartialOrd for Oid {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Oid {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.arcs.cmp(&other.arcs)
    }
}

/// Macro to create an OID from literal arcs.
///
/// # Examples
///
/// ```
/// use ifalias_persist::oid;
///
/// let if_x_entry = oid!(1, 3, 6, 1, 2, 1, 31, 1, 1, 1);
/// assert_eq!(if_x_entry.to_string(), ".1.3.6.1.2.1.31.1.1.1");
/// ```
#[macro_export]
macro_rules! oid {
    ($($arc:expr),* $(,)?) => {
        $crate::oid::Oid::from_slice(&[$($arc),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let oid = Oid::parse(".1.3.6.1.2.1.1.1.0").unwrap();
        assert_eq!(oid.arcs(), &[1, 3, 6, 1, 2, 1, 1, 1, 0]);
    }

    #[test]
    fn test_display_has_leading_dot() {
        let oid = Oid::from_slice(&[1, 3, 6, 1, 2, 1, 1, 1, 0]);
        assert_eq!(oid.to_string(), ".1.3.6.1.2.1.1.1.0");
    }

    #[test]
    fn test_parse_rejects_missing_leading_dot() {
        let err = Oid::parse("1.3.6.1").unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedOid {
                kind: OidErrorKind::MissingLeadingDot,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_rejects_bad_arcs() {
        for input in [".", ".1..3", ".1.3.", ".1.-3", ".1.+3", ".1. 3", ".1.3a", ".1.99999999999"] {
            let err = Oid::parse(input).unwrap_err();
            assert!(
                matches!(
                    err,
                    Error::MalformedOid {
                        kind: OidErrorKind::InvalidArc,
                        ..
                    }
                ),
                "{input:?} should be rejected as an invalid arc"
            );
        }
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(
            Oid::parse("").unwrap_err(),
            Error::MalformedOid {
                kind: OidErrorKind::Empty,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_max_arc() {
        let oid = Oid::parse(".1.4294967295").unwrap();
        assert_eq!(oid.arcs(), &[1, u32::MAX]);
    }

    #[test]
    fn test_starts_with() {
        let column = oid!(1, 3, 6, 1, 2, 1, 31, 1, 1, 1, 18);
        let instance = column.child(5);
        assert!(instance.starts_with(&column));
        assert!(column.starts_with(&column));
        assert!(!column.starts_with(&instance));
        assert!(!oid!(1, 3, 6, 1, 2, 1, 2).starts_with(&column));
    }

    #[test]
    fn test_display_parse_agree() {
        let oid = oid!(1, 3, 6, 1, 2, 1, 31, 1, 1, 1, 18, 42);
        assert_eq!(Oid::parse(&oid.to_string()).unwrap(), oid);
    }

    #[test]
    fn test_ordering_is_arc_wise() {
        assert!(oid!(1, 3, 6, 1, 2) < oid!(1, 3, 6, 1, 2, 1));
        assert!(oid!(1, 3, 6, 1, 2, 1) < oid!(1, 3, 6, 1, 3));
        assert!(oid!(1, 3, 9) < oid!(1, 3, 10));
    }
}
