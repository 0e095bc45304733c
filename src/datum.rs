//! Value kinds and tagged payloads stored by the list.
//!
//! This module defines the closed set of element types the container accepts.
//! [`Kind`] identifies how a payload is sized and compared, and [`Datum`]
//! holds one natively-typed payload per kind. [`Datum::byte_eq`] is the
//! comparison rule every value-based search uses.

use std::fmt;

use bytes::Bytes;

/// Element type identifier.
///
/// One variant per payload representation. `Record` payloads are opaque to
/// the container; their byte width is fixed per list at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// 64-bit signed integer.
    Integer,
    /// Double-precision floating-point.
    Double,
    /// Single Unicode scalar value.
    Character,
    /// Variable-length string.
    Text,
    /// Opaque fixed-width record.
    Record,
}

impl Kind {
    /// Returns the payload byte width for scalar kinds, or `None` for
    /// kinds whose width is per-value (`Text`) or per-list (`Record`).
    pub const fn fixed_size(self) -> Option<usize> {
        match self {
            Kind::Integer => Some(8),
            Kind::Double => Some(8),
            Kind::Character => Some(4),
            Kind::Text | Kind::Record => None,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Integer => "integer",
            Kind::Double => "double",
            Kind::Character => "character",
            Kind::Text => "text",
            Kind::Record => "record",
        };
        write!(f, "{}", name)
    }
}

/// A tagged element value.
///
/// Every variant owns its payload outright; inserting a `Datum` moves the
/// payload into the node, and query copies hand back independently owned
/// clones. `Record` uses [`Bytes`] so copies are cheap.
///
/// The derived `PartialEq` follows IEEE semantics for `Double` (`NaN` never
/// equals itself) and exists for assertions; searches go through
/// [`byte_eq`](Datum::byte_eq) instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Datum {
    /// 64-bit signed integer.
    Integer(i64),
    /// Double-precision floating-point.
    Double(f64),
    /// Single Unicode scalar value.
    Character(char),
    /// Variable-length string.
    Text(String),
    /// Opaque fixed-width record payload.
    Record(Bytes),
}

impl Datum {
    /// Returns the kind tag for this value.
    pub const fn kind(&self) -> Kind {
        match self {
            Datum::Integer(_) => Kind::Integer,
            Datum::Double(_) => Kind::Double,
            Datum::Character(_) => Kind::Character,
            Datum::Text(_) => Kind::Text,
            Datum::Record(_) => Kind::Record,
        }
    }

    /// Byte-level equality, the container's search rule.
    ///
    /// Kinds must match; values of different kinds never compare equal.
    /// `Double` compares by bit pattern, so a `NaN` matches a bitwise
    /// identical `NaN` and `0.0` does not match `-0.0`. `Text` and `Record`
    /// compare their complete payloads.
    pub fn byte_eq(&self, other: &Datum) -> bool {
        match (self, other) {
            (Datum::Integer(a), Datum::Integer(b)) => a == b,
            (Datum::Double(a), Datum::Double(b)) => a.to_bits() == b.to_bits(),
            (Datum::Character(a), Datum::Character(b)) => a == b,
            (Datum::Text(a), Datum::Text(b)) => a == b,
            (Datum::Record(a), Datum::Record(b)) => a == b,
            _ => false,
        }
    }
}

impl From<i64> for Datum {
    fn from(n: i64) -> Self {
        Datum::Integer(n)
    }
}

impl From<f64> for Datum {
    fn from(n: f64) -> Self {
        Datum::Double(n)
    }
}

impl From<char> for Datum {
    fn from(c: char) -> Self {
        Datum::Character(c)
    }
}

impl From<&str> for Datum {
    fn from(s: &str) -> Self {
        Datum::Text(s.to_string())
    }
}

impl From<String> for Datum {
    fn from(s: String) -> Self {
        Datum::Text(s)
    }
}

impl From<Bytes> for Datum {
    fn from(payload: Bytes) -> Self {
        Datum::Record(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_fixed_size() {
        assert_eq!(Kind::Integer.fixed_size(), Some(8));
        assert_eq!(Kind::Double.fixed_size(), Some(8));
        assert_eq!(Kind::Character.fixed_size(), Some(4));
        assert_eq!(Kind::Text.fixed_size(), None);
        assert_eq!(Kind::Record.fixed_size(), None);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(Kind::Integer.to_string(), "integer");
        assert_eq!(Kind::Double.to_string(), "double");
        assert_eq!(Kind::Character.to_string(), "character");
        assert_eq!(Kind::Text.to_string(), "text");
        assert_eq!(Kind::Record.to_string(), "record");
    }

    #[test]
    fn test_datum_kind() {
        assert_eq!(Datum::Integer(0).kind(), Kind::Integer);
        assert_eq!(Datum::Double(0.0).kind(), Kind::Double);
        assert_eq!(Datum::Character('a').kind(), Kind::Character);
        assert_eq!(Datum::Text(String::new()).kind(), Kind::Text);
        assert_eq!(Datum::Record(Bytes::new()).kind(), Kind::Record);
    }

    #[test]
    fn test_byte_eq_same_kind() {
        assert!(Datum::Integer(100).byte_eq(&Datum::Integer(100)));
        assert!(!Datum::Integer(100).byte_eq(&Datum::Integer(-100)));
        assert!(Datum::Character('A').byte_eq(&Datum::Character('A')));
        assert!(!Datum::Character('A').byte_eq(&Datum::Character('B')));
        assert!(Datum::Text("saksham".into()).byte_eq(&Datum::Text("saksham".into())));
        let rec = Bytes::from_static(&[1, 2, 3, 4]);
        assert!(Datum::Record(rec.clone()).byte_eq(&Datum::Record(rec)));
        assert!(!Datum::Record(Bytes::from_static(&[1, 2, 3, 4]))
            .byte_eq(&Datum::Record(Bytes::from_static(&[1, 2, 3, 5]))));
    }

    #[test]
    fn test_byte_eq_double_bit_pattern() {
        assert!(Datum::Double(9.81).byte_eq(&Datum::Double(9.81)));
        assert!(Datum::Double(f64::NAN).byte_eq(&Datum::Double(f64::NAN)));
        assert!(!Datum::Double(0.0).byte_eq(&Datum::Double(-0.0)));
        // Derived PartialEq disagrees on both counts.
        assert_ne!(Datum::Double(f64::NAN), Datum::Double(f64::NAN));
        assert_eq!(Datum::Double(0.0), Datum::Double(-0.0));
    }

    #[test]
    fn test_byte_eq_text_full_equality() {
        let stored = Datum::Text("sak".into());
        let query = Datum::Text("saksham".into());
        assert!(!stored.byte_eq(&query));
        assert!(!query.byte_eq(&stored));
        assert!(!Datum::Text(String::new()).byte_eq(&query));
    }

    #[test]
    fn test_byte_eq_kind_mismatch() {
        assert!(!Datum::Integer(65).byte_eq(&Datum::Character('A')));
        assert!(!Datum::Double(100.0).byte_eq(&Datum::Integer(100)));
        assert!(!Datum::Text("1".into()).byte_eq(&Datum::Integer(1)));
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Datum::from(42i64), Datum::Integer(42));
        assert_eq!(Datum::from(9.81f64), Datum::Double(9.81));
        assert_eq!(Datum::from('A'), Datum::Character('A'));
        assert_eq!(Datum::from("hi"), Datum::Text("hi".into()));
        assert_eq!(Datum::from(String::from("hi")), Datum::Text("hi".into()));
        assert_eq!(
            Datum::from(Bytes::from_static(b"xy")),
            Datum::Record(Bytes::from_static(b"xy"))
        );
    }
}
