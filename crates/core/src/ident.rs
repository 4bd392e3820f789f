//! Identifier normalisation.
//!
//! Clients address records loosely: a bare number (`1`, `"07"`) or an already
//! canonical prefixed code (`"P001"`). [`normalise`] maps either form to the
//! canonical code so lookups and stored references always compare equal.

use serde::Deserialize;
use std::fmt;

/// The three record kinds, each with its canonical identifier prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Patient,
    Doctor,
    Appointment,
}

impl EntityKind {
    pub fn prefix(self) -> char {
        match self {
            EntityKind::Patient => 'P',
            EntityKind::Doctor => 'D',
            EntityKind::Appointment => 'C',
        }
    }
}

/// A client-supplied identifier, which JSON may carry as a number or a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(u64),
    Text(String),
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawId::Number(n) => write!(f, "{n}"),
            RawId::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Normalises a client-supplied identifier to its canonical form.
///
/// A value already shaped like a prefixed code (a letter from {P, D, C}
/// followed by a digit) is uppercased and returned unchanged, whatever `kind`
/// says. Anything else is reduced to its digits, left-padded to 3 with zeros,
/// and given the kind's prefix. Normalising twice yields the same result as
/// normalising once.
pub fn normalise(kind: EntityKind, value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let mut chars = value.chars();
    let prefixed = matches!(
        chars.next().map(|c| c.to_ascii_uppercase()),
        Some('P' | 'D' | 'C')
    ) && chars.next().is_some_and(|c| c.is_ascii_digit());

    if prefixed {
        return value.to_uppercase();
    }

    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    format!("{}{:0>3}", kind.prefix(), digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_number_gets_prefix_and_padding() {
        assert_eq!(normalise(EntityKind::Patient, "1"), "P001");
        assert_eq!(normalise(EntityKind::Doctor, "42"), "D042");
        assert_eq!(normalise(EntityKind::Appointment, "1234"), "C1234");
    }

    #[test]
    fn test_canonical_code_passes_through_uppercased() {
        assert_eq!(normalise(EntityKind::Patient, "P001"), "P001");
        assert_eq!(normalise(EntityKind::Patient, "p001"), "P001");
        // A prefixed code of another kind is kept as addressed.
        assert_eq!(normalise(EntityKind::Patient, "d007"), "D007");
    }

    #[test]
    fn test_non_digit_noise_is_stripped() {
        assert_eq!(normalise(EntityKind::Patient, "nº 7"), "P007");
        assert_eq!(normalise(EntityKind::Doctor, "abc"), "D000");
    }

    #[test]
    fn test_empty_value_is_returned_unchanged() {
        assert_eq!(normalise(EntityKind::Patient, ""), "");
    }

    #[test]
    fn test_normalise_is_idempotent() {
        for value in ["1", "07", "P001", "c12", "nº 7", "abc", ""] {
            let once = normalise(EntityKind::Appointment, value);
            let twice = normalise(EntityKind::Appointment, &once);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_raw_id_displays_both_forms() {
        assert_eq!(RawId::Number(3).to_string(), "3");
        assert_eq!(RawId::Text("P003".into()).to_string(), "P003");
    }
}
