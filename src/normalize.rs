//! Normalization of free-text card attributes into comparable keys.
//!
//! Equality is purely string based: no locale folding, accents are kept.

/// Tri-state foil flag. `Unknown` widens the catalogue search instead of
/// failing the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Foil {
    Yes,
    No,
    #[default]
    Unknown,
}

impl Foil {
    /// Parse a foil cell (case-insensitive). Unrecognized tokens are `Unknown`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "foil" | "true" | "yes" | "1" | "y" | "t" => Foil::Yes,
            "normal" | "nonfoil" | "non-foil" | "false" | "no" | "0" | "n" | "f" => Foil::No,
            _ => Foil::Unknown,
        }
    }

    /// Returns true only for a positively foil row
    pub fn is_foil(self) -> bool {
        self == Foil::Yes
    }

    /// Foil states this value stands for, itself first. `Unknown` covers all
    /// three, in the order unknown, foil, nonfoil.
    pub fn variants(self) -> &'static [Foil] {
        match self {
            Foil::Unknown => &[Foil::Unknown, Foil::Yes, Foil::No],
            Foil::Yes => &[Foil::Yes],
            Foil::No => &[Foil::No],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Foil::Yes => "true",
            Foil::No => "false",
            Foil::Unknown => "",
        }
    }
}

/// Lowercase, collapse whitespace runs to a single space, trim.
pub fn normalize_name(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Trim and strip leading zeros, keeping the trimmed input if nothing is left.
pub fn normalize_number(value: &str) -> String {
    let trimmed = value.trim();
    let stripped = trimmed.trim_start_matches('0');
    if stripped.is_empty() {
        trimmed.to_string()
    } else {
        stripped.to_string()
    }
}

/// Alias of [`Foil::parse`] for symmetry with the other normalizers.
pub fn normalize_foil(value: &str) -> Foil {
    Foil::parse(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_lowercased_and_collapsed() {
        assert_eq!(normalize_name("  Lightning   Bolt\t"), "lightning bolt");
        assert_eq!(
            normalize_name("Oko, Lorwyn Liege //  Oko, Shadowmoor Scion"),
            "oko, lorwyn liege // oko, shadowmoor scion"
        );
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn name_keeps_accents() {
        assert_eq!(normalize_name("Séance"), "séance");
        assert_ne!(normalize_name("Séance"), normalize_name("Seance"));
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in ["  Black   LOTUS ", "Æther Vial", "", "a\n\nb"] {
            let once = normalize_name(raw);
            assert_eq!(normalize_name(&once), once);
        }
        for raw in ["0222", "000", " 7 ", "12a", ""] {
            let once = normalize_number(raw);
            assert_eq!(normalize_number(&once), once);
        }
        for foil in [Foil::Yes, Foil::No, Foil::Unknown] {
            assert_eq!(normalize_foil(foil.as_str()), foil);
        }
    }

    #[test]
    fn number_strips_leading_zeros() {
        assert_eq!(normalize_number("0222"), normalize_number("222"));
        assert_eq!(normalize_number("007"), "7");
        assert_eq!(normalize_number(" 12a "), "12a");
    }

    #[test]
    fn number_zero_is_not_emptied() {
        assert_eq!(normalize_number("0"), "0");
        assert_eq!(normalize_number("000"), "000");
        assert_eq!(normalize_number(""), "");
    }

    #[test]
    fn foil_vocabulary() {
        for token in ["foil", "TRUE", "Yes", "1", "y", "t"] {
            assert_eq!(Foil::parse(token), Foil::Yes, "{token}");
        }
        for token in ["normal", "nonfoil", "Non-Foil", "false", "no", "0", "n", "F"] {
            assert_eq!(Foil::parse(token), Foil::No, "{token}");
        }
        for token in ["", "etched", "maybe", "2"] {
            assert_eq!(Foil::parse(token), Foil::Unknown, "{token}");
        }
    }

    #[test]
    fn only_yes_is_foil() {
        assert!(Foil::Yes.is_foil());
        assert!(!Foil::No.is_foil());
        assert!(!Foil::Unknown.is_foil());
    }
}
