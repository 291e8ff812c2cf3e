// crates/geocp-core/src/text.rs

//! Locality-name normalization.
//!
//! Both datasets spell the same place differently (`"Rosario"` vs
//! `"ROSARIO!!"`), so names are compared through a normalized key.

use serde::{Deserialize, Serialize};

/// Canonicalize a free-text locality name into a lookup key.
///
/// This performs:
/// 1\) Drop every character that is neither a word character (Unicode
///    alphanumeric or `_`) nor whitespace
/// 2\) Upper-case (full Unicode mapping, so `ß` becomes `SS`)
/// 3\) Trim leading and trailing whitespace
///
/// Diacritics are kept: `"José"` and `"Jose"` produce different keys. Use
/// [`fold_key`] when accent-insensitive matching is wanted.
///
/// # Examples
///
/// ```rust
/// use geocp_core::normalize_key;
///
/// assert_eq!(normalize_key("La Plata"), "LA PLATA");
/// assert_eq!(normalize_key("La-Plata!"), "LAPLATA");
/// assert_eq!(normalize_key("  Villa Gral. Belgrano "), "VILLA GRAL BELGRANO");
/// assert_eq!(normalize_key("José"), "JOSÉ");
/// ```
pub fn normalize_key(s: &str) -> String {
    let kept: String = s
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();
    kept.to_uppercase().trim().to_owned()
}

/// Accent-insensitive variant of [`normalize_key`].
///
/// The input is transliterated to ASCII with `deunicode` first, so
/// `"José"`, `"Jose"` and `"JOSÉ"` share one key.
///
/// ```rust
/// use geocp_core::fold_key;
///
/// assert_eq!(fold_key("José C. Paz"), "JOSE C PAZ");
/// assert_eq!(fold_key("Ñorquincó"), fold_key("NORQUINCO"));
/// ```
pub fn fold_key(s: &str) -> String {
    normalize_key(&deunicode::deunicode(s))
}

/// Which normalization is applied to locality names.
///
/// The same mode must be used when building the index and when joining,
/// otherwise keys from the two sides never meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyMode {
    /// [`normalize_key`]: punctuation and case only.
    #[default]
    Exact,
    /// [`fold_key`]: additionally strips diacritics.
    FoldAccents,
}

impl KeyMode {
    #[inline]
    pub fn key(self, s: &str) -> String {
        match self {
            KeyMode::Exact => normalize_key(s),
            KeyMode::FoldAccents => fold_key(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_and_case_collapse() {
        assert_eq!(normalize_key("La Plata"), "LA PLATA");
        assert_eq!(normalize_key("la plata."), "LA PLATA");
        assert_eq!(normalize_key("ROSARIO!!"), normalize_key("Rosario"));
    }

    #[test]
    fn punctuation_is_removed_not_replaced() {
        // A hyphen disappears; it does not turn into a space.
        assert_eq!(normalize_key("La-Plata!"), "LAPLATA");
        assert_ne!(normalize_key("La-Plata"), normalize_key("La Plata"));
    }

    #[test]
    fn underscore_and_digits_are_kept() {
        assert_eq!(normalize_key("barrio_9 de julio"), "BARRIO_9 DE JULIO");
    }

    #[test]
    fn inner_whitespace_is_preserved() {
        assert_eq!(normalize_key("  San   Juan\t"), "SAN   JUAN");
    }

    #[test]
    fn accents_are_not_stripped() {
        assert_eq!(normalize_key("San José"), "SAN JOSÉ");
        assert_ne!(normalize_key("José"), normalize_key("Jose"));
    }

    #[test]
    fn empty_and_punctuation_only_give_empty_key() {
        assert_eq!(normalize_key(""), "");
        assert_eq!(normalize_key(" .,-!? "), "");
    }

    #[test]
    fn sharp_s_expands_on_upper_case() {
        assert_eq!(normalize_key("Straße"), "STRASSE");
    }

    #[test]
    fn fold_key_matches_accented_and_plain() {
        assert_eq!(fold_key("José"), fold_key("Jose"));
        assert_eq!(fold_key("Río Cuarto"), "RIO CUARTO");
    }

    #[test]
    fn key_mode_dispatch() {
        assert_eq!(KeyMode::Exact.key("Córdoba"), "CÓRDOBA");
        assert_eq!(KeyMode::FoldAccents.key("Córdoba"), "CORDOBA");
        assert_eq!(KeyMode::default(), KeyMode::Exact);
    }
}
