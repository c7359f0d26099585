//! Product code → display name resolution.
//!
//! - [`table`] — the static, ordered (code, name) table.
//! - [`resolve`] — case-sensitive substring lookup, first match wins.

pub mod table;

use table::SKU_NAMES;

/// Resolve a product code (or an identifier embedding one) to its display name.
///
/// Matching is case-sensitive substring containment against [`SKU_NAMES`] in
/// table order. The table is necessarily incomplete, so an unknown code yields
/// `None` rather than an error.
pub fn resolve(part_number: &str) -> Option<&'static str> {
    if part_number.is_empty() {
        return None;
    }

    SKU_NAMES
        .iter()
        .find(|(code, _)| part_number.contains(code))
        .map(|(_, name)| *name)
}

/// Like [`resolve`], but returns an empty string for unknown codes.
pub fn friendly_name(part_number: &str) -> String {
    resolve(part_number).unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_code() {
        assert_eq!(resolve("ENTERPRISEPACK"), Some("Office 365 E3"));
        assert_eq!(resolve("SPE_E5"), Some("Microsoft 365 E5"));
    }

    #[test]
    fn test_specific_code_wins_over_contained_code() {
        assert_eq!(resolve("ENTERPRISEPACK_GOV"), Some("Office 365 G3 GCC"));
        assert_eq!(resolve("EMSPREMIUM"), Some("Enterprise Mobility + Security E5"));
    }

    #[test]
    fn test_suffixed_variant_falls_back_to_base_code() {
        assert_eq!(resolve("POWER_BI_PRO_CONTOSO"), Some("Power BI Pro"));
        assert_eq!(
            resolve("tenant:ENTERPRISEPREMIUM"),
            Some("Office 365 E5")
        );
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(resolve("CONTOSO_INTERNAL_SKU"), None);
        assert_eq!(resolve(""), None);
        assert_eq!(friendly_name("CONTOSO_INTERNAL_SKU"), "");
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(resolve("enterprisepack"), None);
    }

    #[test]
    fn test_every_code_resolves_to_its_own_name() {
        for (code, name) in SKU_NAMES {
            assert_eq!(resolve(code), Some(*name), "{} is shadowed", code);
        }
    }
}
