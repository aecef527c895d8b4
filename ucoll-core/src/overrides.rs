//! Rule override store
//!
//! Tailoring rules for locales the engine has no native data for. The rule
//! text is embedded at compile time and indexed on first access. Keys are
//! matched exactly; some are not language tags at all but select a script
//! variant (`new Newa`).

use std::collections::HashMap;
use std::sync::OnceLock;

/// Embedded rule text for one override locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleOverride {
    /// Locale identifier the override is registered under
    pub locale: &'static str,
    /// Human readable name of the language or script variant
    pub name: &'static str,
    /// Tailoring rules in engine rule syntax
    pub rules: &'static str,
}

macro_rules! embed_rules {
    ($locale:expr, $name:expr, $path:expr) => {
        RuleOverride {
            locale: $locale,
            name: $name,
            rules: include_str!($path),
        }
    };
}

const EMBEDDED: [RuleOverride; 3] = [
    embed_rules!("bo", "Tibetan", "../rules/bo.txt"),
    embed_rules!("new-Deva", "Newar (Devanagari)", "../rules/new-Deva.txt"),
    embed_rules!("new Newa", "Newar (Newa)", "../rules/new-Newa.txt"),
];

static OVERRIDES: OnceLock<HashMap<&'static str, RuleOverride>> = OnceLock::new();

fn overrides() -> &'static HashMap<&'static str, RuleOverride> {
    OVERRIDES.get_or_init(|| {
        EMBEDDED
            .iter()
            .map(|entry| (entry.locale, *entry))
            .collect()
    })
}

/// Look up the override registered for `locale`
pub fn lookup(locale: &str) -> Option<&'static RuleOverride> {
    overrides().get(locale)
}

/// Locale identifiers that have a rule override, in registration order
pub fn override_locales() -> Vec<&'static str> {
    EMBEDDED.iter().map(|entry| entry.locale).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_tibetan() {
        let entry = lookup("bo").expect("Tibetan override should exist");
        assert_eq!(entry.name, "Tibetan");
        assert!(entry.rules.starts_with("&ཀ"));
    }

    #[test]
    fn test_lookup_is_exact() {
        assert!(lookup("new Newa").is_some());
        assert!(lookup("new-Newa").is_none());
        assert!(lookup("BO").is_none());
        assert!(lookup("nb").is_none());
    }

    #[test]
    fn test_override_locales() {
        assert_eq!(override_locales(), vec!["bo", "new-Deva", "new Newa"]);
    }

    #[test]
    fn test_rules_are_not_empty() {
        for locale in override_locales() {
            let entry = lookup(locale).unwrap();
            assert!(!entry.rules.trim().is_empty(), "{locale} has no rules");
            assert!(entry.rules.contains('&'), "{locale} has no reset");
        }
    }
}
