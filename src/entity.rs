//! Entity names as accepted by the generator.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::generator::GeneratorError;

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("identifier regex is valid")
});

// Strict and reserved keywords of the 2021 edition. The lower-case name becomes
// a module and file name, so it must not collide with any of them.
const RESERVED: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// The two spellings of an entity that every template receives.
///
/// `lower_name` is a whole-string case fold of `name`: `CarRental` becomes
/// `carrental`, not `car_rental`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntitySpec {
    name: String,
    lower_name: String,
}

impl EntitySpec {
    /// Validate `name` and derive its lower-case form.
    ///
    /// The name is used verbatim as a type name and must be a plain ASCII
    /// identifier starting with a letter.
    pub fn new(name: &str) -> Result<Self, GeneratorError> {
        if name.is_empty() {
            return Err(GeneratorError::InvalidEntityName {
                name: name.to_string(),
                reason: "name is empty".to_string(),
            });
        }
        if !IDENTIFIER.is_match(name) {
            return Err(GeneratorError::InvalidEntityName {
                name: name.to_string(),
                reason: "expected an ASCII letter followed by letters, digits or '_'".to_string(),
            });
        }

        let lower_name = name.to_ascii_lowercase();
        if RESERVED.contains(&lower_name.as_str()) {
            return Err(GeneratorError::InvalidEntityName {
                name: name.to_string(),
                reason: format!("'{lower_name}' is a reserved Rust keyword"),
            });
        }

        Ok(Self {
            name: name.to_string(),
            lower_name,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lower_name(&self) -> &str {
        &self.lower_name
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_lower_name_is_whole_string_fold() {
        let spec = EntitySpec::new("CarRental").unwrap();
        assert_eq!(spec.name(), "CarRental");
        assert_eq!(spec.lower_name(), "carrental");
    }

    #[test]
    fn test_simple_name() {
        let spec = EntitySpec::new("User").unwrap();
        assert_eq!(spec.lower_name(), "user");
    }

    #[test]
    fn test_name_is_kept_verbatim() {
        let spec = EntitySpec::new("rental_Item2").unwrap();
        assert_eq!(spec.name(), "rental_Item2");
        assert_eq!(spec.lower_name(), "rental_item2");
    }

    #[test]
    fn test_rejects_invalid_names() {
        for bad in ["", "1Car", "Car/Rental", "../etc", "Car Rental", "_Car", "Café", "Car-Rental"] {
            let err = EntitySpec::new(bad).unwrap_err();
            assert!(
                matches!(err, GeneratorError::InvalidEntityName { .. }),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_keywords_after_folding() {
        let err = EntitySpec::new("Type").unwrap_err();
        assert!(err.to_string().contains("reserved"));
        assert!(EntitySpec::new("Match").is_err());
        assert!(EntitySpec::new("Typed").is_ok());
    }
}
