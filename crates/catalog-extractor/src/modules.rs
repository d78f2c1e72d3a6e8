//! Module list extractor
//!
//! Two templates are tried in turn, case-insensitively, and every match of
//! both contributes to one flat list:
//!
//! 1. "modules include A, B and C." captures the list after the verb
//! 2. "Module 3 covers ... ." keeps the whole numbered sentence
//!
//! Each captured text is split on commas and the pieces are trimmed.

use regex::Regex;
use std::sync::LazyLock;

static MODULE_TEMPLATES: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)\b(?:modules?|courses?)\s*(?:include|consist of|are)\s*([\w\s,]+?)(?:\s*[.\n])")
            .expect("module list template"),
        Regex::new(r"(?i)\b(?:module|course)\s*(?:[1-6])\s*[\w\s,]+(?:[A-Za-z\s]+)(?:\s*[.\n])")
            .expect("numbered module template"),
    ]
});

/// Every module list item, in template-then-match order
///
/// A template with a capture group contributes the group; one without
/// contributes the whole match. Empty pieces between commas are kept.
pub fn module_items(text: &str) -> Vec<String> {
    MODULE_TEMPLATES
        .iter()
        .flat_map(|template| template.captures_iter(text))
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(0)))
        .flat_map(|m| m.as_str().split(',').map(|piece| piece.trim().to_string()))
        .collect()
}

/// The module list joined with `separator`, or `None` when nothing matched
///
/// # Examples
///
/// ```
/// use catalog_extractor::modules::modules;
///
/// let text = "The modules include Algebra, Geometry, Statistics.";
/// assert_eq!(modules(text, ", "), Some("Algebra, Geometry, Statistics".to_string()));
/// assert_eq!(modules("No list here", ", "), None);
/// ```
pub fn modules(text: &str, separator: &str) -> Option<String> {
    let items = module_items(text);
    if items.is_empty() {
        None
    } else {
        Some(items.join(separator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_template() {
        assert_eq!(
            module_items("Core courses are Databases, Networks\nElectives vary."),
            vec!["Databases", "Networks"]
        );
    }

    #[test]
    fn test_consist_of_case_insensitive() {
        assert_eq!(
            module_items("MODULES CONSIST OF Ethics,  Law ."),
            vec!["Ethics", "Law"]
        );
    }

    #[test]
    fn test_numbered_template_keeps_whole_match() {
        assert_eq!(
            module_items("Module 2 covers sorting, searching and graphs."),
            vec!["Module 2 covers sorting", "searching and graphs."]
        );
    }

    #[test]
    fn test_both_templates_concatenate() {
        let text = "Modules include Logic, Sets.\nModule 1 introduces proofs.";
        assert_eq!(
            module_items(text),
            vec!["Logic", "Sets", "Module 1 introduces proofs."]
        );
    }

    #[test]
    fn test_numbered_out_of_range_ignored() {
        assert!(module_items("Module 9 is optional.").is_empty());
    }

    #[test]
    fn test_unterminated_list_ignored() {
        assert!(module_items("modules include Algebra, Geometry").is_empty());
    }

    #[test]
    fn test_absent_when_empty() {
        assert_eq!(modules("", ", "), None);
    }
}
