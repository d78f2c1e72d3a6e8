//! Entity-based extractors
//!
//! Pure functions over a document's text and its recognized entities. The
//! entity list is computed once per document by the assembler and shared by
//! every function here.

use catalog_domain::{Entity, EntityLabel};

/// Title prefixes recognized in front of person names, with their output form
const TITLES: &[(&str, &str)] = &[("Dr.", "Dr."), ("Professor", "Prof.")];

/// The whitespace-delimited token right before byte offset `start`
///
/// # Examples
///
/// ```
/// use catalog_extractor::entities::preceding_token;
///
/// assert_eq!(preceding_token("Dr. Jane Smith", 4), Some("Dr."));
/// assert_eq!(preceding_token("Jane Smith", 0), None);
/// ```
pub fn preceding_token(text: &str, start: usize) -> Option<&str> {
    text.get(..start)?.split_whitespace().next_back()
}

/// First organization entity naming a university
///
/// The entity text must contain "university" (any case) and have more than
/// one token, so a bare "University" never qualifies.
pub fn university_name(entities: &[Entity]) -> Option<String> {
    entities
        .iter()
        .filter(|e| e.is(&EntityLabel::Organization))
        .find(|e| e.text.to_lowercase().contains("university") && e.token_count() > 1)
        .map(|e| e.text.clone())
}

/// Person entities introduced by a title, rewritten with the title prefix
///
/// `Dr. Jane Smith` gives `Dr.Jane Smith`, `Professor Alan Turing` gives
/// `Prof.Alan Turing`. Untitled persons are dropped.
pub fn professor_names(text: &str, entities: &[Entity]) -> Vec<String> {
    entities
        .iter()
        .filter(|e| e.is(&EntityLabel::Person))
        .filter_map(|e| {
            let token = preceding_token(text, e.start)?;
            TITLES
                .iter()
                .find(|(title, _)| token.contains(title))
                .map(|(_, prefix)| format!("{}{}", prefix, e.text))
        })
        .collect()
}

/// Text of every facility entity, in document order
pub fn facility_names(entities: &[Entity]) -> Vec<String> {
    entities
        .iter()
        .filter(|e| e.is(&EntityLabel::Facility))
        .map(|e| e.text.clone())
        .collect()
}
