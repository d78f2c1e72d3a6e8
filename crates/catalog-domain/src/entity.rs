//! Entity module - labeled spans returned by a recognizer

use std::fmt;

/// Label attached to a recognized entity
///
/// Only the labels the extractors care about get their own variant; anything
/// else a recognizer emits is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityLabel {
    /// A person (`PERSON`)
    Person,

    /// A company, agency or institution (`ORG`)
    Organization,

    /// A building, airport, bridge and so on (`FAC`)
    Facility,

    /// Any other label
    Other(String),
}

impl EntityLabel {
    /// Parse a conventional NER tag
    ///
    /// # Examples
    ///
    /// ```
    /// use catalog_domain::EntityLabel;
    ///
    /// assert_eq!(EntityLabel::parse("ORG"), EntityLabel::Organization);
    /// assert_eq!(EntityLabel::parse("fac"), EntityLabel::Facility);
    /// assert_eq!(EntityLabel::parse("GPE"), EntityLabel::Other("GPE".to_string()));
    /// ```
    pub fn parse(tag: &str) -> Self {
        match tag.to_ascii_uppercase().as_str() {
            "PERSON" | "PER" => EntityLabel::Person,
            "ORG" | "ORGANIZATION" => EntityLabel::Organization,
            "FAC" | "FACILITY" => EntityLabel::Facility,
            _ => EntityLabel::Other(tag.to_string()),
        }
    }

    /// Get the conventional tag for this label
    pub fn as_str(&self) -> &str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Organization => "ORG",
            EntityLabel::Facility => "FAC",
            EntityLabel::Other(tag) => tag,
        }
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recognized entity
///
/// `start` and `end` are byte offsets into the document text, so
/// `&text[start..end] == entity.text` for any well-formed recognizer output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// Surface text of the entity
    pub text: String,

    /// Entity label
    pub label: EntityLabel,

    /// Byte offset of the first character
    pub start: usize,

    /// Byte offset one past the last character
    pub end: usize,
}

impl Entity {
    /// Create a new entity
    pub fn new(text: impl Into<String>, label: EntityLabel, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            label,
            start,
            end,
        }
    }

    /// Number of whitespace-separated tokens in the entity text
    pub fn token_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Check the entity label
    pub fn is(&self, label: &EntityLabel) -> bool {
        &self.label == label
    }
}
