//! Document module - the input unit of extraction

/// An immutable block of raw text
///
/// The `source` is only a label for logs and fault reports (a file path,
/// `path:line`, an object key). Extraction never looks at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    source: String,
    text: String,
}

impl Document {
    /// Create a new document
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
        }
    }

    /// Where the document came from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The raw text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the text in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the text is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_accessors() {
        let doc = Document::new("data/a.txt", "CS-101 meets Monday");
        assert_eq!(doc.source(), "data/a.txt");
        assert_eq!(doc.text(), "CS-101 meets Monday");
        assert_eq!(doc.len(), 19);
        assert!(!doc.is_empty());
    }
}
