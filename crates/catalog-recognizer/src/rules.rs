//! Rule-based recognizer
//!
//! Finds person, organization and facility names without a model, from
//! capitalization, honorifics and a few keyword lists. It is tuned for course
//! announcements and is far less accurate than a statistical recognizer, but
//! it needs no external service.

use crate::RecognizerError;
use catalog_domain::traits::EntityRecognizer;
use catalog_domain::{Entity, EntityLabel};

/// Titles that precede a person name and are never part of it
const HONORIFICS: &[&str] = &[
    "Dr.", "Dr", "Professor", "Prof.", "Prof", "Mr.", "Mrs.", "Ms.", "Mx.",
];

/// Lowercase words allowed between two capitalized words of one name
const CONNECTORS: &[&str] = &["of", "and", "the", "for", "de"];

/// Capitalized words that never belong to a name
const STOP_WORDS: &[&str] = &[
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
    "Mondays", "Tuesdays", "Wednesdays", "Thursdays", "Fridays", "Saturdays", "Sundays",
    "January", "February", "March", "April", "May", "June", "July", "August",
    "September", "October", "November", "December",
    "The", "This", "That", "These", "Those", "A", "An", "He", "She", "It", "They",
    "We", "You", "I", "In", "On", "At", "From", "To", "For", "And", "Or", "But",
    "Room", "Course", "Courses", "Module", "Modules", "Class", "Classes",
    "Students", "Lecture", "Lectures", "AM", "PM",
];

/// Words marking an institution
const ORGANIZATION_KEYWORDS: &[&str] = &[
    "University", "College", "Institute", "Academy", "Polytechnic", "Conservatory",
];

/// Words ending a building name
const FACILITY_KEYWORDS: &[&str] = &[
    "Hall", "Building", "Center", "Centre", "Complex", "House", "Laboratory", "Lab",
    "Library", "School", "Auditorium", "Pavilion", "Annex", "Tower", "Gymnasium",
];

/// Rule-based entity recognizer
#[derive(Debug, Clone, Default)]
pub struct RuleRecognizer;

/// A whitespace-delimited token with its surrounding punctuation removed
#[derive(Debug, Clone, Copy)]
struct Token<'a> {
    /// Token as written, minus leading punctuation
    raw: &'a str,
    /// Token without surrounding punctuation
    word: &'a str,
    start: usize,
    end: usize,
    /// Trailing punctuation closes any name in progress
    closes: bool,
}

impl<'a> Token<'a> {
    fn is_honorific(&self) -> bool {
        HONORIFICS.contains(&self.raw.trim_end_matches([',', ';', ':']))
    }

    fn is_capitalized(&self) -> bool {
        let mut chars = self.word.chars();
        chars.next().is_some_and(char::is_uppercase)
            && self.word.chars().all(|c| c.is_alphabetic() || c == '-' || c == '\'' || c == '.')
            && !STOP_WORDS.contains(&self.word)
    }

    fn is_connector(&self) -> bool {
        CONNECTORS.contains(&self.word)
    }
}

impl RuleRecognizer {
    /// Create a new rule-based recognizer
    pub fn new() -> Self {
        Self
    }

    fn tokenize(text: &str) -> Vec<Token<'_>> {
        text.split_whitespace()
            .filter_map(|piece| {
                let offset = piece.as_ptr() as usize - text.as_ptr() as usize;
                let raw = piece.trim_start_matches(|c: char| !c.is_alphanumeric());
                let word = raw.trim_end_matches(|c: char| !c.is_alphanumeric());
                if word.is_empty() {
                    return None;
                }
                let start = offset + (piece.len() - raw.len());
                let trailing = &raw[word.len()..];
                Some(Token {
                    raw,
                    word,
                    start,
                    end: start + word.len(),
                    closes: !trailing.is_empty(),
                })
            })
            .collect()
    }

    /// Group tokens into candidate names, remembering whether a title preceded each
    fn runs<'t, 'a>(tokens: &'t [Token<'a>]) -> Vec<(&'t [Token<'a>], bool)> {
        let mut runs = Vec::new();
        let mut i = 0;
        let mut titled = false;

        while i < tokens.len() {
            let token = &tokens[i];
            if token.is_honorific() {
                titled = true;
                i += 1;
                continue;
            }
            if !token.is_capitalized() {
                titled = false;
                i += 1;
                continue;
            }

            let start = i;
            let mut end = i + 1;
            while end < tokens.len() && !tokens[end - 1].closes {
                let next = &tokens[end];
                if next.is_capitalized() && !next.is_honorific() {
                    end += 1;
                } else if next.is_connector()
                    && !next.closes
                    && tokens.get(end + 1).is_some_and(|t| t.is_capitalized() && !t.is_honorific())
                {
                    end += 2;
                } else {
                    break;
                }
            }

            runs.push((&tokens[start..end], titled));
            titled = false;
            i = end;
        }

        runs
    }

    fn classify(run: &[Token<'_>], titled: bool) -> Option<EntityLabel> {
        let has_connector = run.iter().any(Token::is_connector);
        let last = run.last()?;

        if run.iter().any(|t| ORGANIZATION_KEYWORDS.contains(&t.word)) {
            Some(EntityLabel::Organization)
        } else if FACILITY_KEYWORDS.contains(&last.word) {
            Some(EntityLabel::Facility)
        } else if titled || (!has_connector && (2..=3).contains(&run.len())) {
            Some(EntityLabel::Person)
        } else {
            None
        }
    }
}

impl EntityRecognizer for RuleRecognizer {
    type Error = RecognizerError;

    fn recognize(&self, text: &str) -> Result<Vec<Entity>, Self::Error> {
        let tokens = Self::tokenize(text);

        let entities = Self::runs(&tokens)
            .into_iter()
            .filter_map(|(run, titled)| {
                let label = Self::classify(run, titled)?;
                let start = run.first()?.start;
                let end = run.last()?.end;
                Some(Entity::new(&text[start..end], label, start, end))
            })
            .collect();

        Ok(entities)
    }

    fn name(&self) -> &str {
        "rules"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recognize(text: &str) -> Vec<Entity> {
        RuleRecognizer::new().recognize(text).unwrap()
    }

    #[test]
    fn test_titled_person() {
        let entities = recognize("Dr. Jane Smith will teach the class");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].text, "Jane Smith");
        assert_eq!(entities[0].label, EntityLabel::Person);
        assert_eq!(entities[0].start, 4);
    }

    #[test]
    fn test_untitled_person() {
        let entities = recognize("Jane Smith will teach the class");
        assert_eq!(entities[0].text, "Jane Smith");
        assert_eq!(entities[0].label, EntityLabel::Person);
    }

    #[test]
    fn test_titled_single_name() {
        let entities = recognize("Taught by Professor Turing this year");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].text, "Turing");
        assert_eq!(entities[0].label, EntityLabel::Person);
    }

    #[test]
    fn test_organization_with_connector() {
        let entities = recognize("Offered by the University of Michigan, Ann Arbor.");
        assert_eq!(entities[0].text, "University of Michigan");
        assert_eq!(entities[0].label, EntityLabel::Organization);
    }

    #[test]
    fn test_facility_stops_at_punctuation() {
        let text = "Lectures are held in Baker Hall. Labs follow.";
        let entities = recognize(text);
        assert_eq!(entities[0].text, "Baker Hall");
        assert_eq!(entities[0].label, EntityLabel::Facility);
        assert_eq!(&text[entities[0].start..entities[0].end], "Baker Hall");
    }

    #[test]
    fn test_weekdays_are_not_names() {
        let entities = recognize("CS-101 meets Monday and Wednesday from 9:00 AM to 10:30 AM");
        assert!(entities.is_empty());
    }

    #[test]
    fn test_quoted_titles_are_ignored() {
        let entities = recognize("He teaches \"Intro to AI\" and \"Data Structures\"");
        assert!(entities.iter().all(|e| e.label != EntityLabel::Organization));
    }

    #[test]
    fn test_offsets_account_for_leading_punctuation() {
        let text = "(Stanford University)";
        let entities = recognize(text);
        assert_eq!(entities[0].start, 1);
        assert_eq!(&text[entities[0].start..entities[0].end], "Stanford University");
    }

    #[test]
    fn test_multiple_entities_in_order() {
        let entities = recognize("Professor Alan Turing teaches at Stanford University in Gates Building");
        let labels: Vec<_> = entities.iter().map(|e| e.label.clone()).collect();
        assert_eq!(
            labels,
            vec![EntityLabel::Person, EntityLabel::Organization, EntityLabel::Facility]
        );
    }
}
