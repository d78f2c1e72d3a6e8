//! Pattern extractors
//!
//! Each extractor maps document text to the ordered list of substrings its
//! pattern matches. No match gives an empty list, which means "unknown".

use regex::Regex;
use std::sync::LazyLock;

/// Text between double quotes; group 1 is the title without the quotes
static COURSE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)""#).expect("course name pattern"));

/// Two to four capitals, a hyphen and three digits, as a whole word
static COURSE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{2,4}-\d{3}\b").expect("course code pattern"));

/// A weekday, optionally plural, optionally paired with a second one by "and"
static SCHEDULE_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday)s?\b(?:\s+and\s+(?:Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday)s?)?",
    )
    .expect("schedule day pattern")
});

/// `H:MM AM`, optionally extended to a range with `to H:MM PM`
static COURSE_TIMING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d{1,2}:\d{2}\s?(?:AM|PM)(?:\s?to\s?\d{1,2}:\d{2}\s?(?:AM|PM))?\b")
        .expect("course timing pattern")
});

/// "Room" followed by digits and an optional letter
static ROOM_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bRoom\s?\d+[A-Za-z]?\b").expect("room number pattern"));

/// Capitalized words ending in a building-type noun
static BUILDING_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:[A-Z][a-z]+(?:\s|and|-))+(?:Hall|Building|Center|Complex|House|Laboratory|Lab|Library|School)\b",
    )
    .expect("building name pattern")
});

fn find_all(pattern: &Regex, text: &str) -> Vec<String> {
    pattern
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Double-quoted course titles, without the quotes
///
/// Only the quoted text is kept: the surrounding `"` characters are never
/// part of a Course Name value, so `"Intro to AI"` yields `Intro to AI`.
///
/// # Examples
///
/// ```
/// use catalog_extractor::patterns::course_names;
///
/// let names = course_names(r#"He teaches "Intro to AI" and "Data Structures""#);
/// assert_eq!(names, vec!["Intro to AI", "Data Structures"]);
/// ```
pub fn course_names(text: &str) -> Vec<String> {
    COURSE_NAME
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Course codes such as `CS-101`
pub fn course_codes(text: &str) -> Vec<String> {
    find_all(&COURSE_CODE, text)
}

/// Weekdays; "Monday and Wednesday" is a single match
pub fn schedule_days(text: &str) -> Vec<String> {
    find_all(&SCHEDULE_DAY, text)
}

/// Times and time ranges; "9:00 AM to 10:30 AM" is a single match
pub fn course_timings(text: &str) -> Vec<String> {
    find_all(&COURSE_TIMING, text)
}

/// Room numbers such as `Room 204B`
pub fn room_numbers(text: &str) -> Vec<String> {
    find_all(&ROOM_NUMBER, text)
}

/// Building names found by pattern alone
///
/// The assembler falls back to facility entities when this is empty.
pub fn building_names(text: &str) -> Vec<String> {
    find_all(&BUILDING_NAME, text)
}
