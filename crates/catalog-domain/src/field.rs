//! Field module - the nine columns of the dataset and their raw values

use std::fmt;

/// Separator used to collapse multi-valued fields into one string
pub const DEFAULT_SEPARATOR: &str = ", ";

/// One of the nine fixed columns of an extraction record
///
/// The declaration order is the column order of every dataset, table and
/// report produced from the records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Name of the university, single-valued
    UniversityName,
    /// Course codes such as `CS-101`
    CourseCode,
    /// Double-quoted course titles
    CourseName,
    /// Titled professor names
    ProfessorName,
    /// Room numbers such as `Room 204B`
    RoomNumber,
    /// Building names
    BuildingName,
    /// Times and time ranges
    CourseTiming,
    /// Weekdays and weekday pairs
    CourseSchedule,
    /// Module list, single-valued
    Modules,
}

impl Field {
    /// All fields in column order
    pub const ALL: [Field; 9] = [
        Field::UniversityName,
        Field::CourseCode,
        Field::CourseName,
        Field::ProfessorName,
        Field::RoomNumber,
        Field::BuildingName,
        Field::CourseTiming,
        Field::CourseSchedule,
        Field::Modules,
    ];

    /// Dataset column name
    pub fn column_name(&self) -> &'static str {
        match self {
            Field::UniversityName => "University Name",
            Field::CourseCode => "Course Code",
            Field::CourseName => "Course Name",
            Field::ProfessorName => "Professor Name",
            Field::RoomNumber => "Room Number",
            Field::BuildingName => "Building Name",
            Field::CourseTiming => "Course Timing",
            Field::CourseSchedule => "Course Schedule",
            Field::Modules => "Modules",
        }
    }

    /// Position of the column in a row
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Column names in order
    pub fn column_names() -> [&'static str; 9] {
        Self::ALL.map(|f| f.column_name())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// Raw output of a field extractor
///
/// Sequence order is order of appearance in the text; duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldValue {
    /// Nothing found
    #[default]
    Absent,

    /// Single-valued field
    Single(String),

    /// Multi-valued field, possibly empty
    Many(Vec<String>),
}

impl FieldValue {
    /// Build a single value from an optional string
    pub fn from_option(value: Option<String>) -> Self {
        value.map_or(FieldValue::Absent, FieldValue::Single)
    }

    /// Whether normalizing this value yields the empty string
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Absent => true,
            FieldValue::Single(s) => s.is_empty(),
            FieldValue::Many(values) => values.iter().all(String::is_empty),
        }
    }

    /// Collapse the value into its canonical string form
    ///
    /// Sequences are joined with `separator`; absent and empty sequences
    /// become the empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalog_domain::FieldValue;
    ///
    /// let value = FieldValue::Many(vec!["CS-101".into(), "MATH-201".into()]);
    /// assert_eq!(value.normalize(", "), "CS-101, MATH-201");
    /// assert_eq!(FieldValue::Absent.normalize(", "), "");
    /// ```
    pub fn normalize(&self, separator: &str) -> String {
        match self {
            FieldValue::Absent => String::new(),
            FieldValue::Single(s) => s.clone(),
            FieldValue::Many(values) => values.join(separator),
        }
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        FieldValue::Many(values)
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        FieldValue::from_option(value)
    }
}
