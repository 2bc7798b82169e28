//! Render model for the registrations table.
//!
//! [`TableView`] is a disposable view derived from stored records: a list of
//! display rows plus whether the "no records" message is showing. The
//! [`html`] and [`text`] modules turn it into output.

pub mod html;
pub mod text;

use crate::record::StudentRecord;

/// Display strings for one table row.
///
/// Values are unescaped; each renderer applies its own escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// Student's full name.
    pub full_name: String,
    /// Enrollment number.
    pub enrollment_no: String,
    /// Branch code.
    pub branch: String,
    /// Semester with ordinal suffix, e.g. `5th`.
    pub semester: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
}

impl From<&StudentRecord> for DisplayRow {
    fn from(record: &StudentRecord) -> Self {
        Self {
            full_name: record.full_name.clone(),
            enrollment_no: record.enrollment_no.clone(),
            branch: record.branch.clone(),
            semester: ordinal(&record.semester),
            email: record.email.clone(),
            phone: record.phone.clone(),
        }
    }
}

/// The table region and its empty-state message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    rows: Vec<DisplayRow>,
    empty: bool,
}

impl Default for TableView {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            empty: true,
        }
    }
}

impl TableView {
    /// Create an empty view showing the empty-state message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a view from a record sequence.
    #[must_use]
    pub fn from_records(records: &[StudentRecord]) -> Self {
        let mut view = Self::new();
        for record in records {
            view.push_record(record);
        }
        view.set_empty(records.is_empty());
        view
    }

    /// Remove every row. The empty state is left as it is.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Append a row for `record`.
    pub fn push_record(&mut self, record: &StudentRecord) {
        self.rows.push(DisplayRow::from(record));
    }

    /// Show the empty-state message and hide the table, or the reverse.
    pub fn set_empty(&mut self, is_empty: bool) {
        self.empty = is_empty;
    }

    /// Rows in display order.
    #[must_use]
    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    /// Whether the "no records" message is showing.
    #[must_use]
    pub fn is_empty_state_visible(&self) -> bool {
        self.empty
    }

    /// Whether the table is showing.
    #[must_use]
    pub fn is_table_visible(&self) -> bool {
        !self.empty
    }
}

/// Add an English ordinal suffix to a numeric string.
///
/// Semesters one to three read `1st`, `2nd` and `3rd`, not `1th`.
/// Non-numeric input is returned unchanged.
#[must_use]
pub fn ordinal(value: &str) -> String {
    let Ok(n) = value.parse::<u32>() else {
        return value.to_string();
    };
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{value}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(name: &str, semester: &str) -> StudentRecord {
        StudentRecord {
            id: 1,
            full_name: name.to_string(),
            enrollment_no: "EN2024001".to_string(),
            branch: "CSE".to_string(),
            semester: semester.to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_ordinals() {
        let cases = [
            ("1", "1st"),
            ("2", "2nd"),
            ("3", "3rd"),
            ("4", "4th"),
            ("5", "5th"),
            ("8", "8th"),
            ("11", "11th"),
            ("12", "12th"),
            ("13", "13th"),
            ("21", "21st"),
            ("22", "22nd"),
            ("0", "0th"),
        ];
        for (input, expected) in cases {
            assert_eq!(ordinal(input), expected);
        }
    }

    #[test]
    fn test_ordinal_non_numeric() {
        assert_eq!(ordinal("final"), "final");
        assert_eq!(ordinal(""), "");
        assert_eq!(ordinal("-1"), "-1");
    }

    #[test]
    fn test_display_row_from_record() {
        let row = DisplayRow::from(&record("Asha Rao", "5"));
        assert_eq!(row.full_name, "Asha Rao");
        assert_eq!(row.enrollment_no, "EN2024001");
        assert_eq!(row.branch, "CSE");
        assert_eq!(row.semester, "5th");
        assert_eq!(row.email, "asha@example.com");
        assert_eq!(row.phone, "9876543210");
    }

    #[test]
    fn test_early_semesters_use_proper_suffixes() {
        let semesters: Vec<String> = ["1", "2", "3", "5"]
            .iter()
            .map(|s| DisplayRow::from(&record("Asha Rao", s)).semester)
            .collect();
        assert_eq!(semesters, vec!["1st", "2nd", "3rd", "5th"]);
    }

    #[test]
    fn test_new_view_shows_empty_state() {
        let view = TableView::new();
        assert!(view.is_empty_state_visible());
        assert!(!view.is_table_visible());
        assert!(view.rows().is_empty());
    }

    #[test]
    fn test_from_records_keeps_order() {
        let view = TableView::from_records(&[record("A", "1"), record("B", "2")]);
        let names: Vec<&str> = view.rows().iter().map(|r| r.full_name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert!(view.is_table_visible());
        assert!(!view.is_empty_state_visible());
    }

    #[test]
    fn test_from_no_records() {
        let view = TableView::from_records(&[]);
        assert!(view.is_empty_state_visible());
        assert!(!view.is_table_visible());
    }

    #[test]
    fn test_toggle_empty_state() {
        let mut view = TableView::new();
        view.set_empty(false);
        assert!(view.is_table_visible());
        view.set_empty(true);
        assert!(view.is_empty_state_visible());
    }

    #[test]
    fn test_clear_keeps_empty_flag() {
        let mut view = TableView::from_records(&[record("A", "1")]);
        view.clear();
        assert!(view.rows().is_empty());
        assert!(view.is_table_visible());
    }
}
