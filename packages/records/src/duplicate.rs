//! Client-side uniqueness scan run before every write.
//!
//! Two keys must be unique across the collection:
//!
//! | Key | Fields |
//! |-----|--------|
//! | name + roll | firstName, lastName, class, section, rollNumber |
//! | roll | class, section, rollNumber |
//!
//! The record being edited is excluded by id so saving it unchanged does not
//! conflict with itself. Values are compared exactly as stored.
//!
//! The scan runs against a freshly fetched snapshot and the write is a second
//! round-trip, so two concurrent submits can both pass the check.

use crate::models::{RecordId, StudentFields, StudentRecord};

/// Notice shown for either kind of conflict.
pub const DUPLICATE_MESSAGE: &str = "A student with the same First Name, Last Name or same Class, Section, and Roll Number already exists.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Conflict {
    /// Same name and the same class/section/roll number.
    SameNameAndRoll,
    /// Same class/section/roll number under a different name.
    SameRoll,
}

fn same_roll(a: &StudentFields, b: &StudentFields) -> bool {
    a.class == b.class && a.section == b.section && a.roll_number == b.roll_number
}

fn same_name(a: &StudentFields, b: &StudentFields) -> bool {
    a.first_name == b.first_name && a.last_name == b.last_name
}

/// Scan `existing` for a record that `candidate` would duplicate.
pub fn find_conflict(
    existing: &[StudentRecord],
    candidate: &StudentFields,
    editing: Option<&RecordId>,
) -> Option<Conflict> {
    let others = || {
        existing
            .iter()
            .filter(move |record| Some(&record.id) != editing)
    };

    if others().any(|r| same_name(&r.fields, candidate) && same_roll(&r.fields, candidate)) {
        return Some(Conflict::SameNameAndRoll);
    }
    if others().any(|r| same_roll(&r.fields, candidate)) {
        return Some(Conflict::SameRoll);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(first: &str, last: &str, class: &str, section: &str, roll: &str) -> StudentFields {
        StudentFields {
            first_name: first.into(),
            last_name: last.into(),
            class: class.into(),
            section: section.into(),
            roll_number: roll.into(),
            ..Default::default()
        }
    }

    fn existing() -> Vec<StudentRecord> {
        vec![
            StudentRecord::new(RecordId::new("a"), fields("Asha", "Rao", "10", "A", "5")),
            StudentRecord::new(RecordId::new("b"), fields("Ben", "Ito", "10", "B", "5")),
        ]
    }

    #[test]
    fn test_same_roll_different_name_conflicts() {
        let candidate = fields("Cara", "Lee", "10", "A", "5");
        assert_eq!(
            find_conflict(&existing(), &candidate, None),
            Some(Conflict::SameRoll)
        );
    }

    #[test]
    fn test_same_name_and_roll_conflicts() {
        let candidate = fields("Asha", "Rao", "10", "A", "5");
        assert_eq!(
            find_conflict(&existing(), &candidate, None),
            Some(Conflict::SameNameAndRoll)
        );
    }

    #[test]
    fn test_edited_record_excluded() {
        let candidate = fields("Asha", "Rao", "10", "A", "5");
        let id = RecordId::new("a");
        assert_eq!(find_conflict(&existing(), &candidate, Some(&id)), None);

        // Moving record b onto a's roll number still conflicts.
        let candidate = fields("Ben", "Ito", "10", "A", "5");
        let id = RecordId::new("b");
        assert_eq!(
            find_conflict(&existing(), &candidate, Some(&id)),
            Some(Conflict::SameRoll)
        );
    }

    #[test]
    fn test_same_name_in_other_section_is_fine() {
        let candidate = fields("Asha", "Rao", "10", "C", "5");
        assert_eq!(find_conflict(&existing(), &candidate, None), None);
    }

    #[test]
    fn test_comparison_is_exact() {
        let candidate = fields("Cara", "Lee", "10", "a", "5");
        assert_eq!(find_conflict(&existing(), &candidate, None), None);
    }
}
