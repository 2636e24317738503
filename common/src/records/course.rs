use std::fmt;

use crate::error::{CorruptReason, RecordError, Result};
use crate::records::{Detail, Details, Identified, RecordId};

pub const DEFAULT_TITLE: &str = "Untitled Course";
pub const DEFAULT_CAPACITY: u32 = 30;

/// A course with a fixed number of seats.
///
/// The id is fixed at creation. `enrolled` never exceeds `capacity`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id: RecordId,
    title: String,
    capacity: u32,
    enrolled: u32,
}

impl Course {
    pub fn new(id: RecordId, title: impl Into<String>, capacity: u32) -> Self {
        Self {
            id,
            title: title.into(),
            capacity,
            enrolled: 0,
        }
    }

    pub fn with_default_capacity(id: RecordId, title: impl Into<String>) -> Self {
        Self::new(id, title, DEFAULT_CAPACITY)
    }

    pub fn untitled(id: RecordId) -> Self {
        Self::new(id, DEFAULT_TITLE, DEFAULT_CAPACITY)
    }

    /// Rebuilds a course with an existing enrollment count, as read from storage.
    pub fn restore(
        id: RecordId,
        title: impl Into<String>,
        capacity: u32,
        enrolled: u32,
    ) -> std::result::Result<Self, CorruptReason> {
        if enrolled > capacity {
            return Err(CorruptReason::OverCapacity { enrolled, capacity });
        }
        Ok(Self {
            id,
            title: title.into(),
            capacity,
            enrolled,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn enrolled(&self) -> u32 {
        self.enrolled
    }

    pub fn is_full(&self) -> bool {
        self.enrolled >= self.capacity
    }

    /// Takes one seat, or fails with [`RecordError::CourseFull`] leaving the count untouched.
    pub fn increment_enrollment(&mut self) -> Result<()> {
        if self.is_full() {
            return Err(RecordError::CourseFull {
                course_id: self.id,
                capacity: self.capacity,
            });
        }
        self.enrolled += 1;
        Ok(())
    }
}

impl Identified for Course {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Details for Course {
    fn heading(&self) -> &'static str {
        "Course Details"
    }

    fn details(&self) -> Vec<Detail> {
        vec![
            ("Code", self.id.to_string()),
            ("Title", self.title.clone()),
            ("Enrollment", format!("{}/{}", self.enrolled, self.capacity)),
        ]
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Code: {} | Title: {} | Enrollment: {}/{}",
            self.id, self.title, self.enrolled, self.capacity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply() {
        let course = Course::untitled(7);
        assert_eq!(course.title(), DEFAULT_TITLE);
        assert_eq!(course.capacity(), DEFAULT_CAPACITY);
        assert_eq!(course.enrolled(), 0);
    }

    #[test]
    fn increment_stops_at_capacity() {
        let mut course = Course::new(201, "CS", 2);
        assert!(course.increment_enrollment().is_ok());
        assert!(course.increment_enrollment().is_ok());
        let err = course.increment_enrollment().unwrap_err();
        assert!(matches!(
            err,
            RecordError::CourseFull {
                course_id: 201,
                capacity: 2
            }
        ));
        assert_eq!(course.enrolled(), 2);
    }

    #[test]
    fn zero_capacity_is_always_full() {
        let mut course = Course::new(1, "Closed", 0);
        assert!(course.is_full());
        assert!(course.increment_enrollment().is_err());
        assert_eq!(course.enrolled(), 0);
    }

    #[test]
    fn restore_rejects_over_capacity() {
        let err = Course::restore(1, "X", 3, 4).unwrap_err();
        assert_eq!(
            err,
            CorruptReason::OverCapacity {
                enrolled: 4,
                capacity: 3
            }
        );
        assert!(Course::restore(1, "X", 3, 3).is_ok());
    }

    #[test]
    fn display_matches_summary_line() {
        let course = Course::with_default_capacity(201, "Data Structures & Algos");
        assert_eq!(
            course.to_string(),
            "Code: 201 | Title: Data Structures & Algos | Enrollment: 0/30"
        );
    }
}
