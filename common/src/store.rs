//! Storage contracts for records.
//!
//! These are the outbound ports of the registrar: the core only talks to
//! storage through them, and adapters decide where the bytes go.

use crate::error::Result;
use crate::records::course::Course;
use crate::records::list::RecordList;
use crate::records::student::Student;
use crate::roll::RollCounter;

/// Persists and restores students.
pub trait StudentStore {
    /// Replaces whatever was stored with `students`, in list order.
    fn save_students(&self, students: &RecordList<Student>) -> Result<()>;

    /// Reads every recoverable student. Lines that cannot be recovered are
    /// skipped. `rolls` is moved past every loaded roll number.
    ///
    /// A store that was never written yields an empty list.
    fn load_students(&self, rolls: &mut RollCounter) -> Result<RecordList<Student>>;
}

/// Persists and restores courses.
pub trait CourseStore {
    fn save_courses(&self, courses: &RecordList<Course>) -> Result<()>;
    fn load_courses(&self) -> Result<RecordList<Course>>;
}

/// Anything that can hold both kinds of persisted record.
pub trait RecordStore: StudentStore + CourseStore {}

impl<T: StudentStore + CourseStore> RecordStore for T {}
