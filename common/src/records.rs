//! # Record Models
//!
//! The entities kept by the registrar and the traits that let generic code
//! handle them.
//!
//! ## Entities
//! * [`student::Student`]: enrolled learner with an auto-assigned roll number.
//! * [`course::Course`]: a course with a fixed number of seats.
//! * [`faculty::Faculty`]: staff member teaching a set of courses (by id).
//!
//! ## Containers
//! * [`list::RecordList`]: insertion-ordered list searched by identifier.
//!
//! Students and faculty share the [`Member`] capability so they can be displayed
//! through a `&dyn Member` without knowing the concrete kind.

pub mod course;
pub mod faculty;
pub mod list;
pub mod student;

/// Primary identifier of any record. Assigned by the caller.
pub type RecordId = i32;

/// Secondary, sequential student identifier.
pub type RollNumber = i32;

/// A single labelled line of a record's rendered details.
pub type Detail = (&'static str, String);

pub trait Identified {
    fn id(&self) -> RecordId;
}

/// Renders a record as a heading plus labelled lines.
pub trait Details {
    fn heading(&self) -> &'static str;
    fn details(&self) -> Vec<Detail>;
}

/// People known to the registrar: an id, a name, and a way to describe themselves.
pub trait Member: Identified + Details {
    fn name(&self) -> &str;
}
