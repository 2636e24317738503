//! # Record Line Codec
//!
//! Converts records to and from single pipe-delimited text lines.
//!
//! ```text
//! student: id|name|roll|course,course,...
//! course:  id|title|capacity|enrolled
//! ```
//!
//! Nothing is escaped. A `|` inside a name, or a `,` inside the course list,
//! produces a line that will not read back as written.

use std::num::ParseIntError;
use std::str::FromStr;

use registrar_common::error::{CorruptReason, RecordError, Result};
use registrar_common::records::course::Course;
use registrar_common::records::student::Student;
use registrar_common::records::{Identified, Member, RecordId, RollNumber};
use registrar_common::roll::RollCounter;

pub const FIELD_DELIMITER: &str = "|";
pub const LIST_DELIMITER: &str = ",";

const STUDENT_MIN_FIELDS: usize = 3;
const COURSE_MIN_FIELDS: usize = 4;

pub fn encode_student(student: &Student) -> String {
    let courses: Vec<String> = student.courses().iter().map(|id| id.to_string()).collect();
    format!(
        "{}{d}{}{d}{}{d}{}",
        student.id(),
        student.name(),
        student.roll(),
        courses.join(LIST_DELIMITER),
        d = FIELD_DELIMITER
    )
}

pub fn encode_course(course: &Course) -> String {
    format!(
        "{}{d}{}{d}{}{d}{}",
        course.id(),
        course.title(),
        course.capacity(),
        course.enrolled(),
        d = FIELD_DELIMITER
    )
}

/// Rebuilds a student from one stored line.
///
/// `rolls` is only touched once the whole line has parsed, so a rejected line
/// never moves the counter.
pub fn decode_student(line: &str, rolls: &mut RollCounter) -> Result<Student> {
    let fields = split_fields(line, FIELD_DELIMITER);
    if fields.len() < STUDENT_MIN_FIELDS {
        return Err(too_few(line, STUDENT_MIN_FIELDS, fields.len()));
    }

    let corrupt = |reason| RecordError::corrupt(line, reason);
    let id: RecordId = parse_field(fields[0], "id").map_err(corrupt)?;
    let roll = parse_field(fields[2], "roll")
        .and_then(check_roll)
        .map_err(corrupt)?;
    let course_ids = match fields.get(3) {
        Some(raw) if !raw.is_empty() => split_fields(raw, LIST_DELIMITER)
            .into_iter()
            .map(|token| parse_field::<RecordId>(token, "course id"))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(corrupt)?,
        _ => Vec::new(),
    };

    let mut student = Student::with_roll(fields[1], id, roll, rolls)?;
    for course_id in course_ids {
        student.enroll_id(course_id);
    }
    Ok(student)
}

/// Rebuilds a course from one stored line.
pub fn decode_course(line: &str) -> Result<Course> {
    let fields = split_fields(line, FIELD_DELIMITER);
    if fields.len() < COURSE_MIN_FIELDS {
        return Err(too_few(line, COURSE_MIN_FIELDS, fields.len()));
    }

    let corrupt = |reason| RecordError::corrupt(line, reason);
    let id: RecordId = parse_field(fields[0], "id").map_err(corrupt)?;
    let capacity: u32 = parse_field(fields[2], "capacity").map_err(corrupt)?;
    let enrolled: u32 = parse_field(fields[3], "enrolled").map_err(corrupt)?;
    Course::restore(id, fields[1], capacity, enrolled).map_err(corrupt)
}

/// Splits like a stream tokenizer: a single trailing empty token is dropped,
/// so `a|b|` has two fields.
fn split_fields<'a>(raw: &'a str, delimiter: &str) -> Vec<&'a str> {
    let mut fields: Vec<&str> = raw.split(delimiter).collect();
    if fields.last() == Some(&"") {
        fields.pop();
    }
    fields
}

fn parse_field<T>(raw: &str, field: &'static str) -> std::result::Result<T, CorruptReason>
where
    T: FromStr<Err = ParseIntError>,
{
    raw.trim()
        .parse()
        .map_err(|source| CorruptReason::BadInteger { field, source })
}

/// A stored roll must leave the counter room to move past it.
fn check_roll(roll: RollNumber) -> std::result::Result<RollNumber, CorruptReason> {
    if RollCounter::can_follow(roll) {
        Ok(roll)
    } else {
        Err(CorruptReason::RollOutOfRange { roll })
    }
}

fn too_few(line: &str, expected: usize, found: usize) -> RecordError {
    RecordError::corrupt(line, CorruptReason::TooFewFields { expected, found })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
