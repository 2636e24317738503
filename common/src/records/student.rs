use tracing::debug;

use crate::error::Result;
use crate::records::course::Course;
use crate::records::{Detail, Details, Identified, Member, RecordId, RollNumber};
use crate::roll::RollCounter;

/// Outcome of an enrollment request that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enrollment {
    Enrolled,
    AlreadyEnrolled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    id: RecordId,
    name: String,
    roll: RollNumber,
    courses: Vec<RecordId>,
}

impl Student {
    /// Creates a student with the next roll number from `rolls`.
    pub fn new(name: impl Into<String>, id: RecordId, rolls: &mut RollCounter) -> Result<Self> {
        Ok(Self {
            id,
            name: name.into(),
            roll: rolls.issue()?,
            courses: Vec::new(),
        })
    }

    /// Creates a student with a known roll number, moving `rolls` past it.
    pub fn with_roll(
        name: impl Into<String>,
        id: RecordId,
        roll: RollNumber,
        rolls: &mut RollCounter,
    ) -> Result<Self> {
        rolls.observe(roll)?;
        Ok(Self {
            id,
            name: name.into(),
            roll,
            courses: Vec::new(),
        })
    }

    pub fn roll(&self) -> RollNumber {
        self.roll
    }

    /// Enrolled course ids in enrollment order.
    pub fn courses(&self) -> &[RecordId] {
        &self.courses
    }

    pub fn is_enrolled(&self, course_id: RecordId) -> bool {
        self.courses.contains(&course_id)
    }

    /// Records an enrollment by bare course id. No seat is taken and capacity is
    /// not consulted.
    pub fn enroll_id(&mut self, course_id: RecordId) -> Enrollment {
        if self.is_enrolled(course_id) {
            debug!("{} is already enrolled in course {}", self.name, course_id);
            return Enrollment::AlreadyEnrolled;
        }
        self.courses.push(course_id);
        debug!("{} enrolled in course {} (by id)", self.name, course_id);
        Enrollment::Enrolled
    }

    /// Enrolls in a live course, taking one of its seats.
    ///
    /// On [`RecordError::CourseFull`](crate::error::RecordError::CourseFull) the
    /// student's course list is left as it was.
    pub fn enroll_in(&mut self, course: &mut Course) -> Result<Enrollment> {
        let course_id = course.id();
        if self.is_enrolled(course_id) {
            debug!("{} is already enrolled in course {}", self.name, course_id);
            return Ok(Enrollment::AlreadyEnrolled);
        }
        course.increment_enrollment()?;
        self.courses.push(course_id);
        debug!("{} enrolled in course {} (by reference)", self.name, course_id);
        Ok(Enrollment::Enrolled)
    }
}

impl Identified for Student {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Details for Student {
    fn heading(&self) -> &'static str {
        "Student Details"
    }

    fn details(&self) -> Vec<Detail> {
        vec![
            ("ID", self.id.to_string()),
            ("Roll No", self.roll.to_string()),
            ("Name", self.name.clone()),
            ("Enrolled Courses", self.courses.len().to_string()),
        ]
    }
}

impl Member for Student {
    fn name(&self) -> &str {
        &self.name
    }
}
