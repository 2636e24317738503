//! # Registry Service
//!
//! Owns the registrar's in-memory state and exposes its use cases.
//!
//! The registry holds three lists (students, courses, faculty) and the roll
//! counter that numbers students. Persistence goes through the storage traits in
//! [`registrar_common::store`], so any adapter can back it.

use tracing::info;

use registrar_common::error::{RecordError, RecordKind, Result};
use registrar_common::records::course::Course;
use registrar_common::records::faculty::Faculty;
use registrar_common::records::list::RecordList;
use registrar_common::records::student::{Enrollment, Student};
use registrar_common::records::{Member, RecordId, RollNumber};
use registrar_common::roll::RollCounter;
use registrar_common::store::{CourseStore, RecordStore, StudentStore};

#[derive(Debug, Default)]
pub struct Registry {
    students: RecordList<Student>,
    courses: RecordList<Course>,
    faculty: RecordList<Faculty>,
    rolls: RollCounter,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from whatever `store` holds. Faculty are not persisted
    /// and start empty.
    pub fn open(store: &dyn RecordStore) -> Result<Self> {
        let mut registry = Self::new();
        registry.students = store.load_students(&mut registry.rolls)?;
        registry.courses = store.load_courses()?;
        Ok(registry)
    }

    pub fn students(&self) -> &RecordList<Student> {
        &self.students
    }

    pub fn courses(&self) -> &RecordList<Course> {
        &self.courses
    }

    pub fn faculty(&self) -> &RecordList<Faculty> {
        &self.faculty
    }

    pub fn rolls(&self) -> &RollCounter {
        &self.rolls
    }

    pub fn open_course(&mut self, course: Course) {
        self.courses.add(course);
    }

    /// Admits a new student under the next roll number and returns it.
    pub fn admit_student(&mut self, name: impl Into<String>, id: RecordId) -> Result<RollNumber> {
        let student = Student::new(name, id, &mut self.rolls)?;
        let roll = student.roll();
        info!("Student {} created with Roll No: {}", student.name(), roll);
        self.students.add(student);
        Ok(roll)
    }

    pub fn hire(&mut self, member: Faculty) {
        self.faculty.add(member);
    }

    pub fn student(&self, id: RecordId) -> Result<&Student> {
        self.students.find(id).ok_or(RecordError::NotFound {
            kind: RecordKind::Student,
            id,
        })
    }

    pub fn course(&self, id: RecordId) -> Result<&Course> {
        self.courses.find(id).ok_or(RecordError::NotFound {
            kind: RecordKind::Course,
            id,
        })
    }

    pub fn course_mut(&mut self, id: RecordId) -> Result<&mut Course> {
        self.courses.find_mut(id).ok_or(RecordError::NotFound {
            kind: RecordKind::Course,
            id,
        })
    }

    /// Enrolls through the live course record, taking a seat.
    ///
    /// Fails with [`RecordError::CourseFull`] when no seat is left.
    pub fn enroll(&mut self, student_id: RecordId, course_id: RecordId) -> Result<Enrollment> {
        let student = self.students.find_mut(student_id).ok_or(RecordError::NotFound {
            kind: RecordKind::Student,
            id: student_id,
        })?;
        let course = self.courses.find_mut(course_id).ok_or(RecordError::NotFound {
            kind: RecordKind::Course,
            id: course_id,
        })?;

        let outcome = student.enroll_in(course)?;
        match outcome {
            Enrollment::Enrolled => info!(
                "{} successfully enrolled in {} (via record)",
                student.name(),
                course_id
            ),
            Enrollment::AlreadyEnrolled => info!(
                "{} is already enrolled in course ID {}",
                student.name(),
                course_id
            ),
        }
        Ok(outcome)
    }

    /// Enrolls by bare course id. The course does not have to exist and its
    /// capacity is not checked.
    pub fn enroll_by_id(&mut self, student_id: RecordId, course_id: RecordId) -> Result<Enrollment> {
        let student = self.students.find_mut(student_id).ok_or(RecordError::NotFound {
            kind: RecordKind::Student,
            id: student_id,
        })?;

        let outcome = student.enroll_id(course_id);
        match outcome {
            Enrollment::Enrolled => info!(
                "{} enrolled in course ID {} (via ID)",
                student.name(),
                course_id
            ),
            Enrollment::AlreadyEnrolled => info!(
                "{} is already enrolled in course ID {}",
                student.name(),
                course_id
            ),
        }
        Ok(outcome)
    }

    /// Records that a faculty member teaches a course. Returns `false` if it
    /// was already assigned.
    pub fn assign_course(&mut self, faculty_id: RecordId, course_id: RecordId) -> Result<bool> {
        let course = self.courses.find(course_id).ok_or(RecordError::NotFound {
            kind: RecordKind::Course,
            id: course_id,
        })?;
        let member = self.faculty.find_mut(faculty_id).ok_or(RecordError::NotFound {
            kind: RecordKind::Faculty,
            id: faculty_id,
        })?;

        let assigned = member.assign_course(course);
        if assigned {
            info!("{} assigned course {}", member.name(), course_id);
        }
        Ok(assigned)
    }

    /// Every person known to the registry, students first.
    pub fn members(&self) -> impl Iterator<Item = &dyn Member> {
        self.students
            .iter()
            .map(|s| s as &dyn Member)
            .chain(self.faculty.iter().map(|f| f as &dyn Member))
    }

    pub fn save_students(&self, store: &dyn StudentStore) -> Result<()> {
        store.save_students(&self.students)
    }

    pub fn save_courses(&self, store: &dyn CourseStore) -> Result<()> {
        store.save_courses(&self.courses)
    }

    /// Loads the stored students into a new list, keeping this registry's roll
    /// counter ahead of every loaded roll number.
    pub fn load_students(&mut self, store: &dyn StudentStore) -> Result<RecordList<Student>> {
        store.load_students(&mut self.rolls)
    }
}
