#![cfg(test)]
use registrar_common::error::RecordError;
use registrar_common::records::course::Course;
use registrar_common::records::list::RecordList;
use registrar_common::records::student::{Enrollment, Student};
use registrar_common::records::Identified;
use registrar_common::roll::RollCounter;
use registrar_common::store::StudentStore;
use registrar_core::Registry;

use crate::utils::DataDir;

/// For every capacity, only that many by-reference enrollments succeed.
#[test]
fn capacity_bounds_reference_enrollments() {
    for capacity in 0..=6u32 {
        let mut registry = Registry::new();
        registry.open_course(Course::new(201, "CS", capacity));
        for id in 0..(capacity as i32 + 3) {
            registry.admit_student(format!("Student {id}"), id).unwrap();
        }

        let mut accepted = 0;
        let mut rejected = 0;
        for id in 0..(capacity as i32 + 3) {
            match registry.enroll(id, 201) {
                Ok(Enrollment::Enrolled) => accepted += 1,
                Err(RecordError::CourseFull { course_id: 201, .. }) => rejected += 1,
                other => panic!("unexpected enrollment outcome: {other:?}"),
            }
            assert!(registry.course(201).unwrap().enrolled() <= capacity);
        }

        assert_eq!(accepted, capacity, "capacity {capacity}");
        assert_eq!(rejected, 3, "capacity {capacity}");
        assert_eq!(registry.course(201).unwrap().enrolled(), capacity);
    }
}

#[test]
fn rejected_student_keeps_no_course_entry() {
    let mut registry = Registry::new();
    registry.open_course(Course::new(201, "CS", 1));
    registry.admit_student("Alice Smith", 5001).unwrap();
    registry.admit_student("Bob Johnson", 5002).unwrap();

    registry.enroll(5001, 201).unwrap();
    assert!(registry.enroll(5002, 201).is_err());
    assert!(!registry.student(5002).unwrap().is_enrolled(201));
}

#[test]
fn repeated_enrollment_through_both_paths_keeps_one_entry() {
    let mut registry = Registry::new();
    registry.open_course(Course::new(101, "Advanced Mathematics", 40));
    registry.admit_student("Alice Smith", 5001).unwrap();

    assert_eq!(registry.enroll(5001, 101).unwrap(), Enrollment::Enrolled);
    assert_eq!(registry.enroll_by_id(5001, 101).unwrap(), Enrollment::AlreadyEnrolled);
    assert_eq!(registry.enroll(5001, 101).unwrap(), Enrollment::AlreadyEnrolled);
    assert_eq!(registry.student(5001).unwrap().courses(), &[101]);
    assert_eq!(registry.course(101).unwrap().enrolled(), 1);
}

/// The loader enrolls by id, so a stored student may sit in a course the
/// capacity rules would have refused.
#[test]
fn loading_bypasses_capacity() {
    let data = DataDir::new();
    let mut rolls = RollCounter::new();
    let mut student = Student::new("Late Joiner", 9, &mut rolls).unwrap();
    let mut closed = Course::new(201, "CS", 0);
    assert!(student.enroll_in(&mut closed).is_err());
    assert_eq!(student.enroll_id(closed.id()), Enrollment::Enrolled);

    let mut students = RecordList::new();
    students.add_silent(student);
    data.store.save_students(&students).unwrap();

    let mut fresh = RollCounter::new();
    let loaded = data.store.load_students(&mut fresh).unwrap();
    assert!(loaded.find(9).unwrap().is_enrolled(201));
    assert_eq!(closed.enrolled(), 0);
}
