#![cfg(test)]
use registrar_common::error::RecordError;
use registrar_common::records::course::Course;
use registrar_common::records::faculty::Faculty;
use registrar_common::records::{Identified, Member};
use registrar_common::roll::RollCounter;
use registrar_common::store::{CourseStore, StudentStore};
use registrar_core::{FlatFileStore, Registry};

use crate::utils::DataDir;

fn populated_registry() -> Registry {
    let mut registry = Registry::new();
    registry.open_course(Course::new(101, "Advanced Mathematics", 40));
    registry.open_course(Course::with_default_capacity(201, "Data Structures & Algos"));
    registry.admit_student("Alice Smith", 5001).unwrap();
    registry.admit_student("Bob Johnson", 5002).unwrap();
    registry.hire(Faculty::new("Dr. Chen", 7001, "Computer Science"));
    registry.enroll_by_id(5001, 101).unwrap();
    registry.enroll(5002, 101).unwrap();
    registry.enroll(5002, 201).unwrap();
    registry
}

/// Everything saved by one registry comes back in a fresh one, in order.
#[test]
fn save_then_open_restores_students_and_courses() {
    let data = DataDir::new();
    let registry = populated_registry();
    registry.save_students(&data.store).unwrap();
    registry.save_courses(&data.store).unwrap();

    assert_eq!(
        data.read_students(),
        "5001|Alice Smith|1001|101\n5002|Bob Johnson|1002|101,201\n"
    );

    let reopened = Registry::open(&data.store).unwrap();
    assert_eq!(reopened.students(), registry.students());
    assert_eq!(reopened.courses(), registry.courses());
    assert!(reopened.faculty().is_empty());
    assert_eq!(reopened.course(101).unwrap().enrolled(), 1);
}

#[test]
fn reopened_registry_issues_rolls_after_loaded_ones() {
    let data = DataDir::new();
    data.write_students("1|Old Timer|1450|\n2|Newer|1003|\n");

    let mut reopened = Registry::open(&data.store).unwrap();
    let roll = reopened.admit_student("Fresh Face", 3).unwrap();
    assert_eq!(roll, 1451);
}

#[test]
fn one_good_line_and_one_bad_id_loads_one_record() {
    let data = DataDir::new();
    data.write_students("5001|Alice Smith|1001|101,102\nnot-a-number|Mallory|1002|\n");

    let mut rolls = RollCounter::new();
    let loaded = data.store.recover_students(&mut rolls).unwrap();
    assert_eq!(loaded.records.count(), 1);
    let alice = loaded.records.find(5001).unwrap();
    assert_eq!(alice.name(), "Alice Smith");
    assert_eq!(alice.courses(), &[101, 102]);

    assert_eq!(loaded.skipped.len(), 1);
    let skipped = &loaded.skipped[0];
    assert_eq!(skipped.line_no, 2);
    assert!(matches!(
        &skipped.error,
        RecordError::CorruptRecord { line, .. } if line == "not-a-number|Mallory|1002|"
    ));

    let mut rolls = RollCounter::new();
    assert_eq!(data.store.load_students(&mut rolls).unwrap().count(), 1);
}

#[test]
fn nonexistent_files_load_empty() {
    let data = DataDir::new();
    let registry = Registry::open(&data.store).unwrap();
    assert!(registry.students().is_empty());
    assert!(registry.courses().is_empty());
    assert_eq!(registry.rolls().issued(), 0);
}

#[test]
fn loaded_file_keeps_line_order() {
    let data = DataDir::new();
    data.write_students("30|C|1003|\n\n10|A|1001|\n20|B|1002|\n");

    let mut rolls = RollCounter::new();
    let students = data.store.load_students(&mut rolls).unwrap();
    let ids: Vec<i32> = students.iter().map(Identified::id).collect();
    assert_eq!(ids, vec![30, 10, 20]);
}

#[test]
fn corrupt_course_lines_are_skipped() {
    let data = DataDir::new();
    data.write_courses("101|Advanced Mathematics|40|1\n201|Overbooked|1|2\n301|Short|3\nx|Bad|3|0\n");

    let courses = data.store.load_courses().unwrap();
    assert_eq!(courses.count(), 1);
    assert_eq!(courses.find(101).unwrap().enrolled(), 1);
}

#[test]
fn unwritable_destination_is_storage_unavailable() {
    let data = DataDir::new();
    let store = FlatFileStore::new(data.dir.path().join("missing").join("deeper"));
    let registry = populated_registry();

    let err = registry.save_students(&store).unwrap_err();
    assert!(matches!(err, RecordError::StorageUnavailable { .. }));
    let err = registry.save_courses(&store).unwrap_err();
    assert!(matches!(err, RecordError::StorageUnavailable { .. }));
}
