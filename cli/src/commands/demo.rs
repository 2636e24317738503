//! The fixed records walkthrough: courses and seat limits, members and roll
//! numbers, both enrollment paths, then a save and reload through the flat files.

use tracing::{error, info};

use registrar_common::config::Config;
use registrar_common::error::RecordError;
use registrar_common::records::course::Course;
use registrar_common::records::faculty::Faculty;
use registrar_common::records::list::RecordList;
use registrar_common::records::{Identified, Member, RecordId};
use registrar_core::{FlatFileStore, Registry};

use crate::terminal::print;

const MATHS: RecordId = 101;
const DATA_STRUCTURES: RecordId = 201;
const ALICE: RecordId = 5001;
const BOB: RecordId = 5002;
const DR_CHEN: RecordId = 7001;

pub fn demo(cfg: &Config) -> anyhow::Result<()> {
    let mut registry = Registry::new();

    courses(&mut registry, cfg)?;
    members(&mut registry, cfg)?;
    enrollment(&mut registry, cfg)?;

    let store = FlatFileStore::from_config(cfg);
    persistence(&mut registry, &store, cfg);
    Ok(())
}

fn courses(registry: &mut Registry, cfg: &Config) -> anyhow::Result<()> {
    print::header("courses and seat limits", cfg.quiet);

    registry.open_course(Course::new(MATHS, "Advanced Mathematics", 40));
    registry.open_course(Course::with_default_capacity(DATA_STRUCTURES, "Data Structures & Algos"));

    print::print_status(registry.course(DATA_STRUCTURES)?.to_string());
    print::aligned_line("Total courses", registry.courses().count().to_string());

    let course = registry.course_mut(DATA_STRUCTURES)?;
    while !course.is_full() {
        course.increment_enrollment()?;
    }
    print::aligned_line("CS enrollment", course.enrolled().to_string());

    if let Err(e) = course.increment_enrollment() {
        error!("Caught: {}", e);
    }
    Ok(())
}

fn members(registry: &mut Registry, cfg: &Config) -> anyhow::Result<()> {
    print::header("members", cfg.quiet);

    registry.admit_student("Alice Smith", ALICE)?;
    registry.admit_student("Bob Johnson", BOB)?;
    registry.hire(Faculty::new("Dr. Chen", DR_CHEN, "Computer Science"));

    print::aligned_line("Total students", registry.rolls().issued().to_string());

    let showcase: Vec<&dyn Member> = registry
        .members()
        .filter(|member| [ALICE, DR_CHEN].contains(&member.id()))
        .collect();
    for (idx, member) in showcase.into_iter().enumerate() {
        print::member_tree(idx, member);
    }
    Ok(())
}

fn enrollment(registry: &mut Registry, cfg: &Config) -> anyhow::Result<()> {
    print::header("enrollment", cfg.quiet);

    registry.enroll_by_id(ALICE, MATHS)?;
    registry.enroll(BOB, MATHS)?;
    match registry.enroll(BOB, DATA_STRUCTURES) {
        Ok(_) => {}
        Err(e @ RecordError::CourseFull { .. }) => error!("Enrollment error: {}", e),
        Err(e) => return Err(e.into()),
    }
    registry.assign_course(DR_CHEN, MATHS)?;

    if let Some(chen) = registry.faculty().find(DR_CHEN) {
        for course in chen.resolve_courses(registry.courses()) {
            print::aligned_line("Teaches", course.title().to_string());
        }
    }
    Ok(())
}

fn persistence(registry: &mut Registry, store: &FlatFileStore, cfg: &Config) {
    print::header("record files", cfg.quiet);

    let saved = registry
        .save_students(store)
        .and_then(|()| registry.save_courses(store));
    if let Err(e) = saved {
        error!("File error: {}", e);
    }

    print::header("reloading students", cfg.quiet);

    let loaded = registry.load_students(store).unwrap_or_else(|e| {
        error!("File error: {}", e);
        RecordList::new()
    });
    print::record_list(&loaded);

    if let Some(found) = loaded.find(ALICE) {
        info!("Found record for ID {}: {}", found.id(), found.name());
    }
}
