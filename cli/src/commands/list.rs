use colored::*;

use registrar_common::config::Config;
use registrar_core::{FlatFileStore, Registry};

use crate::rprint;
use crate::terminal::{colors, format, print};

pub fn list(cfg: &Config) -> anyhow::Result<()> {
    let store = FlatFileStore::from_config(cfg);
    let registry = Registry::open(&store)?;

    print::header("students", cfg.quiet);
    if registry.students().is_empty() {
        print::no_results("students");
    }
    for (idx, student) in registry.students().iter().enumerate() {
        print::member_tree(idx, student);
        if idx + 1 != registry.students().count() {
            rprint!();
        }
    }

    print::header("courses", cfg.quiet);
    if registry.courses().is_empty() {
        print::no_results("courses");
    }
    for course in registry.courses() {
        print::print_status(format::course_summary(course));
    }

    print_summary(&registry, cfg);
    Ok(())
}

fn print_summary(registry: &Registry, cfg: &Config) {
    let students: ColoredString = format!("{} students", registry.students().count()).bold().green();
    let courses: ColoredString = format!("{} courses", registry.courses().count()).bold().yellow();
    let output: ColoredString = format!("Loaded {students} and {courses}").color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output.to_string());
        }
        _ => print::print_status(output.to_string()),
    }
}
