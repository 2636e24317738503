#![cfg(test)]
use std::fs;

use registrar_common::config::{COURSE_FILE, STUDENT_FILE};
use registrar_core::FlatFileStore;
use tempfile::TempDir;

/// A throwaway data directory and a store pointed at it.
pub struct DataDir {
    pub dir: TempDir,
    pub store: FlatFileStore,
}

impl DataDir {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let store = FlatFileStore::new(dir.path());
        Self { dir, store }
    }

    pub fn write_students(&self, content: &str) {
        fs::write(self.dir.path().join(STUDENT_FILE), content).expect("failed to seed students");
    }

    pub fn write_courses(&self, content: &str) {
        fs::write(self.dir.path().join(COURSE_FILE), content).expect("failed to seed courses");
    }

    pub fn read_students(&self) -> String {
        fs::read_to_string(self.dir.path().join(STUDENT_FILE)).expect("student file missing")
    }
}
