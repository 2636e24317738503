//! Flat-file adapter for the storage traits.
//!
//! Each record kind lives in its own text file, one encoded line per record.
//! Saving truncates and rewrites the whole file. Loading reads the whole file in
//! one go and recovers every line it can.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use registrar_common::config::{COURSE_FILE, Config, STUDENT_FILE};
use registrar_common::error::{RecordError, Result};
use registrar_common::records::course::Course;
use registrar_common::records::list::RecordList;
use registrar_common::records::student::Student;
use registrar_common::records::Identified;
use registrar_common::roll::RollCounter;
use registrar_common::store::{CourseStore, StudentStore};

use crate::codec;

/// Everything a load recovered from one file, plus the lines it had to skip.
#[derive(Debug)]
pub struct Loaded<T> {
    pub records: RecordList<T>,
    pub skipped: Vec<SkippedLine>,
}

/// A non-blank line that did not decode, with its 1-based line number.
#[derive(Debug)]
pub struct SkippedLine {
    pub line_no: usize,
    pub error: RecordError,
}

pub struct FlatFileStore {
    student_path: PathBuf,
    course_path: PathBuf,
}

impl FlatFileStore {
    /// Uses the standard record file names inside `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            student_path: dir.join(STUDENT_FILE),
            course_path: dir.join(COURSE_FILE),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self {
            student_path: cfg.student_path(),
            course_path: cfg.course_path(),
        }
    }

    pub fn student_path(&self) -> &Path {
        &self.student_path
    }

    pub fn course_path(&self) -> &Path {
        &self.course_path
    }

    /// Reads the student file and reports each skipped line instead of logging it.
    pub fn recover_students(&self, rolls: &mut RollCounter) -> Result<Loaded<Student>> {
        read_records(&self.student_path, "student", |line| {
            codec::decode_student(line, rolls)
        })
    }

    pub fn recover_courses(&self) -> Result<Loaded<Course>> {
        read_records(&self.course_path, "course", codec::decode_course)
    }
}

impl StudentStore for FlatFileStore {
    fn save_students(&self, students: &RecordList<Student>) -> Result<()> {
        write_records(&self.student_path, students, codec::encode_student)?;
        info!("Student records saved to {}", self.student_path.display());
        Ok(())
    }

    fn load_students(&self, rolls: &mut RollCounter) -> Result<RecordList<Student>> {
        let loaded = self.recover_students(rolls)?;
        report_skipped(&self.student_path, &loaded.skipped);
        info!("Student records loaded. Total: {}", loaded.records.count());
        Ok(loaded.records)
    }
}

impl CourseStore for FlatFileStore {
    fn save_courses(&self, courses: &RecordList<Course>) -> Result<()> {
        write_records(&self.course_path, courses, codec::encode_course)?;
        info!("Course records saved to {}", self.course_path.display());
        Ok(())
    }

    fn load_courses(&self) -> Result<RecordList<Course>> {
        let loaded = self.recover_courses()?;
        report_skipped(&self.course_path, &loaded.skipped);
        info!("Course records loaded. Total: {}", loaded.records.count());
        Ok(loaded.records)
    }
}

fn write_records<T>(path: &Path, records: &RecordList<T>, encode: fn(&T) -> String) -> Result<()>
where
    T: Identified,
{
    let file = File::create(path).map_err(|e| RecordError::storage(path, e))?;
    let mut writer = BufWriter::new(file);
    for record in records {
        writeln!(writer, "{}", encode(record)).map_err(|e| RecordError::storage(path, e))?;
    }
    writer.flush().map_err(|e| RecordError::storage(path, e))
}

fn read_records<T, F>(path: &Path, kind: &str, mut decode: F) -> Result<Loaded<T>>
where
    T: Identified,
    F: FnMut(&str) -> Result<T>,
{
    let mut loaded = Loaded {
        records: RecordList::new(),
        skipped: Vec::new(),
    };
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("{} file {} not found, starting empty", kind, path.display());
            return Ok(loaded);
        }
        Err(e) => return Err(RecordError::storage(path, e)),
    };

    let text = String::from_utf8_lossy(&bytes);
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match decode(line) {
            Ok(record) => loaded.records.add_silent(record),
            Err(error) => loaded.skipped.push(SkippedLine {
                line_no: idx + 1,
                error,
            }),
        }
    }
    Ok(loaded)
}

/// Lines that never looked like a record go to debug, the rest to warn.
fn report_skipped(path: &Path, skipped: &[SkippedLine]) {
    for SkippedLine { line_no, error } in skipped {
        if error.is_malformed_shape() {
            debug!("{}:{}: {}", path.display(), line_no, error);
        } else {
            warn!("{}:{}: {}", path.display(), line_no, error);
        }
    }
}
