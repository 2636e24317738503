use std::path::PathBuf;

pub const STUDENT_FILE: &str = "student_records.txt";
pub const COURSE_FILE: &str = "course_records.txt";

pub struct Config {
    /// Directory holding the student and course record files.
    pub data_dir: PathBuf,
    /// Quiet level. Anything above 0 drops the decorative headers.
    pub quiet: u8,
    pub no_color: bool,
}

impl Config {
    pub fn student_path(&self) -> PathBuf {
        self.data_dir.join(STUDENT_FILE)
    }

    pub fn course_path(&self) -> PathBuf {
        self.data_dir.join(COURSE_FILE)
    }
}
