pub mod demo;
pub mod find;
pub mod list;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use registrar_common::records::RecordId;

#[derive(Parser)]
#[command(name = "registrar")]
#[command(about = "University records kept in flat files.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding student_records.txt and course_records.txt
    #[arg(long, global = true, default_value = ".")]
    pub data_dir: PathBuf,

    /// Drop decorative headers
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the records walkthrough and write both record files (default)
    #[command(alias = "d")]
    Demo,
    /// Show every stored student and course
    #[command(alias = "l")]
    List,
    /// Show the stored student with the given id
    #[command(alias = "f")]
    Find { id: RecordId },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
