use tracing::warn;

use registrar_common::config::Config;
use registrar_common::records::RecordId;
use registrar_common::roll::RollCounter;
use registrar_common::store::StudentStore;
use registrar_core::FlatFileStore;

use crate::terminal::print;

pub fn find(id: RecordId, cfg: &Config) -> anyhow::Result<()> {
    let store = FlatFileStore::from_config(cfg);
    let mut rolls = RollCounter::new();
    let students = store.load_students(&mut rolls)?;

    print::header(&format!("student {id}"), cfg.quiet);
    match students.find(id) {
        Some(student) => print::member_tree(0, student),
        None => {
            warn!("No student with ID {} in {}", id, store.student_path().display());
            print::no_results("student");
        }
    }
    Ok(())
}
