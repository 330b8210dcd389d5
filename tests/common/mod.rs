#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use runqueue::{Runqueue, RunqueueKind, TimeSum};

fn fixture_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests")
}

/// Read a command script from `tests/scripts/<name>`.
pub fn load_script(name: &str) -> String {
    let path = fixture_root().join("scripts").join(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("script {:?} not found", path))
}

pub fn assert_snapshot(name: &str, actual: &str) {
    let path = fixture_root().join("snapshots").join(name);
    if std::env::var("RUNQUEUE_UPDATE_SNAPSHOTS").is_ok() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create snapshot directory");
        }
        fs::write(&path, actual).expect("write snapshot");
        return;
    }

    let expected =
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("snapshot {:?} not found", path));
    if normalize(&expected) != normalize(actual) {
        panic!(
            "Snapshot mismatch for {:?}. Set RUNQUEUE_UPDATE_SNAPSHOTS=1 to regenerate.\nExpected:\n{}\nActual:\n{}",
            path,
            expected,
            actual
        );
    }
}

fn normalize(input: &str) -> String {
    input.replace("\r\n", "\n")
}

/// Enqueue `entries` in order into a fresh queue of `kind`.
pub fn queue_with(kind: RunqueueKind, entries: &[(&str, u64)]) -> Box<dyn Runqueue> {
    let mut queue = kind.build();
    for &(label, vt) in entries {
        queue.enqueue(label, vt);
    }
    queue
}

/// Output of `print_all_processes` as a string.
pub fn printed(queue: &dyn Runqueue) -> String {
    let mut out = Vec::new();
    queue
        .print_all_processes(&mut out)
        .expect("writing to a Vec cannot fail");
    String::from_utf8(out).expect("labels are UTF-8")
}

/// Check the partition law for every queued process.
pub fn assert_partition(queue: &dyn Runqueue) {
    let total = queue.total_time();
    for process in queue.processes() {
        let before = queue
            .preceding_process_time(&process.label)
            .expect("queued process has a preceding time");
        let after = queue
            .succeeding_process_time(&process.label)
            .expect("queued process has a succeeding time");
        assert_eq!(
            before + TimeSum::from(process.vt) + after,
            total,
            "{}: partition law broken at {}",
            queue.kind(),
            process
        );
    }
}
