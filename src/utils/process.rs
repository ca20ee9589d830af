use camino::Utf8Path;
use std::path::PathBuf;
use sysinfo::System;

pub struct ProcessChecker;

impl ProcessChecker {
    /// True if any live process was started from one of `targets`.
    /// Targets that do not exist on disk can't be running and are skipped.
    pub fn is_running(sys: &mut System, targets: &[&Utf8Path]) -> bool {
        let canonical: Vec<PathBuf> = targets
            .iter()
            .filter_map(|t| dunce::canonicalize(t).ok())
            .collect();
        if canonical.is_empty() {
            return false;
        }

        sys.refresh_processes();

        sys.processes().values().any(|p| {
            p.exe()
                .map(|exe| canonical.iter().any(|target| exe == target.as_path()))
                .unwrap_or(false)
        })
    }
}
