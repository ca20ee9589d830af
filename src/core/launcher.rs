use camino::Utf8Path;
use std::process::{Child, Command};
use tracing::info;

use crate::models::error::SError;

/// Starts the game without waiting for it, from its own install folder.
pub fn run_game(home: &Utf8Path, exe: &Utf8Path) -> Result<Child, SError> {
    let exe_path = home.join(exe);
    if !exe_path.is_file() {
        return Err(SError::NotFound(format!(
            "exe not found in predefined path {exe_path}"
        )));
    }

    info!(%exe_path, "launching game");
    Command::new(exe_path.as_std_path())
        .current_dir(home)
        .spawn()
        .map_err(|e| SError::Launch(e.to_string()))
}
