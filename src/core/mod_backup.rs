use camino::Utf8Path;
use std::path::Path;
use tracing::debug;

use crate::models::error::SError;
use crate::models::mod_dto::SwapMode;
use crate::models::paths::backup_path;
use crate::utils::file::FileUtils;

/// Stashes `source` at `dest` (default: `source` + `.bak`).
/// Whatever already sits at `dest` is deleted first.
/// Paths are relative to `home`.
pub fn backup(
    home: &Utf8Path,
    source: &Utf8Path,
    dest: Option<&Utf8Path>,
    mode: SwapMode,
) -> Result<(), SError> {
    let dest = dest.map_or_else(|| backup_path(source), Utf8Path::to_path_buf);
    debug!(%source, %dest, ?mode, "creating backup");

    let from = home.join(source);
    if !from.exists() {
        return Err(SError::NotFound(format!("no original data found at {source}")));
    }
    let to = home.join(&dest);
    ensure_disjoint(&from, &to)?;
    swap(&from, &to, mode)
}

/// Restores `dest` from `source` (default: `dest` + `.bak`).
/// Whatever already sits at `dest` is deleted first; if `source` is missing
/// `dest` is left untouched.
/// Paths are relative to `home`.
pub fn recover(
    home: &Utf8Path,
    dest: &Utf8Path,
    source: Option<&Utf8Path>,
    mode: SwapMode,
) -> Result<(), SError> {
    let source = source.map_or_else(|| backup_path(dest), Utf8Path::to_path_buf);
    debug!(%source, %dest, ?mode, "recovering from backup");

    let from = home.join(&source);
    if !from.exists() {
        return Err(SError::NotFound(format!("no backup found at {source}")));
    }
    let to = home.join(dest);
    ensure_disjoint(&from, &to)?;
    swap(&from, &to, mode)
}

/// Removes a file or directory tree under `home`.
pub fn delete_path(home: &Utf8Path, path: &Utf8Path) -> Result<(), SError> {
    FileUtils::delete_path(&home.join(path))
}

/// Refuses pairs where one side is the other or sits inside it, since the
/// destination is deleted before anything is copied.
fn ensure_disjoint(from: &Utf8Path, to: &Utf8Path) -> Result<(), SError> {
    let resolved_to = to
        .parent()
        .and_then(|parent| dunce::canonicalize(parent).ok())
        .zip(to.file_name())
        .map(|(parent, name)| parent.join(name));
    let resolved_from = dunce::canonicalize(from).ok();

    fn overlaps(a: &Path, b: &Path) -> bool {
        a.starts_with(b) || b.starts_with(a)
    }

    let clash = overlaps(from.as_std_path(), to.as_std_path())
        || matches!((&resolved_from, &resolved_to), (Some(a), Some(b)) if overlaps(a.as_path(), b.as_path()));

    if clash {
        return Err(SError::ParseError(format!(
            "source {from} and destination {to} overlap"
        )));
    }
    Ok(())
}

fn swap(from: &Utf8Path, to: &Utf8Path, mode: SwapMode) -> Result<(), SError> {
    if to.exists() || to.is_symlink() {
        FileUtils::delete_path(to)?;
    }

    match mode {
        SwapMode::Copy => FileUtils::copy_path(from, to),
        SwapMode::Move => FileUtils::rename_path(from, to),
    }
}
