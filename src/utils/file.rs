use crate::models::error::SError;
use camino::Utf8Path;
use std::fs;
use walkdir::WalkDir;

pub struct FileUtils;

impl FileUtils {
    /// Recursively copies a directory tree from source to destination.
    /// Creates all necessary directories and overwrites existing files.
    pub fn copy_recursive(src: &Utf8Path, dst: &Utf8Path) -> Result<(), SError> {
        fs::create_dir_all(dst)?;

        for entry in WalkDir::new(src) {
            let entry = entry?;
            let src_path = Utf8Path::from_path(entry.path()).ok_or_else(|| {
                SError::ParseError(format!("Invalid UTF-8 path: {:?}", entry.path()))
            })?;

            let rel_path = src_path.strip_prefix(src)?;
            let dst_path = dst.join(rel_path);

            if entry.file_type().is_dir() {
                fs::create_dir_all(&dst_path)?;
            } else {
                if let Some(parent) = dst_path.parent() {
                    if !parent.exists() {
                        fs::create_dir_all(parent)?;
                    }
                }
                fs::copy(src_path, &dst_path)?;
                Self::make_writable(dst_path.as_std_path())?;
            }
        }

        Ok(())
    }

    /// Copies a file or a whole directory tree to `dst`.
    /// Copied files are left writable even when the source is read-only.
    pub fn copy_path(src: &Utf8Path, dst: &Utf8Path) -> Result<(), SError> {
        if !src.exists() {
            return Err(SError::NotFound(format!("can't find path to be copied: {src}")));
        }

        if src.is_dir() {
            return Self::copy_recursive(src, dst);
        }

        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(src, dst)?;
        Self::make_writable(dst.as_std_path())?;
        Ok(())
    }

    /// Moves `src` to `dst`, falling back to copy + delete when rename is refused.
    pub fn rename_path(src: &Utf8Path, dst: &Utf8Path) -> Result<(), SError> {
        if !src.exists() {
            return Err(SError::NotFound(format!("can't find path to be renamed: {src}")));
        }

        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)?;
        }

        if fs::rename(src, dst).is_err() {
            Self::copy_path(src, dst)?;
            Self::delete_path(src)?;
        }
        Ok(())
    }

    /// Removes a file or a directory tree, clearing read-only flags first.
    pub fn delete_path(path: &Utf8Path) -> Result<(), SError> {
        let meta = match fs::symlink_metadata(path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SError::NotFound(format!("can't find path to be deleted: {path}")));
            }
            Err(e) => return Err(e.into()),
        };

        if meta.is_dir() {
            for entry in WalkDir::new(path) {
                Self::make_writable(entry?.path())?;
            }
            fs::remove_dir_all(path)?;
        } else {
            Self::make_writable(path.as_std_path())?;
            fs::remove_file(path)?;
        }
        Ok(())
    }

    #[allow(clippy::permissions_set_readonly_false)]
    fn make_writable(path: &std::path::Path) -> Result<(), SError> {
        let meta = fs::symlink_metadata(path)?;
        if meta.file_type().is_symlink() {
            return Ok(());
        }
        let mut perms = meta.permissions();
        if perms.readonly() {
            perms.set_readonly(false);
            fs::set_permissions(path, perms)?;
        }
        Ok(())
    }
}
