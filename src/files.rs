use std::fs;
use std::path::Path;

/// Ensure the directory for `path` exists. A path with an extension is
/// treated as a file and its parent is created instead.
pub fn with_dir(path: &Path) -> Result<(), String> {
    let dir = if path.extension().is_some() {
        path.parent().unwrap_or_else(|| Path::new("/"))
    } else {
        path
    };

    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| format!("Failed to create directory {}: {}", dir.display(), e))?;
    }
    Ok(())
}

/// Fresh-start semantics for a batch root: destroy whatever is there and
/// recreate it empty. Idempotent.
pub fn reset_dir(path: &Path) -> Result<(), String> {
    if path.exists() {
        fs::remove_dir_all(path).map_err(|e| format!("Failed to clear directory {}: {}", path.display(), e))?;
    }
    fs::create_dir_all(path).map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_reset_dir_clears_contents() {
        let root = PathBuf::from("test-render/reset_dir");
        reset_dir(&root).unwrap();
        fs::write(root.join("stale.wav"), b"x").unwrap();
        reset_dir(&root).unwrap();
        assert!(root.exists());
        assert!(!root.join("stale.wav").exists());
    }

    #[test]
    fn test_with_dir_uses_parent_for_files() {
        let file = PathBuf::from("test-render/with_dir/inner/sound.wav");
        with_dir(&file).unwrap();
        assert!(file.parent().unwrap().exists());
        assert!(!file.exists());
    }
}
