//! Init command implementation

use std::fs::{File, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use miette::{IntoDiagnostic, Result, miette};
use tracing::info;

use crate::config::Config;

const DEFAULT_CONFIG: &str = r#"{
  // Used when --format is absent and the file extension is unknown.
  "defaultFormat": "markdown",
  "output": "json",
  "compact": false,
  "markdown": {
    // drop, merge or keep
    "duplicateSiblings": "drop"
  }
}
"#;

pub fn run_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(Config::CONFIG_FILES[0]);
    write_config(&config_path, DEFAULT_CONFIG, force)?;
    info!("Created {}", config_path.display());
    Ok(())
}

/// Creates `path` holding `contents`.
///
/// An existing entry is only replaced with `force`. A symlink at `path` is
/// removed or refused, never written through.
fn write_config(path: &Path, contents: &str, force: bool) -> Result<()> {
    if force {
        match std::fs::remove_file(path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e).into_diagnostic(),
        }
    }

    let mut file = create_new(path).map_err(|e| match e.kind() {
        ErrorKind::AlreadyExists => {
            miette!("Config file already exists. Use --force to overwrite.")
        }
        _ => miette!("Failed to create {}: {}", path.display(), e),
    })?;
    file.write_all(contents.as_bytes()).into_diagnostic()
}

fn create_new(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.custom_flags(libc::O_NOFOLLOW);
    }

    options.open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::from_json(DEFAULT_CONFIG).unwrap();

        assert_eq!(config.default_format, Some(treeform_parser::Format::Markdown));
        assert!(!config.compact);
    }

    #[test]
    fn test_write_config_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".treeform.jsonc");

        write_config(&path, "{}", false).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_existing_file_needs_force() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".treeform.jsonc");
        fs::write(&path, "old").unwrap();

        let err = write_config(&path, "new", false).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "old");

        write_config(&path, "new", true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_target_is_never_written() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("target.txt");
        let path = dir.path().join(".treeform.jsonc");
        fs::write(&target, "keep").unwrap();
        std::os::unix::fs::symlink(&target, &path).unwrap();

        assert!(write_config(&path, "new", false).is_err());
        assert_eq!(fs::read_to_string(&target).unwrap(), "keep");

        write_config(&path, "new", true).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "keep");
        assert!(!fs::symlink_metadata(&path).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }
}
