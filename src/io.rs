//! Writing rendered Markdown to files and writers.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::markdown::normalize_newlines;

/// Write `text` to `path` as UTF-8 with `\n` line endings.
///
/// Parent directories are created as needed. Returns the path written.
pub fn save_markdown(text: &str, path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, normalize_newlines(text).as_bytes())?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "saved markdown");
    Ok(path.to_path_buf())
}

/// Write `text` to any writer with `\n` line endings.
pub fn write_markdown<W: Write>(text: &str, writer: &mut W) -> Result<()> {
    writer.write_all(normalize_newlines(text).as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("out.md");

        let written = save_markdown("# Title\n", &path).unwrap();

        assert_eq!(written, path);
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Title\n");
    }

    #[test]
    fn test_save_normalizes_line_endings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.md");

        save_markdown("a\r\nb\rc\n", &path).unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"a\nb\nc\n");
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.md");

        save_markdown("first\n", &path).unwrap();
        save_markdown("second\n", &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
    }

    #[test]
    fn test_write_markdown_to_vec() {
        let mut buf = Vec::new();
        write_markdown("x\r\n", &mut buf).unwrap();
        assert_eq!(buf, b"x\n");
    }
}
