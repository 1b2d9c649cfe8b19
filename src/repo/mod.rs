pub mod user;
pub mod task;
pub mod author;
pub mod book;

pub use user::*;
pub use task::*;
pub use author::*;
pub use book::*;

use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;
use anyhow::{Context, Result};

/// Append one record line to a flat file, creating it if needed
///
/// A file whose last line lacks its newline gets one first, so the new
/// record never merges into the previous one.
pub(crate) fn append_line(path: &Path, line: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .read(true)
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;

    let len = file.metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?
        .len();
    let mut record = String::with_capacity(line.len() + 2);
    if len > 0 {
        let mut last = [0u8; 1];
        file.seek(SeekFrom::Start(len - 1))
            .and_then(|_| file.read_exact(&mut last))
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        if last[0] != b'\n' {
            log::warn!("{} did not end with a newline; adding one", path.display());
            record.push('\n');
        }
    }
    record.push_str(line);
    record.push('\n');

    file.write_all(record.as_bytes())
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_append_line_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("records.txt");

        append_line(&path, "one").unwrap();
        append_line(&path, "two").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_append_line_after_unterminated_line() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("records.txt");
        std::fs::write(&path, "one").unwrap();

        append_line(&path, "two").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }
}
