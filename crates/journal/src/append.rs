use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Opens `path` for append (creating it if missing), writes `content`, and
/// closes it again. Existing content is never truncated.
pub fn append_to(path: &Path, content: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(content.as_bytes())?;
    tracing::debug!("Appended {} bytes to {:?}", content.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_existing_content() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("log.txt");
        std::fs::write(&path, "first\n").unwrap();

        append_to(&path, "second\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_append_fails_without_directory() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("missing").join("log.txt");
        assert!(append_to(&path, "x").is_err());
    }
}
