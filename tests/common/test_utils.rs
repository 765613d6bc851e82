#![allow(dead_code)]
use std::fs;
use std::io::Result as IoResult;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

/// Builds one cargo `compiler-message` JSON line with a single span.
pub fn compiler_message(level: &str, file: &str, line: u64, message: &str) -> String {
    format!(
        r#"{{"reason":"compiler-message","package_id":"demo 0.1.0","message":{{"level":"{}","message":"{}","code":null,"spans":[{{"file_name":"{}","line_start":{},"line_end":{},"is_primary":true}}],"children":[]}}}}"#,
        level, message, file, line, line
    )
}

/// A temporary directory holding JSON-lines fixture files.
pub struct Fixtures {
    /// When this is dropped, the directory and its contents are removed.
    pub temp_dir: TempDir,
}

impl Fixtures {
    pub fn new() -> IoResult<Self> {
        Ok(Fixtures {
            temp_dir: tempdir()?,
        })
    }

    /// Writes `lines` joined by newlines to `name` and returns its path.
    pub fn write(&self, name: &str, lines: &[String]) -> IoResult<PathBuf> {
        let path = self.temp_dir.path().join(name);
        let mut contents = lines.join("\n");
        contents.push('\n');
        fs::write(&path, contents)?;
        Ok(path)
    }
}
