use std::{
    fs, io,
    path::{Path, PathBuf},
};

use boundary_core::TextSink;

/// Delivers exports as files inside a directory.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl TextSink for FileSink {
    fn deliver(&mut self, name: &str, text: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.dir.join(name), text)
    }
}
