mod file;
mod key;
mod location;
mod source;

pub use file::SourceFile;
pub use key::SourceFileKey;
pub use location::Location;
pub use source::{Source, Sourced};
use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct SourceFiles {
    files: Vec<SourceFile>,
}

impl SourceFiles {
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    pub fn get(&self, key: SourceFileKey) -> &SourceFile {
        &self.files[key.0 as usize]
    }

    pub fn filename(&self, key: SourceFileKey) -> &str {
        self.get(key).filename()
    }

    pub fn add(&mut self, filename: PathBuf, content: String) -> SourceFileKey {
        let key = SourceFileKey(self.files.len().try_into().unwrap());
        self.files.push(SourceFile::new(filename, content));
        key
    }
}
