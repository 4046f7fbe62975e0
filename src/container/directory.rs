//! Containers over an unpacked copy of the corpus.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{member_stem, missing_member, Container, ZipContainer};
use crate::error::Result;

/// A directory standing in for an archive. Members are listed sorted by name.
#[derive(Debug, Clone)]
pub struct DirContainer {
    name: String,
    root: PathBuf,
}

impl DirContainer {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let root = path.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(std::io::Error::new(
                ErrorKind::NotFound,
                format!("not a directory: {}", root.display()),
            )
            .into());
        }
        let name = root
            .file_name()
            .and_then(|n| n.to_str())
            .map(member_stem)
            .unwrap_or_default()
            .to_string();
        Ok(Self { name, root })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }
}

impl Container for DirContainer {
    fn name(&self) -> &str {
        &self.name
    }

    fn members(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = fs::read_dir(&self.root)?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
            .collect();
        names.sort();
        Ok(names)
    }

    fn read(&mut self, member: &str) -> Result<Vec<u8>> {
        match fs::read(self.root.join(member)) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(missing_member(&self.name, member)),
            Err(e) => Err(e.into()),
        }
    }

    fn open_child(&mut self, member: &str) -> Result<Box<dyn Container>> {
        let path = self.root.join(member);
        if path.is_dir() {
            Ok(Box::new(DirContainer::open(path)?))
        } else if path.is_file() {
            Ok(Box::new(ZipContainer::open(path)?))
        } else {
            Err(missing_member(&self.name, member))
        }
    }
}
