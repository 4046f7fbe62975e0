//! Zip-backed containers, including archives nested inside archives.

use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use tracing::debug;
use zip::result::ZipError;
use zip::ZipArchive;

use super::{member_stem, missing_member, Container};
use crate::error::Result;

/// A zip archive on disk or in memory.
pub struct ZipContainer<R> {
    name: String,
    archive: ZipArchive<R>,
}

impl ZipContainer<File> {
    /// Open a zip file; the container is named after the file stem.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        Self::new(name, File::open(path)?)
    }
}

impl ZipContainer<Cursor<Vec<u8>>> {
    /// Wrap an archive already read into memory.
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Result<Self> {
        Self::new(name, Cursor::new(bytes))
    }
}

impl<R: Read + Seek> ZipContainer<R> {
    pub fn new(name: impl Into<String>, reader: R) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            archive: ZipArchive::new(reader)?,
        })
    }
}

impl<R: Read + Seek> Container for ZipContainer<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn members(&self) -> Result<Vec<String>> {
        Ok(self.archive.file_names().map(str::to_string).collect())
    }

    fn read(&mut self, member: &str) -> Result<Vec<u8>> {
        let mut file = match self.archive.by_name(member) {
            Ok(file) => file,
            Err(ZipError::FileNotFound) => return Err(missing_member(&self.name, member)),
            Err(e) => return Err(e.into()),
        };
        let mut bytes = Vec::with_capacity(usize::try_from(file.size()).unwrap_or(0));
        file.read_to_end(&mut bytes)?;
        debug!(container = %self.name, member, bytes = bytes.len(), "read member");
        Ok(bytes)
    }

    fn open_child(&mut self, member: &str) -> Result<Box<dyn Container>> {
        let bytes = self.read(member)?;
        Ok(Box::new(ZipContainer::from_bytes(member_stem(member), bytes)?))
    }
}
