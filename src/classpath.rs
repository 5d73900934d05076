use memmap2::Mmap;
use rayon::prelude::*;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, Cursor};
use std::path::{Component, Path, PathBuf};
use zip::ZipArchive;

use crate::loader::ResourceLoader;
use crate::url::ResourceUrl;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClasspathEntry {
    Directory(PathBuf),
    Archive(PathBuf),
}

impl ClasspathEntry {
    /// `.jar` and `.zip` files are archives, anything else is treated as a directory.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if is_archive_path(&path) {
            ClasspathEntry::Archive(path)
        } else {
            ClasspathEntry::Directory(path)
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            ClasspathEntry::Directory(p) | ClasspathEntry::Archive(p) => p,
        }
    }

    fn probe(&self, name: &str) -> io::Result<Option<ResourceUrl>> {
        match self {
            ClasspathEntry::Directory(dir) => {
                let path = dir.join(name);
                Ok(path.exists().then_some(ResourceUrl::File(path)))
            }
            ClasspathEntry::Archive(archive) => {
                if !archive.exists() {
                    return Ok(None);
                }
                Ok(archive_contains(archive, name)?.then(|| ResourceUrl::Jar {
                    archive: archive.clone(),
                    entry: name.to_string(),
                }))
            }
        }
    }
}

/// A [`ResourceLoader`] over an ordered list of directories and archives.
#[derive(Debug, Clone, Default)]
pub struct ClasspathLoader {
    entries: Vec<ClasspathEntry>,
}

impl ClasspathLoader {
    pub fn new(entries: Vec<ClasspathEntry>) -> Self {
        Self { entries }
    }

    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self::new(paths.into_iter().map(ClasspathEntry::from_path).collect())
    }

    /// Parses a platform classpath string (`:` separated on unix, `;` on windows).
    pub fn from_classpath(classpath: &OsStr) -> Self {
        Self::from_paths(std::env::split_paths(classpath).filter(|p| !p.as_os_str().is_empty()))
    }

    pub fn entries(&self) -> &[ClasspathEntry] {
        &self.entries
    }

    pub fn push(&mut self, entry: ClasspathEntry) {
        self.entries.push(entry);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ResourceLoader for ClasspathLoader {
    fn get_resource(&self, name: &str) -> Option<ResourceUrl> {
        if !is_valid_resource_name(name) {
            return None;
        }

        self.entries.iter().find_map(|entry| match entry.probe(name) {
            Ok(found) => found,
            Err(err) => {
                log::debug!(
                    "skipping unreadable classpath entry {}: {err}",
                    entry.path().display()
                );
                None
            }
        })
    }

    fn get_resources(&self, name: &str) -> io::Result<Vec<ResourceUrl>> {
        if !is_valid_resource_name(name) {
            return Ok(Vec::new());
        }

        let found = self
            .entries
            .par_iter()
            .map(|entry| entry.probe(name))
            .collect::<io::Result<Vec<_>>>()?;
        Ok(found.into_iter().flatten().collect())
    }
}

/// True for `.jar`/`.zip` paths, extension compared case-insensitively.
pub fn is_archive_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("jar") || e.eq_ignore_ascii_case("zip"))
}

fn is_valid_resource_name(name: &str) -> bool {
    let path = Path::new(name);
    !name.is_empty()
        && !name.starts_with('/')
        && path.components().all(|c| matches!(c, Component::Normal(_)))
}

fn archive_contains(archive_path: &Path, name: &str) -> io::Result<bool> {
    let file = File::open(archive_path)?;
    // SAFETY: The file is opened read-only and outlives the mapping.
    let mmap = unsafe { Mmap::map(&file)? };
    let mut archive = ZipArchive::new(Cursor::new(&mmap[..])).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("cannot read archive {}: {e}", archive_path.display()),
        )
    })?;
    Ok(archive.by_name(name).is_ok())
}
