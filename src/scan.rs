use anyhow::{Context, Result};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use crate::classpath::is_archive_path;

pub const CLASS_EXTENSION: &str = ".class";

pub fn default_m2_repository() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Failed to resolve home directory")?;
    Ok(home.join(".m2").join("repository"))
}

/// `net.example.Main` -> `net/example/Main.class`
pub fn class_name_to_resource_name(class_name: &str) -> String {
    format!("{}{CLASS_EXTENSION}", class_name.replace('.', "/"))
}

/// Collects every `.jar`/`.zip` under `base_path`, sorted so the resulting
/// classpath order does not depend on walk order.
pub fn scan_archives(base_path: &Path) -> Result<Vec<PathBuf>> {
    if !base_path.is_dir() {
        anyhow::bail!("Not a directory: {}", base_path.display());
    }

    let (tx, rx) = mpsc::channel();

    let walker = WalkBuilder::new(base_path)
        .hidden(false)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .build_parallel();

    walker.run(|| {
        let tx = tx.clone();
        Box::new(move |entry| {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    let is_archive = entry.file_type().is_some_and(|t| t.is_file())
                        && is_archive_path(path);
                    if is_archive {
                        let _ = tx.send(path.to_path_buf());
                    }
                }
                Err(err) => log::debug!("skipping unreadable path while scanning: {err}"),
            }
            ignore::WalkState::Continue
        })
    });

    drop(tx);
    let mut archives: Vec<PathBuf> = rx.iter().collect();
    archives.sort();
    Ok(archives)
}
