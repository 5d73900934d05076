use anyhow::{Context, Result};
use std::env;
use std::ffi::OsString;

use crate::classpath::{ClasspathEntry, ClasspathLoader};
use crate::cli::Cli;
use crate::scan::{default_m2_repository, scan_archives};

/// Builds the search path: `--cp` (or `$CLASSPATH`), then `--scan` dirs, then `--m2`.
pub fn build_classpath(cli: &Cli) -> Result<ClasspathLoader> {
    let mut loader = match resolve_classpath_string(cli) {
        Some(cp) => ClasspathLoader::from_classpath(&cp),
        None => ClasspathLoader::default(),
    };

    for dir in &cli.scan {
        add_archives(&mut loader, dir)?;
    }

    if cli.m2 {
        let m2 = default_m2_repository()?;
        add_archives_if_present(&mut loader, &m2)?;
    }

    if loader.is_empty() {
        log::warn!("Classpath is empty; use --cp, --scan, --m2 or set CLASSPATH");
    }

    Ok(loader)
}

fn resolve_classpath_string(cli: &Cli) -> Option<OsString> {
    if let Some(cp) = cli.cp.clone() {
        return Some(cp);
    }
    env::var_os("CLASSPATH")
}

fn add_archives(loader: &mut ClasspathLoader, dir: &std::path::Path) -> Result<()> {
    let archives = scan_archives(dir)
        .with_context(|| format!("Failed to scan archives under {}", dir.display()))?;
    log::debug!("Found {} archives under {}", archives.len(), dir.display());
    for archive in archives {
        loader.push(ClasspathEntry::Archive(archive));
    }
    Ok(())
}

/// Like [`add_archives`], but a missing directory is logged and skipped.
fn add_archives_if_present(loader: &mut ClasspathLoader, dir: &std::path::Path) -> Result<()> {
    if !dir.is_dir() {
        log::warn!("Skipping missing repository {}", dir.display());
        return Ok(());
    }
    add_archives(loader, dir)
}
