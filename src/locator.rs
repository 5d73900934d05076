//! Best-effort lookups of the directory or archive a resource was loaded from.
//!
//! None of these functions fail. A resource that cannot be found, a location
//! that cannot be mapped to a path, and a loader that cannot enumerate its
//! resources all come back as "nothing found"; the cause goes to the `log`
//! facade at `warn` level.

use serde::Serialize;
use std::path::PathBuf;

use crate::error::ConversionError;
use crate::loader::ResourceLoader;
use crate::scan::class_name_to_resource_name;
use crate::url::ResourceUrl;

/// The first candidate class that resolved, and where it was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassMatch {
    pub class_name: String,
    pub source_path: PathBuf,
}

/// Maps one location of resource `name` to the path of its code source.
pub fn source_of(name: &str, url: &ResourceUrl) -> Result<PathBuf, ConversionError> {
    url.code_source(name)?.to_path()
}

pub fn get_source<L: ResourceLoader + ?Sized>(loader: &L, name: &str) -> Option<PathBuf> {
    let url = loader.get_resource(name)?;
    match source_of(name, &url) {
        Ok(path) => Some(path),
        Err(err) => {
            log::warn!("Skipping source of {name}: {err}");
            None
        }
    }
}

pub fn get_sources<L: ResourceLoader + ?Sized>(loader: &L, name: &str) -> Vec<PathBuf> {
    let urls = match loader.get_resources(name) {
        Ok(urls) => urls,
        Err(err) => {
            log::warn!("Failed to enumerate resources named {name}: {err}");
            return Vec::new();
        }
    };

    urls.iter()
        .filter_map(|url| match source_of(name, url) {
            Ok(path) => Some(path),
            Err(err) => {
                log::warn!("Skipping source of {name}: {err}");
                None
            }
        })
        .collect()
}

/// Probes `class_names` in order and returns the first one with a resolvable source.
pub fn find_first_class<L, S>(loader: &L, class_names: &[S]) -> Option<ClassMatch>
where
    L: ResourceLoader + ?Sized,
    S: AsRef<str>,
{
    class_names.iter().find_map(|class_name| {
        let class_name = class_name.as_ref();
        let resource_name = class_name_to_resource_name(class_name);
        get_source(loader, &resource_name).map(|source_path| ClassMatch {
            class_name: class_name.to_string(),
            source_path,
        })
    })
}
