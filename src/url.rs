//! Location handles returned by a [`ResourceLoader`](crate::loader::ResourceLoader),
//! and their conversion to the directory or archive that contains them.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::error::ConversionError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceUrl {
    /// A file or directory directly on disk.
    File(PathBuf),
    /// An entry inside a zip/jar archive.
    Jar { archive: PathBuf, entry: String },
    /// A handle with a scheme this crate cannot map to a path.
    Other { scheme: String, location: String },
}

impl ResourceUrl {
    pub fn scheme(&self) -> &str {
        match self {
            ResourceUrl::File(_) => "file",
            ResourceUrl::Jar { .. } => "jar",
            ResourceUrl::Other { scheme, .. } => scheme.as_str(),
        }
    }

    /// Normalizes a handle for resource `name` to the handle of its code source:
    /// the archive holding a jar entry, or the directory root a file was found under.
    pub fn code_source(&self, name: &str) -> Result<ResourceUrl, ConversionError> {
        match self {
            ResourceUrl::Jar { archive, .. } => Ok(ResourceUrl::File(archive.clone())),
            ResourceUrl::File(path) => strip_resource_suffix(path, name)
                .map(ResourceUrl::File)
                .ok_or_else(|| ConversionError::UnknownCodeSource {
                    name: name.to_string(),
                    url: self.to_string(),
                }),
            ResourceUrl::Other { .. } => Err(self.unsupported()),
        }
    }

    pub fn to_path(&self) -> Result<PathBuf, ConversionError> {
        match self {
            ResourceUrl::File(path) => Ok(path.clone()),
            _ => Err(self.unsupported()),
        }
    }

    fn unsupported(&self) -> ConversionError {
        ConversionError::UnsupportedScheme {
            scheme: self.scheme().to_string(),
            url: self.to_string(),
        }
    }
}

impl fmt::Display for ResourceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceUrl::File(path) => write!(f, "file:{}", path.display()),
            ResourceUrl::Jar { archive, entry } => {
                write!(f, "jar:file:{}!/{}", archive.display(), entry)
            }
            ResourceUrl::Other { scheme, location } => write!(f, "{scheme}:{location}"),
        }
    }
}

fn strip_resource_suffix(path: &Path, name: &str) -> Option<PathBuf> {
    let wanted: Vec<&str> = name.split('/').filter(|s| !s.is_empty()).collect();
    if wanted.is_empty() {
        return None;
    }

    let mut root = path.to_path_buf();
    for segment in wanted.iter().rev() {
        match root.components().next_back() {
            Some(Component::Normal(last)) if last == *segment => {}
            _ => return None,
        }
        root.pop();
    }
    Some(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jar_entry_normalizes_to_containing_archive() {
        let url = ResourceUrl::Jar {
            archive: PathBuf::from("/libs/game.jar"),
            entry: "net/example/Main.class".to_string(),
        };
        let source = url.code_source("net/example/Main.class").unwrap();
        assert_eq!(source, ResourceUrl::File(PathBuf::from("/libs/game.jar")));
        assert_eq!(source.to_path().unwrap(), PathBuf::from("/libs/game.jar"));
    }

    #[test]
    fn file_strips_resource_name_to_directory_root() {
        let url = ResourceUrl::File(PathBuf::from("/build/classes/net/example/Main.class"));
        let source = url.code_source("net/example/Main.class").unwrap();
        assert_eq!(source, ResourceUrl::File(PathBuf::from("/build/classes")));
    }

    #[test]
    fn file_not_ending_with_name_is_unknown_code_source() {
        let url = ResourceUrl::File(PathBuf::from("/build/classes/net/other/Main.class"));
        let err = url.code_source("net/example/Main.class").unwrap_err();
        assert!(matches!(err, ConversionError::UnknownCodeSource { .. }));
    }

    #[test]
    fn partial_component_match_is_rejected() {
        let url = ResourceUrl::File(PathBuf::from("/build/classes/net/example/XMain.class"));
        assert!(url.code_source("Main.class").is_err());
    }

    #[test]
    fn other_scheme_is_unsupported() {
        let url = ResourceUrl::Other {
            scheme: "http".to_string(),
            location: "//example.net/Main.class".to_string(),
        };
        assert!(matches!(
            url.code_source("Main.class"),
            Err(ConversionError::UnsupportedScheme { .. })
        ));
        assert!(url.to_path().is_err());
        assert_eq!(url.to_string(), "http://example.net/Main.class");
    }

    #[test]
    fn unsupported_error_names_the_scheme() {
        let url = ResourceUrl::Other {
            scheme: "memory".to_string(),
            location: "opaque".to_string(),
        };
        let err = url.code_source("Main.class").unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnsupportedScheme {
                scheme: "memory".to_string(),
                url: "memory:opaque".to_string(),
            }
        );
        assert_eq!(err.to_string(), "unsupported 'memory' resource url: memory:opaque");
    }

    #[test]
    fn jar_handle_cannot_become_a_path_directly() {
        let url = ResourceUrl::Jar {
            archive: PathBuf::from("/libs/a.jar"),
            entry: "A.class".to_string(),
        };
        assert!(matches!(
            url.to_path(),
            Err(ConversionError::UnsupportedScheme { ref scheme, .. }) if scheme == "jar"
        ));
        assert_eq!(url.to_string(), "jar:file:/libs/a.jar!/A.class");
    }
}
