use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One sample listed in a manifest file
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Stripped manifest line: a relative path or sample name
    pub identifier: String,
}

impl Record {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }

    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Build the on-disk location of the sample's image.
    ///
    /// `extension` is appended verbatim (include the leading dot), so
    /// identifiers that already contain dots are left untouched.
    #[must_use]
    pub fn make_path(&self, directory: Option<&Path>, extension: Option<&str>) -> PathBuf {
        let mut name = self.identifier.clone();
        if let Some(ext) = extension {
            name.push_str(ext);
        }
        match directory {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_path_bare() {
        let record = Record::new("Biometrika/Train/Live/001_1");
        assert_eq!(
            record.make_path(None, None),
            PathBuf::from("Biometrika/Train/Live/001_1")
        );
    }

    #[test]
    fn test_make_path_with_directory_and_extension() {
        let record = Record::new("001_1");
        let path = record.make_path(Some(Path::new("/data/livdet")), Some(".png"));
        assert_eq!(path, PathBuf::from("/data/livdet/001_1.png"));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&Record::new("002_3")).unwrap();
        assert_eq!(json, r#"{"identifier":"002_3"}"#);
    }
}
