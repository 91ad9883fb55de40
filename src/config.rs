//! Conversion options.

use std::path::PathBuf;

use crate::source::DEFAULT_ENCODING;

/// Default list name
pub const DEFAULT_LIST_NAME: &str = "ZAPRETINFO";

/// Default geosite output filename
pub const DEFAULT_GEOSITE_FILENAME: &str = "geosite.dat";

/// Plaintext filename placeholder resolved to `<list name>.txt`
pub const LIST_NAME_PLACEHOLDER: &str = "<list-name>.txt";

/// Options for one dump-to-geosite conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Name of the list; upper-cased for the geosite entry code
    pub list_name: String,
    /// Path to the Zapret-Info CSV dump
    pub input: PathBuf,
    /// Geosite output filename
    pub geosite_filename: String,
    /// Plaintext output filename, or [`LIST_NAME_PLACEHOLDER`]
    pub plaintext_filename: String,
    /// Directory the artifacts are written to
    pub output_dir: PathBuf,
    /// Charset label of the dump
    pub encoding: String,
    /// Leading lines skipped before records start
    pub header_lines: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            list_name: DEFAULT_LIST_NAME.to_string(),
            input: PathBuf::from("./z-i/dump.csv"),
            geosite_filename: DEFAULT_GEOSITE_FILENAME.to_string(),
            plaintext_filename: LIST_NAME_PLACEHOLDER.to_string(),
            output_dir: PathBuf::from("./publish"),
            encoding: DEFAULT_ENCODING.to_string(),
            header_lines: 1,
        }
    }
}

impl BuildOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list_name(mut self, name: impl Into<String>) -> Self {
        self.list_name = name.into();
        self
    }

    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = path.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = label.into();
        self
    }

    /// Geosite entry code for the list.
    pub fn list_code(&self) -> String {
        self.list_name.to_uppercase()
    }

    /// Plaintext filename with the placeholder resolved.
    pub fn plaintext_name(&self) -> String {
        if self.plaintext_filename == LIST_NAME_PLACEHOLDER {
            format!("{}.txt", self.list_name)
        } else {
            self.plaintext_filename.clone()
        }
    }

    pub fn geosite_path(&self) -> PathBuf {
        self.output_dir.join(&self.geosite_filename)
    }

    pub fn plaintext_path(&self) -> PathBuf {
        self.output_dir.join(self.plaintext_name())
    }
}
