//! @ai:module:intent Load and validate the key/value run configuration
//! @ai:module:layer application
//! @ai:module:public_api Config, Mode, load_config, parse_properties
//! @ai:module:depends_on error
//! @ai:module:stateless true

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Package prepended to the annotation import when none is configured.
pub const DEFAULT_IMPORT_PACKAGE: &str = "";

/// Package substituted into the import line when none is configured.
pub const DEFAULT_REPLACE_PACKAGE: &str = "statsd";

const REQUIRED_KEYS: [&str; 6] = [
    "path",
    "project",
    "folder",
    "annotation",
    "annotationEnd",
    "annotate",
];

/// @ai:intent Operating toggles for a run
///
/// The rewrite toggles are independent: `replace_import` acts on the import
/// block while `remove_annotations` acts on the file body, and both can be
/// active in a single run. Annotate is forced off whenever either rewrite
/// toggle is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mode {
    annotate: bool,
    replace_import: bool,
    remove_annotations: bool,
}

impl Mode {
    /// @ai:intent Build a mode from raw toggles, applying the annotate-off rule
    /// @ai:post annotate() is false whenever replace_import or remove_annotations is set
    /// @ai:effects pure
    pub fn new(annotate: bool, replace_import: bool, remove_annotations: bool) -> Self {
        Self {
            annotate: annotate && !replace_import && !remove_annotations,
            replace_import,
            remove_annotations,
        }
    }

    pub fn annotate(&self) -> bool {
        self.annotate
    }

    pub fn replace_import(&self) -> bool {
        self.replace_import
    }

    pub fn remove_annotations(&self) -> bool {
        self.remove_annotations
    }
}

/// @ai:intent Validated run configuration, immutable for the whole run
#[derive(Debug, Clone)]
pub struct Config {
    pub source_path: PathBuf,
    pub project: String,
    pub folder: String,
    pub annotation: String,
    pub annotation_end: String,
    pub mode: Mode,
    pub import_source_package: String,
    pub import_target_package: String,
}

impl Config {
    /// @ai:intent Build a configuration from raw key/value pairs
    /// @ai:post on failure, every missing required key is reported
    /// @ai:effects pure
    pub fn from_map(raw: &HashMap<String, String>) -> std::result::Result<Config, Vec<String>> {
        let missing: Vec<String> = REQUIRED_KEYS
            .iter()
            .filter(|key| !raw.contains_key(**key))
            .map(|key| key.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(missing);
        }

        // `annotate` parses leniently (any spelling of "true"); the rewrite
        // toggles require the exact string "true".
        let annotate = raw["annotate"].eq_ignore_ascii_case("true");
        let replace_import = raw.get("replace_import").map(|v| v == "true").unwrap_or(false);
        let remove_annotations = raw
            .get("remove_annotations")
            .map(|v| v == "true")
            .unwrap_or(false);
        let mode = Mode::new(annotate, replace_import, remove_annotations);

        // The package overrides are only honored when the import is being
        // replaced; all other modes compose the import line from the default.
        let (import_source_package, import_target_package) = if mode.replace_import() {
            (
                raw.get("replace_orig")
                    .cloned()
                    .unwrap_or_else(|| DEFAULT_IMPORT_PACKAGE.to_string()),
                raw.get("replace_new")
                    .cloned()
                    .unwrap_or_else(|| DEFAULT_REPLACE_PACKAGE.to_string()),
            )
        } else {
            (
                DEFAULT_IMPORT_PACKAGE.to_string(),
                DEFAULT_REPLACE_PACKAGE.to_string(),
            )
        };

        Ok(Config {
            source_path: PathBuf::from(&raw["path"]),
            project: raw["project"].clone(),
            folder: raw["folder"].clone(),
            annotation: raw["annotation"].clone(),
            annotation_end: raw["annotationEnd"].clone(),
            mode,
            import_source_package,
            import_target_package,
        })
    }
}

/// @ai:intent Parse simple key=value properties text into a map
/// @ai:post blank lines and lines starting with '#' or '!' are skipped
/// @ai:effects pure
pub fn parse_properties(text: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            map.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    map
}

/// @ai:intent Load and validate a configuration file
/// @ai:pre path points at a readable key=value file
/// @ai:effects fs:read
pub fn load_config(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path).map_err(|e| Error::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let raw = parse_properties(&text);
    Config::from_map(&raw).map_err(|keys| Error::MissingKeys { keys })
}
