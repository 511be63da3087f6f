//! Tagger configuration.
//!
//! The option surface mirrors what a bundler host passes in as a JSON object,
//! so everything deserializes with camelCase keys and per-field defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::Result;

pub const DEFAULT_PREFIX: &str = "vt";

// ═══════════════════════════════════════════════════════════════════════════════
// BUILD MODE
// ═══════════════════════════════════════════════════════════════════════════════

/// Build mode as decided by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Development,
    #[default]
    Production,
}

impl BuildMode {
    /// Development iff `NODE_ENV` is exactly `development`.
    pub fn from_env() -> Self {
        match std::env::var("NODE_ENV") {
            Ok(value) if value == "development" => BuildMode::Development,
            _ => BuildMode::Production,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// ATTRIBUTE SELECTION
// ═══════════════════════════════════════════════════════════════════════════════

/// Categories of generated attributes that can be switched on and off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    Id,
    Name,
    Path,
    Line,
    File,
    Content,
}

impl AttributeKind {
    pub const ALL: [AttributeKind; 6] = [
        AttributeKind::Id,
        AttributeKind::Name,
        AttributeKind::Path,
        AttributeKind::Line,
        AttributeKind::File,
        AttributeKind::Content,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "id" => Some(AttributeKind::Id),
            "name" => Some(AttributeKind::Name),
            "path" => Some(AttributeKind::Path),
            "line" => Some(AttributeKind::Line),
            "file" => Some(AttributeKind::File),
            "content" => Some(AttributeKind::Content),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AttributeKind::Id => "id",
            AttributeKind::Name => "name",
            AttributeKind::Path => "path",
            AttributeKind::Line => "line",
            AttributeKind::File => "file",
            AttributeKind::Content => "content",
        }
    }
}

/// Resolved set of attribute categories to emit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttributeSelection {
    bits: u8,
}

impl AttributeSelection {
    pub fn all() -> Self {
        AttributeKind::ALL.into_iter().collect()
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn contains(&self, kind: AttributeKind) -> bool {
        self.bits & Self::bit(kind) != 0
    }

    pub fn insert(&mut self, kind: AttributeKind) {
        self.bits |= Self::bit(kind);
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    fn bit(kind: AttributeKind) -> u8 {
        1 << (kind as u8)
    }
}

impl FromIterator<AttributeKind> for AttributeSelection {
    fn from_iter<I: IntoIterator<Item = AttributeKind>>(iter: I) -> Self {
        let mut selection = AttributeSelection::none();
        for kind in iter {
            selection.insert(kind);
        }
        selection
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// OPTIONS
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TaggerOptions {
    /// Master switch. Unset means "on in development builds only".
    pub enabled: Option<bool>,
    /// Prefix for the primary `data-<prefix>-id` / `data-<prefix>-name` attributes.
    pub prefix_name: String,
    /// Eligible file suffixes.
    pub include: Vec<String>,
    /// Substrings that disqualify a file identifier.
    pub exclude: Vec<String>,
    pub use_relative_path: bool,
    pub debug: bool,
    #[serde(rename = "filter3DElements")]
    pub filter_3d_elements: bool,
    /// Attribute category names; unknown names are ignored.
    pub attributes_to_include: Vec<String>,
    /// Base directory for relative paths. Defaults to the working directory.
    pub root: Option<PathBuf>,
}

impl Default for TaggerOptions {
    fn default() -> Self {
        Self {
            enabled: None,
            prefix_name: DEFAULT_PREFIX.to_string(),
            include: vec![".tsx".to_string(), ".jsx".to_string()],
            exclude: vec!["node_modules".to_string()],
            use_relative_path: true,
            debug: false,
            filter_3d_elements: true,
            attributes_to_include: AttributeKind::ALL
                .iter()
                .map(|kind| kind.as_str().to_string())
                .collect(),
            root: None,
        }
    }
}

impl TaggerOptions {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn attribute_selection(&self) -> AttributeSelection {
        self.attributes_to_include
            .iter()
            .filter_map(|name| AttributeKind::from_name(name))
            .collect()
    }

    /// `data-<prefix>-id`, the attribute that marks an element as already tagged.
    pub fn id_attribute(&self) -> String {
        format!("data-{}-id", self.prefix_name)
    }

    pub fn name_attribute(&self) -> String {
        format!("data-{}-name", self.prefix_name)
    }

    pub fn is_enabled(&self, mode: BuildMode) -> bool {
        self.enabled.unwrap_or(mode == BuildMode::Development)
    }
}
