//! Node bindings for bundler plugins (feature `napi`).

use napi_derive::napi;

use crate::config::{BuildMode, TaggerOptions};
use crate::report::{saturating_u32, FileReport};
use crate::transform::Tagger;

#[derive(Debug, Clone)]
#[napi(object)]
pub struct NativeFileReport {
    pub processed: bool,
    pub elements_found: u32,
    pub elements_tagged: u32,
    pub elements_skipped: u32,
    pub warnings: Vec<String>,
}

impl From<&FileReport> for NativeFileReport {
    fn from(report: &FileReport) -> Self {
        Self {
            processed: report.processed,
            elements_found: saturating_u32(report.elements_found),
            elements_tagged: saturating_u32(report.elements_tagged),
            elements_skipped: saturating_u32(report.elements_skipped),
            warnings: report.warnings.clone(),
        }
    }
}

#[derive(Debug, Clone)]
#[napi(object)]
pub struct NativeTransformResult {
    /// Rewritten code, absent when the file is unchanged.
    pub code: Option<String>,
    /// Source map JSON, present together with `code`.
    pub map: Option<String>,
    pub report: NativeFileReport,
}

/// Tag one file. `development` stands in for the host's build mode;
/// when omitted, `NODE_ENV` decides.
#[napi]
pub fn tag_source_native(
    code: String,
    id: String,
    options: Option<serde_json::Value>,
    development: Option<bool>,
) -> napi::Result<NativeTransformResult> {
    let options = match options {
        Some(value) => TaggerOptions::from_json_value(value)
            .map_err(|e| napi::Error::from_reason(e.to_string()))?,
        None => TaggerOptions::default(),
    };
    let mode = match development {
        Some(true) => BuildMode::Development,
        Some(false) => BuildMode::Production,
        None => BuildMode::from_env(),
    };

    let output = Tagger::new(options, mode).transform(&code, &id);
    let report = NativeFileReport::from(&output.report);

    match output.tagged {
        Some(tagged) => {
            let map = tagged
                .map_json()
                .map_err(|e| napi::Error::from_reason(e.to_string()))?;
            Ok(NativeTransformResult {
                code: Some(tagged.code),
                map: Some(map),
                report,
            })
        }
        None => Ok(NativeTransformResult {
            code: None,
            map: None,
            report,
        }),
    }
}
