//! Host-facing transform.
//!
//! `Tagger::transform` is the single entry point a bundler calls per file. It
//! never fails: ineligible files, parse failures and files with nothing to tag
//! all come back as "unchanged" (`tagged: None`).

use oxc_allocator::Allocator;
use rayon::prelude::*;
use sourcemap::SourceMap;
use std::path::Path;

use crate::config::{BuildMode, TaggerOptions};
use crate::eligibility::is_eligible;
use crate::error::{Result, TaggerError};
use crate::parse::{parse_source, SourceUnit};
use crate::report::{BuildStats, FileReport};
use crate::splice::{insertion_text, render_attributes, source_map_json, Splicer};
use crate::visitor::ElementCollector;

/// Rewritten source plus its map back to the original.
#[derive(Debug)]
pub struct TaggedSource {
    pub code: String,
    pub map: SourceMap,
}

impl TaggedSource {
    pub fn map_json(&self) -> Result<String> {
        source_map_json(&self.map)
    }
}

#[derive(Debug)]
pub struct TransformOutput {
    /// `None` means "use the original text".
    pub tagged: Option<TaggedSource>,
    pub report: FileReport,
}

impl TransformOutput {
    fn unchanged(report: FileReport) -> Self {
        Self {
            tagged: None,
            report,
        }
    }

    pub fn is_changed(&self) -> bool {
        self.tagged.is_some()
    }
}

/// Configured tagger for one build. Immutable once created.
#[derive(Debug, Clone)]
pub struct Tagger {
    options: TaggerOptions,
    mode: BuildMode,
}

impl Tagger {
    pub fn new(options: TaggerOptions, mode: BuildMode) -> Self {
        Self { options, mode }
    }

    pub fn options(&self) -> &TaggerOptions {
        &self.options
    }

    pub fn mode(&self) -> BuildMode {
        self.mode
    }

    /// Tag one file. `id` is the host's identifier for it (usually an absolute path).
    pub fn transform(&self, code: &str, id: &str) -> TransformOutput {
        if !is_eligible(id, &self.options, self.mode) {
            return TransformOutput::unchanged(FileReport::ineligible());
        }

        let unit = SourceUnit::new(code, id, &self.options);
        let mut report = FileReport {
            eligible: true,
            ..FileReport::default()
        };

        if self.options.debug {
            tracing::debug!(file = %unit.relative_path, "processing");
        }

        let tagged = match self.tag_unit(&unit, &mut report) {
            Ok(tagged) => tagged,
            Err(err) => {
                tracing::warn!(file = %unit.relative_path, error = %err, "failed to process file");
                report.warnings.push(err.to_string());
                None
            }
        };
        report.processed = true;

        TransformOutput { tagged, report }
    }

    /// Read `path` from disk and tag it. Read errors come back as warnings.
    pub fn transform_file(&self, path: &Path) -> TransformOutput {
        let id = path.to_string_lossy();
        if !is_eligible(&id, &self.options, self.mode) {
            return TransformOutput::unchanged(FileReport::ineligible());
        }
        match std::fs::read_to_string(path) {
            Ok(code) => self.transform(&code, &id),
            Err(err) => {
                let err = TaggerError::from(err);
                tracing::warn!(file = %id, error = %err, "failed to read file");
                TransformOutput::unchanged(FileReport {
                    eligible: true,
                    warnings: vec![err.to_string()],
                    ..FileReport::default()
                })
            }
        }
    }

    /// Tag many `(id, code)` inputs in parallel, recording every report in `stats`.
    /// Outputs come back in input order.
    pub fn transform_batch<S: AsRef<str> + Sync>(
        &self,
        inputs: &[(S, S)],
        stats: &BuildStats,
    ) -> Vec<TransformOutput> {
        inputs
            .par_iter()
            .map(|(id, code)| {
                let output = self.transform(code.as_ref(), id.as_ref());
                stats.record(&output.report);
                output
            })
            .collect()
    }

    fn tag_unit(&self, unit: &SourceUnit, report: &mut FileReport) -> Result<Option<TaggedSource>> {
        let allocator = Allocator::default();
        let program = parse_source(&allocator, unit)?;

        let collector = ElementCollector::new(&self.options, unit).collect(&program);
        report.elements_found = collector.found;
        report.elements_skipped = collector.skipped;

        let selection = self.options.attribute_selection();
        let mut splicer = Splicer::new(unit.text);

        for candidate in &collector.candidates {
            let meta = &candidate.metadata;
            let attrs = render_attributes(meta, selection, &self.options.prefix_name);
            let Some(text) = insertion_text(&attrs) else {
                continue;
            };
            splicer.append_left(candidate.name_end, text);
            report.elements_tagged += 1;

            if self.options.debug {
                tracing::debug!(
                    count = attrs.len(),
                    element = %meta.name,
                    id = %meta.id,
                    "added attributes"
                );
                if !meta.content.is_empty() {
                    tracing::debug!(content = %meta.content.to_json(), "content extracted");
                }
            }
        }

        if self.options.debug {
            if splicer.is_empty() {
                tracing::debug!(file = %unit.relative_path, elements = report.elements_found, "no changes needed");
            } else {
                tracing::debug!(
                    file = %unit.relative_path,
                    elements = report.elements_found,
                    insertions = splicer.len(),
                    "made changes"
                );
            }
        }

        if splicer.is_empty() {
            return Ok(None);
        }

        let (code, map) = splicer.finish(unit.id);
        Ok(Some(TaggedSource { code, map }))
    }
}
