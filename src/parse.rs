//! Parse Module for the JSX tagger
//!
//! Wraps `oxc_parser` for TSX input and provides the per-file identity
//! (`SourceUnit`) and byte-offset to line/column conversion (`LineIndex`).

use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use oxc_parser::Parser;
use oxc_span::SourceType;
use std::path::{Component, Path, PathBuf};

use crate::config::TaggerOptions;
use crate::error::{Result, TaggerError};

// ═══════════════════════════════════════════════════════════════════════════════
// SOURCE UNIT
// ═══════════════════════════════════════════════════════════════════════════════

/// One file handed to the tagger: its text plus the names it is reported under.
#[derive(Debug, Clone)]
pub struct SourceUnit<'s> {
    pub text: &'s str,
    /// Identifier as given by the host (usually an absolute path).
    pub id: &'s str,
    /// Path used in generated ids and `data-component-path`.
    pub relative_path: String,
    /// Basename of `id`.
    pub file_name: String,
}

impl<'s> SourceUnit<'s> {
    pub fn new(text: &'s str, id: &'s str, options: &TaggerOptions) -> Self {
        let relative_path = if options.use_relative_path {
            display_path(id, options.root.as_deref())
        } else {
            id.to_string()
        };

        let file_name = Path::new(id)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| id.to_string());

        Self {
            text,
            id,
            relative_path,
            file_name,
        }
    }
}

/// Path of `id` relative to `root` (or the working directory), with forward slashes.
fn display_path(id: &str, root: Option<&Path>) -> String {
    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(_) => return id.replace('\\', "/"),
    };
    let base = match root {
        Some(root) if root.is_absolute() => normalize(root),
        Some(root) => normalize(&cwd.join(root)),
        None => normalize(&cwd),
    };

    let path = Path::new(id);
    let target = if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&cwd.join(path))
    };

    pathdiff::diff_paths(&target, &base)
        .unwrap_or(target)
        .to_string_lossy()
        .replace('\\', "/")
}

/// Lexically resolve `.` and `..` components.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

// ═══════════════════════════════════════════════════════════════════════════════
// LINE INDEX
// ═══════════════════════════════════════════════════════════════════════════════

/// Byte length of the line terminator starting at `offset`, if any.
///
/// `\r\n` counts as one terminator; U+2028 and U+2029 are terminators too.
pub fn line_break_len(text: &str, offset: usize) -> Option<usize> {
    let rest = &text[offset..];
    let c = rest.chars().next()?;
    match c {
        '\n' | '\u{2028}' | '\u{2029}' => Some(c.len_utf8()),
        '\r' => {
            if rest[1..].starts_with('\n') {
                Some(2)
            } else {
                Some(1)
            }
        }
        _ => None,
    }
}

/// Maps byte offsets to 1-based lines and 0-based UTF-16 columns.
#[derive(Debug, Clone)]
pub struct LineIndex<'s> {
    text: &'s str,
    line_starts: Vec<usize>,
}

impl<'s> LineIndex<'s> {
    pub fn new(text: &'s str) -> Self {
        let mut line_starts = vec![0];
        let mut offset = 0;
        while offset < text.len() {
            if let Some(len) = line_break_len(text, offset) {
                offset += len;
                line_starts.push(offset);
            } else {
                offset += text[offset..].chars().next().map_or(1, char::len_utf8);
            }
        }
        Self { text, line_starts }
    }

    /// `(line, column)` for a byte offset. Offsets past the end clamp to the end.
    pub fn position(&self, offset: u32) -> (u32, u32) {
        let offset = (offset as usize).min(self.text.len());
        let line_idx = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let line_start = self.line_starts[line_idx];
        let column: usize = self
            .text
            .get(line_start..offset)
            .map(|prefix| prefix.chars().map(char::len_utf16).sum())
            .unwrap_or(0);
        (line_idx as u32 + 1, column as u32)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// PARSER
// ═══════════════════════════════════════════════════════════════════════════════

/// Parse a file as a TSX module. Any reported syntax error fails the file.
pub fn parse_source<'a>(allocator: &'a Allocator, unit: &SourceUnit<'a>) -> Result<Program<'a>> {
    let source_type = SourceType::tsx();
    let ret = Parser::new(allocator, unit.text, source_type).parse();

    if ret.panicked || !ret.errors.is_empty() {
        let message = if ret.errors.is_empty() {
            "parser aborted".to_string()
        } else {
            ret.errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ")
        };
        return Err(TaggerError::Parse {
            file: unit.relative_path.clone(),
            message,
        });
    }

    Ok(ret.program)
}
