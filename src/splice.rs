//! Text splicing: insert-only edits against the original buffer, plus the
//! source map for the rewritten text.
//!
//! Edits are recorded against original byte offsets and applied in a single
//! forward pass, so no offset ever has to be shifted.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use sourcemap::{SourceMap, SourceMapBuilder};

use crate::config::{AttributeKind, AttributeSelection};
use crate::error::Result;
use crate::metadata::ElementMetadata;
use crate::parse::line_break_len;

/// Characters `encodeURIComponent` leaves alone.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

// ═══════════════════════════════════════════════════════════════════════════════
// ATTRIBUTE RENDERING
// ═══════════════════════════════════════════════════════════════════════════════

/// `name="value"` strings for the selected categories, in emission order.
///
/// Values are not escaped; only the content digest is percent-encoded.
pub fn render_attributes(
    meta: &ElementMetadata,
    selection: AttributeSelection,
    prefix: &str,
) -> Vec<String> {
    let mut attrs = Vec::new();

    if selection.contains(AttributeKind::Id) {
        attrs.push(format!("data-{}-id=\"{}\"", prefix, meta.id));
    }
    if selection.contains(AttributeKind::Name) {
        attrs.push(format!("data-{}-name=\"{}\"", prefix, meta.name));
    }
    if selection.contains(AttributeKind::Path) {
        attrs.push(format!("data-component-path=\"{}\"", meta.path));
    }
    if selection.contains(AttributeKind::Line) {
        attrs.push(format!("data-component-line=\"{}\"", meta.line));
    }
    if selection.contains(AttributeKind::File) {
        attrs.push(format!("data-component-file=\"{}\"", meta.file));
    }
    // legacy duplicate of the prefixed name attribute
    if selection.contains(AttributeKind::Name) {
        attrs.push(format!("data-component-name=\"{}\"", meta.name));
    }
    if selection.contains(AttributeKind::Content) && !meta.content.is_empty() {
        attrs.push(format!(
            "data-component-content=\"{}\"",
            encode_uri_component(&meta.content.to_json())
        ));
    }

    attrs
}

/// Text inserted after the tag name, or `None` when there is nothing to add.
pub fn insertion_text(attrs: &[String]) -> Option<String> {
    if attrs.is_empty() {
        None
    } else {
        Some(format!(" {}", attrs.join(" ")))
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SPLICER
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Byte offset in the original text.
    pub offset: u32,
    pub text: String,
}

/// Collects insertions for one source text.
#[derive(Debug)]
pub struct Splicer<'s> {
    source: &'s str,
    edits: Vec<Edit>,
}

impl<'s> Splicer<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            edits: Vec::new(),
        }
    }

    /// Schedule `text` at `offset`. Insertions sharing an offset keep their
    /// scheduling order.
    pub fn append_left(&mut self, offset: u32, text: String) {
        let offset = offset.min(self.source.len() as u32);
        self.edits.push(Edit { offset, text });
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    /// Apply all edits. `source_name` becomes the map's only source.
    pub fn finish(mut self, source_name: &str) -> (String, SourceMap) {
        self.edits.sort_by_key(|edit| edit.offset);

        let source = self.source;
        let inserted: usize = self.edits.iter().map(|edit| edit.text.len()).sum();
        let mut out = String::with_capacity(source.len() + inserted);

        let mut builder = SourceMapBuilder::new(None);
        let src_id = builder.add_source(source_name);
        builder.set_source_contents(src_id, Some(source));
        let mut mapper = Mapper {
            builder,
            src_id,
            last: None,
        };

        let mut dst = Cursor::default();
        let mut src = Cursor::default();
        let mut pending = self.edits.iter().peekable();
        let mut prev_class = CharClass::Space;
        let mut line_start = true;
        let mut offset = 0;

        loop {
            let mut resumed = false;
            while let Some(edit) = pending.next_if(|edit| edit.offset as usize <= offset) {
                dst.advance_over(&edit.text);
                out.push_str(&edit.text);
                resumed = true;
            }
            if offset >= source.len() {
                break;
            }

            if let Some(len) = line_break_len(source, offset) {
                if resumed {
                    mapper.mark(dst, src);
                }
                out.push_str(&source[offset..offset + len]);
                offset += len;
                dst.newline();
                src.newline();
                prev_class = CharClass::Space;
                line_start = true;
                continue;
            }

            let Some(c) = source[offset..].chars().next() else {
                break;
            };
            let class = CharClass::of(c);
            if resumed
                || (class != CharClass::Space
                    && (line_start || class.starts_segment_after(prev_class)))
            {
                mapper.mark(dst, src);
            }

            out.push(c);
            dst.column += c.len_utf16() as u32;
            src.column += c.len_utf16() as u32;
            offset += c.len_utf8();
            prev_class = class;
            line_start = false;
        }

        (out, mapper.builder.into_sourcemap())
    }
}

/// Serialize a source map to its JSON form.
pub fn source_map_json(map: &SourceMap) -> Result<String> {
    let mut buf = Vec::new();
    map.to_writer(&mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

// ═══════════════════════════════════════════════════════════════════════════════
// MAPPING HELPERS
// ═══════════════════════════════════════════════════════════════════════════════

/// 0-based line and UTF-16 column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Cursor {
    line: u32,
    column: u32,
}

impl Cursor {
    fn newline(&mut self) {
        self.line += 1;
        self.column = 0;
    }

    fn advance_over(&mut self, text: &str) {
        let mut offset = 0;
        while offset < text.len() {
            if let Some(len) = line_break_len(text, offset) {
                self.newline();
                offset += len;
            } else if let Some(c) = text[offset..].chars().next() {
                self.column += c.len_utf16() as u32;
                offset += c.len_utf8();
            } else {
                break;
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Word,
    Punct,
    Space,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_whitespace() {
            CharClass::Space
        } else if c.is_alphanumeric() || c == '_' || c == '$' {
            CharClass::Word
        } else {
            CharClass::Punct
        }
    }

    fn starts_segment_after(self, prev: CharClass) -> bool {
        match self {
            CharClass::Word => prev != CharClass::Word,
            CharClass::Punct => true,
            CharClass::Space => false,
        }
    }
}

struct Mapper {
    builder: SourceMapBuilder,
    src_id: u32,
    last: Option<Cursor>,
}

impl Mapper {
    fn mark(&mut self, dst: Cursor, src: Cursor) {
        if self.last == Some(dst) {
            return;
        }
        self.builder.add_raw(
            dst.line,
            dst.column,
            src.line,
            src.column,
            Some(self.src_id),
            None,
            false,
        );
        self.last = Some(dst);
    }
}
