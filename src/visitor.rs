use oxc_ast::ast::{JSXElement, Program};
use oxc_ast_visit::walk::walk_jsx_element;
use oxc_ast_visit::Visit;
use oxc_span::GetSpan;

use crate::classify::{classify, Verdict};
use crate::config::TaggerOptions;
use crate::metadata::ElementMetadata;
use crate::parse::{LineIndex, SourceUnit};

/// An element that passed every gate, with the offset its attributes go to.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub metadata: ElementMetadata,
    /// Byte offset just past the tag name.
    pub name_end: u32,
}

/// Walks a program depth-first and collects taggable JSX elements.
///
/// Each opening tag is handled together with its enclosing element, which is
/// where the children for text extraction live.
pub struct ElementCollector<'o, 's> {
    options: &'o TaggerOptions,
    unit: &'o SourceUnit<'s>,
    lines: LineIndex<'s>,
    pub candidates: Vec<Candidate>,
    /// Passed the denylist and case gates (already-tagged included).
    pub found: u64,
    /// Rejected by the denylist.
    pub skipped: u64,
}

impl<'o, 's> ElementCollector<'o, 's> {
    pub fn new(options: &'o TaggerOptions, unit: &'o SourceUnit<'s>) -> Self {
        Self {
            options,
            unit,
            lines: LineIndex::new(unit.text),
            candidates: Vec::new(),
            found: 0,
            skipped: 0,
        }
    }

    pub fn collect(mut self, program: &Program) -> Self {
        self.visit_program(program);
        self
    }

    fn inspect(&mut self, element: &JSXElement) {
        let opening = &element.opening_element;
        match classify(opening, self.options) {
            Verdict::UnsupportedName | Verdict::Fragment | Verdict::Component(_) => {}
            Verdict::Denylisted(name) => {
                self.skipped += 1;
                if self.options.debug {
                    tracing::debug!(element = %name, file = %self.unit.relative_path, "skipping 3D element");
                }
            }
            Verdict::AlreadyTagged(_) => {
                self.found += 1;
            }
            Verdict::Accept(name) => {
                self.found += 1;
                let (line, column) = self.lines.position(opening.span.start);
                let metadata = ElementMetadata::synthesize(
                    self.unit,
                    name,
                    line,
                    column,
                    opening,
                    &element.children,
                );
                self.candidates.push(Candidate {
                    metadata,
                    name_end: opening.name.span().end,
                });
            }
        }
    }
}

impl<'a> Visit<'a> for ElementCollector<'_, '_> {
    fn visit_jsx_element(&mut self, element: &JSXElement<'a>) {
        self.inspect(element);
        walk_jsx_element(self, element);
    }
}
