//! # JSX Tagger
//!
//! Annotates plain markup elements in `.tsx`/`.jsx` sources with debugging
//! attributes so a development tool can map a rendered DOM node back to the
//! place it was written.
//!
//! ## Pipeline
//!
//! 1. **Eligibility**: build mode, file extension and exclusion substrings.
//! 2. **Parse**: oxc, TypeScript + JSX, module source.
//! 3. **Walk**: depth-first over every JSX element, opening tag together with
//!    its enclosing element.
//! 4. **Classify**: fragments, 3D denylist, uppercase components and
//!    already-tagged elements are left alone.
//! 5. **Synthesize**: `<path>:<line>:<column>` id, literal attributes and text
//!    content.
//! 6. **Splice**: one insert-only edit right after each tag name, then a
//!    source map for the rewritten text.
//!
//! A file that fails to parse is passed through untouched with a warning;
//! nothing in here can fail a build.

#[cfg(feature = "napi")]
mod native;

mod classify;
mod config;
mod denylist;
mod discovery;
mod eligibility;
mod error;
mod metadata;
mod parse;
mod report;
mod splice;
mod transform;
mod visitor;

#[cfg(test)]
mod tagger_tests;

#[cfg(feature = "napi")]
pub use native::{tag_source_native, NativeFileReport, NativeTransformResult};

pub use classify::{classify, element_name, Verdict};
pub use config::{AttributeKind, AttributeSelection, BuildMode, TaggerOptions, DEFAULT_PREFIX};
pub use denylist::{is_3d_element, DREI_ELEMENTS, THREE_FIBER_ELEMENTS};
pub use discovery::{discover_sources, tag_directory};
pub use eligibility::{is_eligible, matches_path};
pub use error::{Result, TaggerError};
pub use metadata::{extract_text, AttributeLiterals, ContentDigest, ElementMetadata, LiteralValue};
pub use parse::{LineIndex, SourceUnit};
pub use report::{saturating_u32, BuildStats, FileReport, StatsSnapshot};
pub use splice::{encode_uri_component, Edit, Splicer};
pub use transform::{TaggedSource, Tagger, TransformOutput};
