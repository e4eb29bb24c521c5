// Job-description parsing: pasted free text -> sections + metadata + questions,
// and the canonical stored-description round trip used by the admin editor.
// Everything here is pure and synchronous; handlers move parsing off the runtime.

pub mod handlers;
pub mod headings;
pub mod metadata;
pub mod parser;
pub mod questions;
pub mod sections;

pub use parser::{parse_full_jd, parse_full_jd_with, ParseOptions, ParsedJD, UnknownHeadingPolicy};
pub use sections::{description_to_sections, sections_to_description, SectionKey, Sections};
