//! Prompt Composer
//!
//! Turns a style preset plus field values into ordered sections, then
//! renders those sections as plain text or as a Markdown document.
//!
//! Section order is fixed:
//! 1. System (always)
//! 2. User (always, placeholder when empty)
//! 3. Examples
//! 4. Constraints
//! 5. Output format
//!
//! Everything here is pure; the same input always yields the same text.

mod input;
mod sections;
mod serialize;

pub use input::{ComposerInput, Field, PromptFields};
pub use sections::{PromptSection, SectionHeading, USER_PLACEHOLDER, compose_sections};
pub use serialize::{MARKDOWN_ATTRIBUTION, serialize_markdown_document, serialize_plain};
