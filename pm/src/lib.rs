//! PromptMatrix - style-preset prompt composer
//!
//! Pick a writing style preset, optionally override individual sections, and
//! get a composed prompt back as plain text or as a Markdown document.
//!
//! # Modules
//!
//! - [`styles`] - Built-in style presets and the catalog
//! - [`composer`] - Section assembly and serialization
//! - [`session`] - Active style, field values and copy/export actions
//! - [`theme`] - Persisted display theme
//! - [`host`] - Clipboard, export and preference storage capabilities
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface
//!
//! # Example
//!
//! ```
//! use promptmatrix::{ComposerSession, Field, StyleCatalog};
//!
//! let mut session = ComposerSession::new(StyleCatalog::builtin());
//! session.select_style("minimal");
//! session.set_field(Field::TaskSummary, "Summarize the release notes");
//!
//! let prompt = session.plain_text();
//! assert!(prompt.contains("Your task: Summarize the release notes."));
//! ```

pub mod cli;
pub mod composer;
pub mod config;
pub mod error;
pub mod host;
pub mod session;
pub mod styles;
pub mod theme;

pub use composer::{
    ComposerInput, Field, PromptFields, PromptSection, SectionHeading, compose_sections, serialize_markdown_document,
    serialize_plain,
};
pub use config::Config;
pub use error::PromptError;
pub use host::{
    Clipboard, CommandClipboard, DirectoryDownloader, Downloader, FilePreferences, MemoryClipboard, MemoryDownloader,
    MemoryPreferences, PreferenceStore,
};
pub use session::{ButtonStatus, ComposerSession, Preview};
pub use styles::{StyleCatalog, StylePreset};
pub use theme::{THEME_PREFERENCE_KEY, Theme, ThemeController};
