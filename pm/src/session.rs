//! Composer session
//!
//! Holds the active style and the field values for one editing session and
//! derives everything shown to the user from them. Nothing here is persisted.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::composer::{
    Field, PromptFields, PromptSection, compose_sections, serialize_markdown_document, serialize_plain,
};
use crate::host::{Clipboard, Downloader, MARKDOWN_MIME};
use crate::styles::{DEFAULT_STYLE_ID, StyleCatalog, StylePreset};

/// How long a copy/export result label stays up before reverting
pub const STATUS_RESET_DELAY: Duration = Duration::from_millis(1800);

pub const COPY_IDLE_LABEL: &str = "复制 Prompt";
pub const COPY_DONE_LABEL: &str = "已复制 ✓";
pub const COPY_FAILED_LABEL: &str = "复制失败";
pub const EXPORT_IDLE_LABEL: &str = "导出为 Markdown";
pub const EXPORT_DONE_LABEL: &str = "已导出 ✓";

/// Action button label that temporarily shows a result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonStatus {
    idle: &'static str,
    flash: Option<(&'static str, Instant)>,
}

impl ButtonStatus {
    pub fn new(idle: &'static str) -> Self {
        Self { idle, flash: None }
    }

    /// Show `label` until [`STATUS_RESET_DELAY`] after `now`
    pub fn flash(&mut self, label: &'static str, now: Instant) {
        self.flash = Some((label, now + STATUS_RESET_DELAY));
    }

    /// Label as of `now`
    pub fn label_at(&self, now: Instant) -> &'static str {
        match self.flash {
            Some((label, until)) if now < until => label,
            _ => self.idle,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label_at(Instant::now())
    }
}

/// Values derived from the current state for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub text: String,
    pub char_count: usize,
    pub style_label: String,
    pub length_label: String,
}

/// Active style plus field values
pub struct ComposerSession {
    catalog: StyleCatalog,
    active: usize,
    fields: PromptFields,
    copy_status: ButtonStatus,
    export_status: ButtonStatus,
}

impl ComposerSession {
    /// Start on the default style, or the first preset if the catalog lacks it
    pub fn new(catalog: StyleCatalog) -> Self {
        let active = catalog.index_of(DEFAULT_STYLE_ID).unwrap_or(0);
        debug!(%active, "ComposerSession::new: called");
        Self {
            catalog,
            active,
            fields: PromptFields::default(),
            copy_status: ButtonStatus::new(COPY_IDLE_LABEL),
            export_status: ButtonStatus::new(EXPORT_IDLE_LABEL),
        }
    }

    pub fn catalog(&self) -> &StyleCatalog {
        &self.catalog
    }

    pub fn active_style(&self) -> &StylePreset {
        self.catalog.preset_at(self.active)
    }

    /// Switch to another style
    ///
    /// Returns false, leaving the selection alone, for an unknown id or the
    /// already active one. Field values are never touched.
    pub fn select_style(&mut self, id: &str) -> bool {
        debug!(%id, "ComposerSession::select_style: called");
        match self.catalog.index_of(id) {
            None => {
                warn!("Ignoring unknown style '{}'", id);
                false
            }
            Some(index) if index == self.active => {
                debug!("ComposerSession::select_style: already active");
                false
            }
            Some(index) => {
                self.active = index;
                info!("Style switched to {}", id);
                true
            }
        }
    }

    pub fn field(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    pub fn fields(&self) -> &PromptFields {
        &self.fields
    }

    /// Replace every field value at once
    pub fn set_fields(&mut self, fields: PromptFields) {
        debug!("ComposerSession::set_fields: called");
        self.fields = fields;
    }

    pub fn sections(&self) -> Vec<PromptSection> {
        compose_sections(self.active_style(), &self.fields)
    }

    pub fn plain_text(&self) -> String {
        serialize_plain(&self.sections())
    }

    pub fn markdown_document(&self) -> String {
        serialize_markdown_document(&self.sections(), &self.active_style().label)
    }

    pub fn preview(&self) -> Preview {
        let text = self.plain_text();
        let char_count = text.chars().count();
        Preview {
            style_label: format!("当前风格：{}", self.active_style().label),
            length_label: format!("字数：{}", char_count),
            char_count,
            text,
        }
    }

    pub fn export_filename(&self) -> String {
        format!("prompt-{}.md", self.active_style().id)
    }

    /// Copy the plain prompt; a failed write is reported as `false`
    pub async fn copy<C: Clipboard + ?Sized>(&mut self, clipboard: &C) -> bool {
        debug!("ComposerSession::copy: called");
        let text = self.plain_text();
        let ok = match clipboard.write_text(&text).await {
            Ok(()) => true,
            Err(e) => {
                warn!("Copy failed: {}", e);
                false
            }
        };
        let label = if ok { COPY_DONE_LABEL } else { COPY_FAILED_LABEL };
        self.copy_status.flash(label, Instant::now());
        ok
    }

    /// Export the Markdown document; a failed save is reported as `false`
    pub fn export<D: Downloader + ?Sized>(&mut self, downloader: &mut D) -> bool {
        debug!("ComposerSession::export: called");
        let filename = self.export_filename();
        let content = self.markdown_document();
        match downloader.download(&filename, MARKDOWN_MIME, content.as_bytes()) {
            Ok(path) => {
                debug!(?path, "ComposerSession::export: saved");
                self.export_status.flash(EXPORT_DONE_LABEL, Instant::now());
                true
            }
            Err(e) => {
                warn!("Export failed: {}", e);
                false
            }
        }
    }

    pub fn copy_status(&self) -> &ButtonStatus {
        &self.copy_status
    }

    pub fn export_status(&self) -> &ButtonStatus {
        &self.export_status
    }
}
