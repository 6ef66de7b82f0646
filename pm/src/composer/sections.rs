//! Section assembly
//!
//! Each section has its own builder; builders run in heading order and each
//! decides on its own whether its section is present.

use serde::Serialize;
use tracing::debug;

use super::input::{Field, PromptFields};
use crate::styles::StylePreset;

/// Body of the User section when neither a task summary nor a user override is given
pub const USER_PLACEHOLDER: &str =
    "Your task: [简要描述你希望模型完成的具体任务，例如生成某类内容、完成某项分析、改写一段文本等]。";

/// Fixed section headings, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SectionHeading {
    System,
    User,
    Examples,
    Constraints,
    #[serde(rename = "Output format")]
    OutputFormat,
}

impl SectionHeading {
    pub const ALL: [SectionHeading; 5] = [
        SectionHeading::System,
        SectionHeading::User,
        SectionHeading::Examples,
        SectionHeading::Constraints,
        SectionHeading::OutputFormat,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "System",
            Self::User => "User",
            Self::Examples => "Examples",
            Self::Constraints => "Constraints",
            Self::OutputFormat => "Output format",
        }
    }
}

impl std::fmt::Display for SectionHeading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One named block of the composed prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptSection {
    pub heading: SectionHeading,
    pub body: String,
}

impl PromptSection {
    fn new(heading: SectionHeading, body: String) -> Self {
        Self { heading, body }
    }
}

/// Combine a preset with the current field values into ordered sections
pub fn compose_sections(preset: &StylePreset, fields: &PromptFields) -> Vec<PromptSection> {
    debug!(style = %preset.id, "compose_sections: called");
    let mut sections = Vec::with_capacity(SectionHeading::ALL.len());

    sections.push(system_section(preset, fields));
    sections.push(user_section(fields));
    sections.extend(examples_section(fields));
    sections.extend(list_section(
        SectionHeading::Constraints,
        fields.trimmed(Field::ConstraintsOverride),
        &preset.constraints,
    ));
    sections.extend(list_section(
        SectionHeading::OutputFormat,
        fields.trimmed(Field::OutputFormatOverride),
        &preset.output_format_hints,
    ));

    debug!(count = sections.len(), "compose_sections: done");
    sections
}

fn system_section(preset: &StylePreset, fields: &PromptFields) -> PromptSection {
    let system_override = fields.trimmed(Field::SystemOverride);
    let tone = fields.trimmed(Field::Tone);
    let audience = fields.trimmed(Field::Audience);

    let mut parts = Vec::with_capacity(3);
    if system_override.is_empty() {
        parts.push(preset.system_instruction.clone());
    } else {
        debug!("system_section: using override");
        parts.push(system_override.to_string());
    }
    if !tone.is_empty() {
        parts.push(format!("Tone: {}.", tone));
    }
    if !audience.is_empty() {
        parts.push(format!("Primary audience: {}.", audience));
    }

    PromptSection::new(SectionHeading::System, parts.join("\n\n"))
}

fn user_section(fields: &PromptFields) -> PromptSection {
    let summary = fields.trimmed(Field::TaskSummary);
    let user_override = fields.trimmed(Field::UserOverride);

    let mut lines = Vec::with_capacity(3);
    if !summary.is_empty() {
        lines.push(task_line(summary));
    } else if user_override.is_empty() {
        debug!("user_section: no task given, using placeholder");
        lines.push(USER_PLACEHOLDER.to_string());
    }
    if !user_override.is_empty() {
        lines.push(String::new());
        lines.push(user_override.to_string());
    }

    PromptSection::new(SectionHeading::User, lines.join("\n"))
}

/// `Your task: {summary}` with a period added unless one is already there
///
/// Only `.` and `。` count; `!`, `?` and other terminators still get a period.
fn task_line(summary: &str) -> String {
    if summary.ends_with('.') || summary.ends_with('。') {
        format!("Your task: {}", summary)
    } else {
        format!("Your task: {}.", summary)
    }
}

fn examples_section(fields: &PromptFields) -> Option<PromptSection> {
    let examples = fields.trimmed(Field::Examples);
    if examples.is_empty() {
        return None;
    }
    Some(PromptSection::new(SectionHeading::Examples, examples.to_string()))
}

/// Override verbatim, else the preset statements as a numbered list, else nothing
fn list_section(heading: SectionHeading, override_text: &str, defaults: &[String]) -> Option<PromptSection> {
    if !override_text.is_empty() {
        debug!(%heading, "list_section: using override");
        return Some(PromptSection::new(heading, override_text.to_string()));
    }
    if defaults.is_empty() {
        debug!(%heading, "list_section: no content, omitting");
        return None;
    }
    let body = defaults
        .iter()
        .enumerate()
        .map(|(idx, statement)| format!("{}. {}", idx + 1, statement))
        .collect::<Vec<_>>()
        .join("\n");
    Some(PromptSection::new(heading, body))
}
