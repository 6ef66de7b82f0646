//! Composer input fields

use serde::{Deserialize, Serialize};
use tracing::debug;

/// One of the free-form input fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    TaskSummary,
    Tone,
    Audience,
    SystemOverride,
    UserOverride,
    Examples,
    ConstraintsOverride,
    OutputFormatOverride,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::TaskSummary,
        Field::Tone,
        Field::Audience,
        Field::SystemOverride,
        Field::UserOverride,
        Field::Examples,
        Field::ConstraintsOverride,
        Field::OutputFormatOverride,
    ];

    /// Kebab-case name, as used in input files
    pub fn name(&self) -> &'static str {
        match self {
            Self::TaskSummary => "task-summary",
            Self::Tone => "tone",
            Self::Audience => "audience",
            Self::SystemOverride => "system-override",
            Self::UserOverride => "user-override",
            Self::Examples => "examples",
            Self::ConstraintsOverride => "constraints-override",
            Self::OutputFormatOverride => "output-format-override",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| format!("Unknown field: {}", s))
    }
}

/// Raw field values, stored untrimmed
///
/// Trimming happens when sections are composed, so the stored value is
/// whatever the user typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PromptFields {
    pub task_summary: String,
    pub tone: String,
    pub audience: String,
    pub system_override: String,
    pub user_override: String,
    pub examples: String,
    pub constraints_override: String,
    pub output_format_override: String,
}

impl PromptFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::TaskSummary => &self.task_summary,
            Field::Tone => &self.tone,
            Field::Audience => &self.audience,
            Field::SystemOverride => &self.system_override,
            Field::UserOverride => &self.user_override,
            Field::Examples => &self.examples,
            Field::ConstraintsOverride => &self.constraints_override,
            Field::OutputFormatOverride => &self.output_format_override,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        debug!(%field, "PromptFields::set: called");
        let slot = match field {
            Field::TaskSummary => &mut self.task_summary,
            Field::Tone => &mut self.tone,
            Field::Audience => &mut self.audience,
            Field::SystemOverride => &mut self.system_override,
            Field::UserOverride => &mut self.user_override,
            Field::Examples => &mut self.examples,
            Field::ConstraintsOverride => &mut self.constraints_override,
            Field::OutputFormatOverride => &mut self.output_format_override,
        };
        *slot = value.into();
    }

    /// Trimmed value of a field
    pub fn trimmed(&self, field: Field) -> &str {
        self.get(field).trim()
    }
}

/// A prompt described in a file: optional style plus field values
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerInput {
    pub style: Option<String>,

    #[serde(flatten)]
    pub fields: PromptFields,
}
