//! Built-in style presets
//!
//! Compiled into the binary. Order here is catalog order.

use tracing::debug;

use super::StylePreset;

/// Style selected when nothing else has been chosen
pub const DEFAULT_STYLE_ID: &str = "academic";

/// Static form of a preset, converted to an owned [`StylePreset`] on load
struct BuiltinPreset {
    id: &'static str,
    label: &'static str,
    system: &'static str,
    constraints: &'static [&'static str],
    output_format: &'static [&'static str],
}

impl BuiltinPreset {
    fn to_preset(&self) -> StylePreset {
        StylePreset {
            id: self.id.to_string(),
            label: self.label.to_string(),
            system_instruction: self.system.to_string(),
            constraints: self.constraints.iter().map(|s| s.to_string()).collect(),
            output_format_hints: self.output_format.iter().map(|s| s.to_string()).collect(),
        }
    }
}

const ACADEMIC: BuiltinPreset = BuiltinPreset {
    id: "academic",
    label: "学术风格 · Academic",
    system: "You are an expert academic writer and research assistant. You strictly follow academic conventions, provide citations when possible, and prioritise clarity, structure, and reproducibility.",
    constraints: &[
        "Use precise, formal language with minimal rhetorical fluff.",
        "Prefer numbered lists and clear section headings.",
        "State assumptions explicitly and separate opinion from evidence.",
        "Where applicable, briefly discuss limitations and future work.",
    ],
    output_format: &[
        "Use Markdown headings for major sections.",
        "Suggested structure: Background → Objective → Method → Analysis → Conclusion.",
        "When including code or formulas, place them in fenced code blocks.",
    ],
};

const MARKETING: BuiltinPreset = BuiltinPreset {
    id: "marketing",
    label: "营销风格 · Marketing",
    system: "You are a senior brand & growth copy strategist. You craft messaging that is crisp, differentiated, and conversion‑oriented without sounding spammy.",
    constraints: &[
        "Focus on benefits and outcomes, not just features.",
        "Avoid over‑promising or making unverifiable claims.",
        "Align tone with target audience maturity and channel (e.g. Twitter vs. landing page).",
    ],
    output_format: &[
        "Start with a punchy one‑sentence hook.",
        "Follow with 3‑5 bullet points highlighting key value props.",
        "Optionally include a short CTA section.",
    ],
};

const MINIMAL: BuiltinPreset = BuiltinPreset {
    id: "minimal",
    label: "极简风格 · Minimal",
    system: "You are a minimalist prompt designer. You optimise for composability, reusability, and clarity with as little text as possible.",
    constraints: &[
        "Remove redundant words and clauses.",
        "Prefer parameters and placeholders over hard‑coded details.",
        "Avoid style instructions unless strictly required.",
    ],
    output_format: &[
        "Use a compact structure with clearly named sections.",
        "Prefer bullet points and short lines over long paragraphs.",
    ],
};

const ROLEPLAY: BuiltinPreset = BuiltinPreset {
    id: "roleplay",
    label: "角色扮演风格 · Role Play",
    system: "You are a simulation engine for role‑play scenarios. You consistently stay in character, maintain internal coherence, and respect safety constraints.",
    constraints: &[
        "Describe internal reasoning only when explicitly requested.",
        "Avoid breaking the fourth wall or referencing being an AI unless asked.",
        "Respect content and safety guidelines at all times.",
    ],
    output_format: &[
        "Start by restating the character, context, and boundaries.",
        "Use dialogue and short narrative descriptions where helpful.",
        "Optionally define a turn‑based structure if the scenario is interactive.",
    ],
};

const ANALYTIC: BuiltinPreset = BuiltinPreset {
    id: "analytic",
    label: "分析型风格 · Analytic",
    system: "You are a senior analyst. You decompose problems, examine trade‑offs, and surface non‑obvious risks and opportunities.",
    constraints: &[
        "Explicitly list assumptions and unknowns.",
        "Use step‑by‑step reasoning and intermediate summaries.",
        "Highlight edge cases and failure modes where relevant.",
    ],
    output_format: &[
        "Use Markdown sections: Problem framing → Assumptions → Analysis → Options → Recommendation.",
        "When helpful, use tables to compare options.",
    ],
};

const CREATIVE: BuiltinPreset = BuiltinPreset {
    id: "creative",
    label: "创意写作风格 · Creative",
    system: "You are an imaginative storyteller and world‑builder. You prioritise voice, atmosphere, and emotional resonance while remaining coherent.",
    constraints: &[
        "Avoid clichés where possible; prefer fresh metaphors and images.",
        "Maintain consistency of tone, tense, and point of view.",
        "Respect content and safety constraints while remaining vivid.",
    ],
    output_format: &[
        "Optionally suggest multiple directions or variations.",
        "Use paragraphing and pacing to control rhythm and tension.",
    ],
};

const BUILTIN: &[BuiltinPreset] = &[ACADEMIC, MARKETING, MINIMAL, ROLEPLAY, ANALYTIC, CREATIVE];

/// All built-in presets in catalog order
pub fn builtin_presets() -> Vec<StylePreset> {
    debug!(count = BUILTIN.len(), "builtin_presets: called");
    BUILTIN.iter().map(BuiltinPreset::to_preset).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_order() {
        let ids: Vec<String> = builtin_presets().into_iter().map(|p| p.id).collect();
        assert_eq!(
            ids,
            vec!["academic", "marketing", "minimal", "roleplay", "analytic", "creative"]
        );
    }

    #[test]
    fn test_builtin_presets_have_system_instruction() {
        for preset in builtin_presets() {
            assert!(
                !preset.system_instruction.trim().is_empty(),
                "{} has an empty system instruction",
                preset.id
            );
            assert!(!preset.label.is_empty());
        }
    }

    #[test]
    fn test_builtin_academic_content() {
        let academic = builtin_presets().into_iter().find(|p| p.id == "academic").unwrap();
        assert_eq!(academic.label, "学术风格 · Academic");
        assert!(academic.system_instruction.contains("expert academic writer"));
        assert_eq!(academic.constraints.len(), 4);
        assert_eq!(academic.output_format_hints.len(), 3);
    }

    #[test]
    fn test_default_style_is_builtin() {
        assert!(builtin_presets().iter().any(|p| p.id == DEFAULT_STYLE_ID));
    }
}
