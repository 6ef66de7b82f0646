//! Property tests for section composition and serialization

use proptest::prelude::*;

use promptmatrix::composer::USER_PLACEHOLDER;
use promptmatrix::{
    ComposerSession, Field, PromptFields, PromptSection, SectionHeading, StyleCatalog, StylePreset, compose_sections,
    serialize_markdown_document, serialize_plain,
};

fn style_id() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["academic", "marketing", "minimal", "roleplay", "analytic", "creative"])
        .prop_map(str::to_string)
}

fn preset(id: &str) -> StylePreset {
    StyleCatalog::builtin().get(id).unwrap().clone()
}

fn body(sections: &[PromptSection], heading: SectionHeading) -> Option<String> {
    sections.iter().find(|s| s.heading == heading).map(|s| s.body.clone())
}

/// Non-empty after trimming, no leading/trailing whitespace
fn word_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9\u{4e00}-\u{4e20}][A-Za-z0-9 ,\u{4e00}-\u{4e20}]{0,30}[A-Za-z0-9\u{4e00}-\u{4e20}]"
}

proptest! {
    #[test]
    fn system_body_is_preset_instruction(id in style_id()) {
        let preset = preset(&id);
        let sections = compose_sections(&preset, &PromptFields::default());
        prop_assert_eq!(body(&sections, SectionHeading::System), Some(preset.system_instruction.clone()));
    }

    #[test]
    fn summary_gets_exactly_one_period(id in style_id(), summary in word_text()) {
        let mut fields = PromptFields::default();
        fields.set(Field::TaskSummary, summary.clone());
        let sections = compose_sections(&preset(&id), &fields);
        let user = body(&sections, SectionHeading::User).unwrap();
        prop_assert_eq!(user.lines().next().unwrap(), format!("Your task: {}.", summary));
    }

    #[test]
    fn terminated_summary_gets_no_period(
        id in style_id(),
        summary in word_text(),
        stop in prop::sample::select(vec!['.', '。'])
    ) {
        let summary = format!("{}{}", summary, stop);
        let mut fields = PromptFields::default();
        fields.set(Field::TaskSummary, summary.clone());
        let sections = compose_sections(&preset(&id), &fields);
        let user = body(&sections, SectionHeading::User).unwrap();
        prop_assert_eq!(user.lines().next().unwrap(), format!("Your task: {}", summary));
    }

    #[test]
    fn empty_task_uses_placeholder(id in style_id(), blank in "[ \t\n]{0,4}") {
        let mut fields = PromptFields::default();
        fields.set(Field::TaskSummary, blank.clone());
        fields.set(Field::UserOverride, blank);
        let sections = compose_sections(&preset(&id), &fields);
        prop_assert_eq!(body(&sections, SectionHeading::User), Some(USER_PLACEHOLDER.to_string()));
    }

    #[test]
    fn empty_constraints_omit_section(system in word_text(), hints in prop::collection::vec(word_text(), 0..3)) {
        let preset = StylePreset {
            id: "custom".to_string(),
            label: "Custom".to_string(),
            system_instruction: system,
            constraints: vec![],
            output_format_hints: hints,
        };
        let sections = compose_sections(&preset, &PromptFields::default());
        prop_assert!(body(&sections, SectionHeading::Constraints).is_none());
    }

    #[test]
    fn plain_serialization_is_stable(
        id in style_id(),
        task in "[ -~]{0,40}",
        examples in "[ -~\n]{0,60}",
        constraints in "[ -~\n]{0,60}"
    ) {
        let mut fields = PromptFields::default();
        fields.set(Field::TaskSummary, task);
        fields.set(Field::Examples, examples);
        fields.set(Field::ConstraintsOverride, constraints);
        let plain = serialize_plain(&compose_sections(&preset(&id), &fields));

        prop_assert!(plain.ends_with('\n'));
        prop_assert!(!plain.ends_with("\n\n"));
        prop_assert_eq!(format!("{}\n", plain.trim()), plain.clone());

        let wrapped = serialize_plain(&[PromptSection { heading: SectionHeading::User, body: plain.clone() }]);
        prop_assert_eq!(wrapped, format!("### User\n\n{}", plain));
    }

    #[test]
    fn markdown_starts_with_active_label(id in style_id()) {
        let mut session = ComposerSession::new(StyleCatalog::builtin());
        session.select_style(&id);
        let label = session.active_style().label.clone();
        let doc = serialize_markdown_document(&session.sections(), &label);
        let expected_prefix = format!("# Prompt · {}\n", label);
        prop_assert!(doc.starts_with(&expected_prefix));
        prop_assert_eq!(doc, session.markdown_document());
    }

    #[test]
    fn style_switch_never_touches_overrides(from in style_id(), to in style_id(), system in word_text()) {
        let mut session = ComposerSession::new(StyleCatalog::builtin());
        session.select_style(&from);
        session.set_field(Field::SystemOverride, system.clone());
        session.select_style(&to);
        let system_body = session.sections()[0].body.clone();
        prop_assert_eq!(system_body, system.clone());
        prop_assert_eq!(session.field(Field::SystemOverride), system.as_str());
    }
}

#[test]
fn academic_to_marketing_keeps_system_override() {
    let mut session = ComposerSession::new(StyleCatalog::builtin());
    session.set_field(Field::SystemOverride, "Custom persona.");

    assert!(session.select_style("marketing"));

    assert_eq!(session.sections()[0].body, "Custom persona.");
    assert!(session.plain_text().contains("Start with a punchy one‑sentence hook."));
}
