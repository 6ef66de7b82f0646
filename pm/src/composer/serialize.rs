//! Plain-text and Markdown rendering of composed sections

use super::sections::PromptSection;

/// Attribution line placed under the title of an exported document
pub const MARKDOWN_ATTRIBUTION: &str =
    "> Generated with **PromptMatrix** · tweak the parameters and reuse this prompt across models.";

/// Heading-plus-body rendering, ending in exactly one newline
pub fn serialize_plain(sections: &[PromptSection]) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(sections.len() * 4);
    for section in sections {
        lines.push(format!("### {}", section.heading));
        lines.push(String::new());
        lines.push(section.body.trim().to_string());
        lines.push(String::new());
    }
    format!("{}\n", lines.join("\n").trim())
}

/// Plain rendering wrapped with a title and attribution header
pub fn serialize_markdown_document(sections: &[PromptSection], style_label: &str) -> String {
    format!(
        "# Prompt · {}\n\n{}\n\n{}",
        style_label,
        MARKDOWN_ATTRIBUTION,
        serialize_plain(sections)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::sections::SectionHeading;

    fn section(heading: SectionHeading, body: &str) -> PromptSection {
        PromptSection {
            heading,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_serialize_plain_layout() {
        let sections = vec![
            section(SectionHeading::System, "Be helpful."),
            section(SectionHeading::User, "\nDo the thing.  "),
        ];

        assert_eq!(
            serialize_plain(&sections),
            "### System\n\nBe helpful.\n\n### User\n\nDo the thing.\n"
        );
    }

    #[test]
    fn test_serialize_plain_single_trailing_newline() {
        let sections = vec![section(SectionHeading::Examples, "a\n\n\n")];
        let plain = serialize_plain(&sections);
        assert!(plain.ends_with("a\n"));
        assert!(!plain.ends_with("\n\n"));
    }

    #[test]
    fn test_serialize_plain_empty() {
        assert_eq!(serialize_plain(&[]), "\n");
    }

    #[test]
    fn test_markdown_document_header() {
        let sections = vec![section(SectionHeading::System, "Be helpful.")];
        let doc = serialize_markdown_document(&sections, "极简风格 · Minimal");

        assert_eq!(
            doc,
            "# Prompt · 极简风格 · Minimal\n\n\
             > Generated with **PromptMatrix** · tweak the parameters and reuse this prompt across models.\n\n\
             ### System\n\nBe helpful.\n"
        );
    }
}
