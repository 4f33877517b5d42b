use leodict_model::Section;
use std::fmt::Write;

/// Separator between the source and target columns.
pub const COLUMN_SEPARATOR: &str = " | ";

const HEADER_RULE: &str = "----------";

/// Render sections as column-aligned text, in the order given.
pub fn render_sections(sections: &[Section]) -> String {
    let mut out = String::new();
    for section in sections {
        render_section(section, &mut out);
    }
    out
}

/// Render one section: a heading line, then one line per entry with the
/// source column padded to the widest source text in this section.
///
/// A section without entries renders nothing — there is no width to compute
/// and no rows to head.
fn render_section(section: &Section, out: &mut String) {
    if section.entries.is_empty() {
        return;
    }

    let width = section
        .entries
        .iter()
        .map(|entry| entry.source.chars().count())
        .max()
        .unwrap_or(0);

    let _ = writeln!(
        out,
        "\n{HEADER_RULE} {} {HEADER_RULE}",
        section.category.heading()
    );
    for entry in &section.entries {
        let _ = writeln!(
            out,
            "{:<width$}{COLUMN_SEPARATOR}{}",
            entry.source, entry.target
        );
    }
}
