use leodict_model::{Category, Entry, QueryOptions, Section};
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

use crate::text::cell_text;

/// The element id under which the results page groups all sections.
pub const RESULTS_CONTAINER_ID: &str = "centerColumn";

/// Code of the fixed target language: every entry row pairs the requested
/// source language with German.
pub const TARGET_LANG: &str = "de";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("results container #{RESULTS_CONTAINER_ID} not present in page")]
    MissingResults,
}

/// Walk a results page and collect the sections selected by `options`.
///
/// Sections come back in document order, rows within each section in
/// document order. Sections whose category is not enabled, and rows that do
/// not pair the requested source language with German, are skipped silently.
/// A page without the results container means the term was not found.
pub fn extract_sections(
    html: &str,
    options: &QueryOptions,
) -> Result<Vec<Section>, ExtractError> {
    let document = Html::parse_document(html);

    let container_sel =
        Selector::parse(&format!("#{RESULTS_CONTAINER_ID}")).expect("valid selector");
    let section_sel = Selector::parse(".section").expect("valid selector");

    let container = document
        .select(&container_sel)
        .next()
        .ok_or(ExtractError::MissingResults)?;

    let mut sections = Vec::new();
    for section_el in container.select(&section_sel).take(options.section_limit) {
        let Some(tag) = section_el.value().attr("data-dz-name") else {
            continue;
        };
        let Some(category) = Category::from_tag(tag) else {
            tracing::debug!(tag, "skipping unrecognized section");
            continue;
        };
        if !options.includes(category) {
            tracing::debug!(tag, "skipping section not requested");
            continue;
        }

        let entries = collect_entries(section_el, &options.language);
        tracing::debug!(tag, rows = entries.len(), "selected section");
        sections.push(Section { category, entries });
    }

    Ok(sections)
}

/// Collect the bilingual rows of one section: `<tr>`s carrying one cell in
/// the source language and one in German. The first cell of each language
/// wins when a row repeats a `lang` attribute.
fn collect_entries(section: ElementRef, source_lang: &str) -> Vec<Entry> {
    let row_sel = Selector::parse("table > tbody > tr").expect("valid selector");
    let cell_sel = Selector::parse("td").expect("valid selector");

    let mut entries = Vec::new();
    for row in section.select(&row_sel) {
        let mut source = None;
        let mut target = None;
        for cell in row.select(&cell_sel) {
            match cell.value().attr("lang") {
                Some(lang) if lang == source_lang && source.is_none() => {
                    source = Some(cell_text(cell));
                }
                Some(TARGET_LANG) if target.is_none() => {
                    target = Some(cell_text(cell));
                }
                _ => {}
            }
        }
        if let (Some(source), Some(target)) = (source, target) {
            entries.push(Entry { source, target });
        }
    }
    entries
}
