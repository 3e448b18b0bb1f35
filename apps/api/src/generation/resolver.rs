//! Section Resolver — maps a (chapter, section) selection to a title, a
//! target length and the composed prompt.
//!
//! Pure: no I/O and no state, so the same inputs always give the same prompt.

use serde::Serialize;

use crate::generation::prompts::{
    INTRODUCTION_PROMPT_TEMPLATE, SECTION_PROMPT_TEMPLATE, SUBSECTION_PROMPT_TEMPLATE,
};
use crate::generation::sections::{
    find_section, Chapter, SectionKind, FALLBACK_SECTION_TITLE, INTRODUCTION_TITLE,
};
use crate::llm_client::prompts::with_shared_fragments;

const INTRODUCTION_PAGES: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSection {
    pub title: String,
    pub target_pages: u32,
    pub prompt: String,
}

/// Resolves a selection into `{title, target_pages, prompt}`.
///
/// Only the introduction ids take the introduction path. Any other chapter
/// string, known or not, is treated as a body chapter and resolved through the
/// section table. An unknown or absent section falls back to a generic title
/// instead of failing. `references` are embedded verbatim and not validated.
pub fn resolve(chapter: &str, section: Option<&str>, references: &str) -> ResolvedSection {
    if Chapter::from_id(chapter) == Some(Chapter::Introduction) {
        return ResolvedSection {
            title: INTRODUCTION_TITLE.to_string(),
            target_pages: INTRODUCTION_PAGES,
            prompt: with_shared_fragments(INTRODUCTION_PROMPT_TEMPLATE)
                .replace("{references}", references),
        };
    }

    let section_id = section.unwrap_or_default();
    let title = find_section(section_id)
        .map(|entry| entry.title)
        .unwrap_or(FALLBACK_SECTION_TITLE);

    let kind = SectionKind::of(section_id);
    let template = match kind {
        SectionKind::Subsection => SUBSECTION_PROMPT_TEMPLATE,
        SectionKind::Section => SECTION_PROMPT_TEMPLATE,
    };

    // {references} goes last so user text is never scanned for placeholders.
    let prompt = with_shared_fragments(template)
        .replace("{title}", title)
        .replace("{references}", references);

    ResolvedSection {
        title: title.to_string(),
        target_pages: kind.target_pages(),
        prompt,
    }
}
