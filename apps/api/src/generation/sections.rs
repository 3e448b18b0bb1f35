//! Static document structure: chapters, the section title table, and the
//! outline the drafting form is built from.
//!
//! Section ids follow `ch<N>_mb<M>` for a top-level section (مبحث) and
//! `ch<N>_mb<M>_sub<K>` for a sub-section (مطلب). The `_sub` marker alone
//! decides the kind, including for ids that are not in the table.

use serde::Serialize;

/// Marker that turns a section id into a sub-section id.
pub const SUBSECTION_MARKER: &str = "_sub";

/// Title used when a section id is not in the table.
pub const FALLBACK_SECTION_TITLE: &str = "القسم المختار";

pub const INTRODUCTION_TITLE: &str = "المقدمة";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Chapter {
    Introduction,
    ChapterOne,
    ChapterTwo,
}

impl Chapter {
    pub const ALL: [Chapter; 3] = [Chapter::Introduction, Chapter::ChapterOne, Chapter::ChapterTwo];

    /// Parses a wire id. Accepts the legacy form ids (`intro`, `chapter1`, `chapter2`).
    pub fn from_id(id: &str) -> Option<Self> {
        match id.trim() {
            "introduction" | "intro" => Some(Chapter::Introduction),
            "chapter-one" | "chapter1" => Some(Chapter::ChapterOne),
            "chapter-two" | "chapter2" => Some(Chapter::ChapterTwo),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Chapter::Introduction => INTRODUCTION_TITLE,
            Chapter::ChapterOne => "الفصل الأول",
            Chapter::ChapterTwo => "الفصل الثاني: مساهمة الاتفاقية الجماعية في تسيير العلاقات المهنية",
        }
    }

    /// Page-range label shown next to the chapter in the form.
    pub fn pages_label(self) -> &'static str {
        match self {
            Chapter::Introduction => "2 صفحات",
            Chapter::ChapterOne | Chapter::ChapterTwo => "25-30 صفحة",
        }
    }

    /// Prefix shared by every section id of this chapter.
    fn section_prefix(self) -> Option<&'static str> {
        match self {
            Chapter::Introduction => None,
            Chapter::ChapterOne => Some("ch1_"),
            Chapter::ChapterTwo => Some("ch2_"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// مبحث — top-level section, 12 pages.
    Section,
    /// مطلب — sub-section, 8 pages.
    Subsection,
}

impl SectionKind {
    pub fn of(id: &str) -> Self {
        if id.contains(SUBSECTION_MARKER) {
            SectionKind::Subsection
        } else {
            SectionKind::Section
        }
    }

    pub fn target_pages(self) -> u32 {
        match self {
            SectionKind::Section => 12,
            SectionKind::Subsection => 8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionEntry {
    pub id: &'static str,
    pub title: &'static str,
}

impl SectionEntry {
    pub fn kind(&self) -> SectionKind {
        SectionKind::of(self.id)
    }
}

/// Every section the document has, in reading order. Each section entry is
/// followed by its sub-sections.
pub const SECTIONS: &[SectionEntry] = &[
    SectionEntry { id: "ch1_mb1", title: "المبحث الأول: الإطار العام للاتفاقية الجماعية" },
    SectionEntry { id: "ch1_mb1_sub0", title: "المطلب الأول: تعريف الاتفاقية وخصائصها" },
    SectionEntry { id: "ch1_mb1_sub1", title: "المطلب الثاني: شروطها وأنواعها وأطرافها" },
    SectionEntry { id: "ch1_mb1_sub2", title: "المطلب الثالث: مجال تطبيق الاتفاقية ومضمونها" },
    SectionEntry { id: "ch1_mb2", title: "المبحث الثاني: العلاقات المهنية داخل المؤسسة" },
    SectionEntry { id: "ch1_mb2_sub0", title: "المطلب الأول: مفهوم العلاقات المهنية وأبعادها" },
    SectionEntry { id: "ch1_mb2_sub1", title: "المطلب الثاني: أهدافها وأهميتها" },
    SectionEntry { id: "ch1_mb2_sub2", title: "المطلب الثالث: عوامل تفكك العلاقات المهنية" },
    SectionEntry { id: "ch2_mb1", title: "المبحث الأول: الاتفاقية الجماعية وتنظيم شروط العمل" },
    SectionEntry {
        id: "ch2_mb1_sub0",
        title: "المطلب الأول: تنظيم الزمن والظروف المهنية (الوقت، الإجازة، السلامة)",
    },
    SectionEntry { id: "ch2_mb1_sub1", title: "المطلب الثاني: تحديد الأجور، الامتيازات، التحفيزات" },
    SectionEntry { id: "ch2_mb1_sub2", title: "المطلب الثالث: تحديد حقوق والتزامات طرفي علاقة العمل" },
];

pub fn find_section(id: &str) -> Option<&'static SectionEntry> {
    SECTIONS.iter().find(|entry| entry.id == id)
}

// ────────────────────────────────────────────────────────────────────────────
// Outline
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct SubsectionOutline {
    pub id: &'static str,
    pub title: &'static str,
    pub target_pages: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionOutline {
    pub id: &'static str,
    pub title: &'static str,
    pub target_pages: u32,
    pub subsections: Vec<SubsectionOutline>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChapterOutline {
    pub id: Chapter,
    pub title: &'static str,
    pub pages: &'static str,
    pub sections: Vec<SectionOutline>,
}

/// Builds the chapter → section → sub-section tree from `SECTIONS`.
pub fn outline() -> Vec<ChapterOutline> {
    Chapter::ALL
        .iter()
        .map(|&chapter| ChapterOutline {
            id: chapter,
            title: chapter.title(),
            pages: chapter.pages_label(),
            sections: chapter
                .section_prefix()
                .map(sections_with_prefix)
                .unwrap_or_default(),
        })
        .collect()
}

fn sections_with_prefix(prefix: &str) -> Vec<SectionOutline> {
    let mut sections: Vec<SectionOutline> = Vec::new();

    for entry in SECTIONS.iter().filter(|e| e.id.starts_with(prefix)) {
        match entry.kind() {
            SectionKind::Section => sections.push(SectionOutline {
                id: entry.id,
                title: entry.title,
                target_pages: SectionKind::Section.target_pages(),
                subsections: Vec::new(),
            }),
            SectionKind::Subsection => {
                let parent_id = entry
                    .id
                    .split(SUBSECTION_MARKER)
                    .next()
                    .unwrap_or(entry.id);
                if let Some(parent) = sections.iter_mut().find(|s| s.id == parent_id) {
                    parent.subsections.push(SubsectionOutline {
                        id: entry.id,
                        title: entry.title,
                        target_pages: SectionKind::Subsection.target_pages(),
                    });
                }
            }
        }
    }

    sections
}
