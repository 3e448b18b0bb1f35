// Shared prompt fragments.
// Section-specific templates live in generation/prompts.rs and pull these in
// through their `{persona}` and `{sources_only}` placeholders.

/// Opening line of every prompt: who the model is writing as.
pub const RESEARCHER_PERSONA: &str =
    "أنت باحث أكاديمي متخصص في القانون وعلاقات العمل.";

/// Restricts the model to the references the user pasted in.
pub const SOURCES_ONLY_INSTRUCTION: &str = "- استخراج المعلومات من المراجع المقدمة فقط";

/// Fills the shared placeholders of a template. Call-site specific
/// placeholders are left untouched.
pub fn with_shared_fragments(template: &str) -> String {
    template
        .replace("{persona}", RESEARCHER_PERSONA)
        .replace("{sources_only}", SOURCES_ONLY_INSTRUCTION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_fragments_filled() {
        let out = with_shared_fragments("{persona}\n{title}\n{sources_only}");
        assert!(out.starts_with(RESEARCHER_PERSONA));
        assert!(out.ends_with(SOURCES_ONLY_INSTRUCTION));
        assert!(out.contains("{title}"));
    }
}
