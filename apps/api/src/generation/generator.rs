//! Section Generation — resolve the selection, call the model once, wrap the text.
//!
//! Flow: resolve() → TextGenerator::generate() → GenerationResult.
//!
//! Nothing is cached or persisted; identical requests are generated again.

use serde::{Deserialize, Serialize};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::resolver::resolve;
use crate::llm_client::TextGenerator;

/// Request body for section generation.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    /// Free-form reference list. Optional on the wire so that a missing field
    /// is reported as a validation error rather than a body rejection.
    #[serde(default)]
    pub references: Option<String>,
    /// Absent or unrecognized chapters take the body-chapter path.
    #[serde(default)]
    pub chapter: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
}

/// Generated text plus the resolved section metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub content: String,
    pub section_title: String,
    pub target_pages: u32,
}

/// Resolves the section and makes exactly one generation call.
///
/// `references` must already be validated as non-blank by the caller.
pub async fn generate_section(
    generator: &dyn TextGenerator,
    chapter: &str,
    section: Option<&str>,
    references: &str,
) -> Result<GenerationResult, AppError> {
    let span = info_span!("generate_section", request_id = %Uuid::new_v4(), chapter);

    async move {
        let resolved = resolve(chapter, section, references);
        info!(
            "Resolved section '{}' ({} pages, prompt {} chars)",
            resolved.title,
            resolved.target_pages,
            resolved.prompt.chars().count()
        );

        let content = generator.generate(&resolved.prompt).await?;
        info!("Generated {} chars", content.chars().count());

        Ok::<_, AppError>(GenerationResult {
            content,
            section_title: resolved.title,
            target_pages: resolved.target_pages,
        })
    }
    .instrument(span)
    .await
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::generation::sections::INTRODUCTION_TITLE;
    use crate::llm_client::LlmError;

    /// Records every prompt it receives and replies with a canned outcome.
    pub(crate) struct RecordingGenerator {
        pub prompts: Mutex<Vec<String>>,
        reply: fn() -> Result<String, LlmError>,
    }

    impl RecordingGenerator {
        pub fn replying(reply: fn() -> Result<String, LlmError>) -> Self {
            Self {
                prompts: Mutex::new(Vec::new()),
                reply,
            }
        }

        pub fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl TextGenerator for RecordingGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            (self.reply)()
        }
    }

    #[tokio::test]
    async fn test_generate_section_wraps_text() {
        let generator = RecordingGenerator::replying(|| Ok("نص المقدمة".to_string()));

        let result = generate_section(&generator, "introduction", None, "Smith, 2020")
            .await
            .unwrap();

        assert_eq!(
            result,
            GenerationResult {
                content: "نص المقدمة".to_string(),
                section_title: INTRODUCTION_TITLE.to_string(),
                target_pages: 2,
            }
        );
        assert_eq!(generator.calls(), 1);
        assert!(generator.prompts.lock().unwrap()[0].contains("Smith, 2020"));
    }

    #[tokio::test]
    async fn test_every_call_regenerates() {
        let generator = RecordingGenerator::replying(|| Ok("x".to_string()));

        for _ in 0..2 {
            generate_section(&generator, "chapter-one", Some("ch1_mb1"), "refs")
                .await
                .unwrap();
        }

        assert_eq!(generator.calls(), 2);
    }

    #[tokio::test]
    async fn test_failure_is_not_retried() {
        let generator = RecordingGenerator::replying(|| {
            Err(LlmError::Api {
                status: 500,
                message: "down".into(),
            })
        });

        let err = generate_section(&generator, "chapter-two", Some("ch2_mb1"), "refs")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Generation(_)));
        assert_eq!(generator.calls(), 1);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let json = serde_json::to_value(GenerationResult {
            content: "c".into(),
            section_title: "t".into(),
            target_pages: 8,
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"content": "c", "sectionTitle": "t", "targetPages": 8})
        );
    }

    #[test]
    fn test_request_section_and_references_optional() {
        let req: GenerationRequest =
            serde_json::from_value(serde_json::json!({"chapter": "introduction"})).unwrap();
        assert!(req.references.is_none());
        assert!(req.section.is_none());
    }

    #[test]
    fn test_request_chapter_optional() {
        let req: GenerationRequest =
            serde_json::from_value(serde_json::json!({"references": ""})).unwrap();
        assert!(req.chapter.is_none());
        assert_eq!(req.references.as_deref(), Some(""));
    }
}
