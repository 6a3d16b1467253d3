//! Gemini REST wire types.
//!
//! Only the fields this service reads or writes are modeled; everything
//! else in the provider's responses is ignored.

use serde::{Deserialize, Serialize};
use serde_json::json;

use devhub_core::import::StructuredProject;
use devhub_core::project::ALL_CATEGORIES;

use crate::AiError;

/// One text part of a content block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// A role-tagged content block ("user" or "model").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part { text: text.into() }],
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Some("model".to_string()),
            parts: vec![Part { text: text.into() }],
        }
    }

    /// System instructions carry no role.
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// Request body for `generateContent` / `streamGenerateContent`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<serde_json::Value>,
}

/// Response body for `generateContent`, and the shape of each SSE chunk
/// on the streaming endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateResponse {
    /// Concatenate all text parts of the first candidate. Empty when
    /// the chunk carries no text (e.g. a safety or usage frame).
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

/// Generation config for chat turns (original tuning: 0.7 / 0.95).
pub fn chat_generation_config() -> serde_json::Value {
    json!({
        "temperature": 0.7,
        "topP": 0.95,
    })
}

/// Generation config forcing schema-conformant JSON output for the
/// structuring call: an array of project drafts whose category is
/// restricted to the closed enum (the "All" sentinel is not offered).
pub fn structuring_generation_config() -> serde_json::Value {
    let categories: Vec<&str> = ALL_CATEGORIES.iter().map(|c| c.as_str()).collect();
    json!({
        "responseMimeType": "application/json",
        "responseSchema": {
            "type": "ARRAY",
            "items": {
                "type": "OBJECT",
                "properties": {
                    "title": { "type": "STRING" },
                    "description": { "type": "STRING" },
                    "category": { "type": "STRING", "enum": categories },
                    "tags": { "type": "ARRAY", "items": { "type": "STRING" } },
                    "repo_url": { "type": "STRING" },
                    "demo_url": { "type": "STRING" }
                },
                "required": ["title", "description", "category", "tags"]
            }
        }
    })
}

/// Parse the structuring response text into drafts.
///
/// Any deviation from the schema fails the whole batch; there is no
/// partial recovery from malformed structured output.
pub fn parse_structured_output(text: &str) -> Result<Vec<StructuredProject>, AiError> {
    serde_json::from_str(text).map_err(|e| AiError::MalformedOutput(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use devhub_core::project::Category;

    #[test]
    fn test_response_text_concatenates_parts() {
        let response: GenerateResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "text": "Hello " }, { "text": "world" }]
                }
            }]
        }))
        .unwrap();
        assert_eq!(response.text(), "Hello world");
    }

    #[test]
    fn test_response_without_candidates_is_empty_text() {
        let response: GenerateResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(response.text(), "");
    }

    #[test]
    fn test_parse_structured_output_valid() {
        let text = r#"[
            {
                "title": "Neon Shop",
                "description": "Headless storefront.",
                "category": "E-commerce",
                "tags": ["Next.js", "Stripe"],
                "repo_url": "https://github.com/u/neon-shop"
            }
        ]"#;
        let drafts = parse_structured_output(text).unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].category, Category::Ecommerce);
        assert_eq!(drafts[0].demo_url, None);
    }

    #[test]
    fn test_parse_structured_output_bad_category_fails_batch() {
        let text = r#"[
            { "title": "A", "description": "d", "category": "E-commerce", "tags": [] },
            { "title": "B", "description": "d", "category": "Sorcery", "tags": [] }
        ]"#;
        // One bad entry poisons the whole batch.
        assert!(matches!(
            parse_structured_output(text),
            Err(AiError::MalformedOutput(_))
        ));
    }

    #[test]
    fn test_parse_structured_output_non_json_fails() {
        assert!(matches!(
            parse_structured_output("I'd be happy to help!"),
            Err(AiError::MalformedOutput(_))
        ));
    }

    #[test]
    fn test_structuring_schema_excludes_all_sentinel() {
        let config = structuring_generation_config();
        let enum_values = config["responseSchema"]["items"]["properties"]["category"]["enum"]
            .as_array()
            .unwrap();
        assert_eq!(enum_values.len(), 6);
        assert!(!enum_values.iter().any(|v| v == "All"));
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let request = GenerateRequest {
            contents: vec![Content::user("hi")],
            system_instruction: Some(Content::system("be brief")),
            generation_config: Some(chat_generation_config()),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("systemInstruction").is_some());
        assert!(value.get("generationConfig").is_some());
        assert!(value["systemInstruction"].get("role").is_none());
    }
}
