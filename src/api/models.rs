use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

/// Kind of study material to generate.
///
/// Unknown or missing values fall back to open questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "Option<String>")]
pub enum StudySetType {
    Flashcards,
    QuizMultiple,
    #[default]
    QuizOpen,
}

impl From<Option<String>> for StudySetType {
    fn from(value: Option<String>) -> Self {
        match value.as_deref().unwrap_or_default() {
            "flashcards" => StudySetType::Flashcards,
            "quiz_multiple" => StudySetType::QuizMultiple,
            _ => StudySetType::QuizOpen,
        }
    }
}

impl StudySetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StudySetType::Flashcards => "flashcards",
            StudySetType::QuizMultiple => "quiz_multiple",
            StudySetType::QuizOpen => "quiz_open",
        }
    }
}

/// Inbound body of a generation call.
///
/// Every field tolerates `null` or absence, and `numQuestions` takes any JSON number: the value
/// is only ever written into the prompt.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(rename = "type", default)]
    pub kind: StudySetType,
    #[serde(default)]
    pub num_questions: Option<Number>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_file: bool,
    #[serde(default)]
    pub file_type: Option<String>,
}

const DEFAULT_NUM_QUESTIONS: u32 = 10;
const DEFAULT_TITLE: &str = "Study Set";

impl GenerationRequest {
    pub fn num_questions(&self) -> Number {
        self.num_questions
            .clone()
            .unwrap_or_else(|| Number::from(DEFAULT_NUM_QUESTIONS))
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultipleChoiceItem {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl MultipleChoiceItem {
    /// Whether `correct_answer` is one of `options`.
    pub fn is_consistent(&self) -> bool {
        self.options.iter().any(|opt| *opt == self.correct_answer)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenItem {
    pub question: String,
    pub correct_answer: String,
}

/// One generated study unit.
///
/// Variant order matters for untagged decoding: a multiple-choice item also carries the
/// fields of an open item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StudyItem {
    Flashcard(Flashcard),
    MultipleChoice(MultipleChoiceItem),
    Open(OpenItem),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub items: Vec<StudyItem>,
}

impl GenerationResult {
    /// Decode a relayed response body into typed items.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn request_defaults_fill_missing_fields() {
        let req: GenerationRequest = serde_json::from_value(json!({"content": "cells"})).unwrap();
        assert_eq!(req.kind, StudySetType::QuizOpen);
        assert_eq!(req.num_questions(), Number::from(10));
        assert_eq!(req.title(), "Study Set");
        assert!(!req.is_file);
        assert!(req.file_type.is_none());
    }

    #[test]
    fn request_reads_camel_case_keys() {
        let req: GenerationRequest = serde_json::from_value(json!({
            "content": "data:application/pdf;base64,AAAA",
            "type": "quiz_multiple",
            "numQuestions": 5,
            "title": "Biology",
            "isFile": true,
            "fileType": "application/pdf"
        }))
        .unwrap();
        assert_eq!(req.kind, StudySetType::QuizMultiple);
        assert_eq!(req.num_questions(), Number::from(5));
        assert_eq!(req.title(), "Biology");
        assert!(req.is_file);
        assert_eq!(req.file_type.as_deref(), Some("application/pdf"));
    }

    #[test]
    fn unknown_type_falls_back_to_open_questions() {
        let req: GenerationRequest =
            serde_json::from_value(json!({"content": "x", "type": "essay"})).unwrap();
        assert_eq!(req.kind, StudySetType::QuizOpen);
    }

    #[test]
    fn nulls_read_as_absent_fields() {
        let req: GenerationRequest = serde_json::from_value(json!({
            "content": null,
            "type": null,
            "numQuestions": null,
            "title": null,
            "isFile": null,
            "fileType": null
        }))
        .unwrap();
        assert_eq!(req.content, "");
        assert_eq!(req.kind, StudySetType::QuizOpen);
        assert_eq!(req.num_questions(), Number::from(10));
        assert_eq!(req.title(), "Study Set");
        assert!(!req.is_file);
        assert!(req.file_type.is_none());
    }

    #[test]
    fn num_questions_accepts_any_json_number() {
        for raw in [json!(-1), json!(5.5), json!(5.0), json!(0)] {
            let req: GenerationRequest =
                serde_json::from_value(json!({"content": "x", "numQuestions": raw.clone()}))
                    .unwrap();
            assert_eq!(Value::Number(req.num_questions()), raw);
        }
    }

    #[test]
    fn result_decodes_each_item_shape() {
        let result = GenerationResult::from_value(json!({
            "items": [
                {"front": "DNA", "back": "Genetic material"},
                {"question": "Powerhouse?", "options": ["a", "b", "c", "Mitochondrion"], "correct_answer": "Mitochondrion"},
                {"question": "What is mitosis?", "correct_answer": "Cell division"}
            ]
        }))
        .unwrap();

        assert!(matches!(result.items[0], StudyItem::Flashcard(_)));
        match &result.items[1] {
            StudyItem::MultipleChoice(item) => assert!(item.is_consistent()),
            other => panic!("expected multiple choice, got {other:?}"),
        }
        assert!(matches!(result.items[2], StudyItem::Open(_)));
    }
}
