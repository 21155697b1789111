//! Prompt construction for the chat-completion request.

use serde_json::Number;

use crate::api::{GenerationRequest, StudySetType};

const PREAMBLE: &str = "You are an expert educator.";

const JSON_ONLY: &str =
    "Reply ONLY with a single valid JSON object: no markdown, no backticks, no extra text.";

/// Render a JSON number as a JavaScript template literal would: integral floats lose their
/// fractional part (`5.0` prints `5`).
pub fn format_count(count: &Number) -> String {
    match count.as_f64() {
        Some(value) if count.is_f64() && value.is_finite() && value.fract() == 0.0 => {
            format!("{value:.0}")
        }
        _ => count.to_string(),
    }
}

/// System instruction for the requested kind of material.
pub fn system_prompt(kind: StudySetType, count: &Number) -> String {
    let num_questions = format_count(count);
    match kind {
        StudySetType::Flashcards => format!(
            "{PREAMBLE} Create exactly {num_questions} flashcards from the provided content.\n\
             {JSON_ONLY}\n\
             The format must be:\n\
             {{\"items\": [{{\"front\": \"question\", \"back\": \"answer\"}}]}}\n\
             Flashcards must be clear, concise and useful for studying."
        ),
        StudySetType::QuizMultiple => format!(
            "{PREAMBLE} Create exactly {num_questions} multiple-choice questions from the provided content.\n\
             {JSON_ONLY}\n\
             The format must be:\n\
             {{\"items\": [{{\"question\": \"question\", \"options\": [\"option1\", \"option2\", \"option3\", \"option4\"], \"correct_answer\": \"correct_option\"}}]}}\n\
             Every question must have exactly 4 options. The correct_answer must be one of the options."
        ),
        StudySetType::QuizOpen => format!(
            "{PREAMBLE} Create exactly {num_questions} open-ended questions from the provided content.\n\
             {JSON_ONLY}\n\
             The format must be:\n\
             {{\"items\": [{{\"question\": \"question\", \"correct_answer\": \"correct_answer\"}}]}}\n\
             Answers must be concise but complete."
        ),
    }
}

/// User message wrapping the material to study.
pub fn user_prompt(request: &GenerationRequest) -> String {
    if request.is_file {
        let file_type = request.file_type.as_deref().unwrap_or("unknown");
        format!(
            "This is a base64-encoded {file_type} file. Analyze its content directly and generate the study material: {}",
            request.content
        )
    } else {
        format!(
            "Generate study material from this text:\n\n{}",
            request.content
        )
    }
}
