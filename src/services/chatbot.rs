use crate::{error::AppError, message::ChatRequest};

use super::{generator::TextGenerator, prompt::build_prompt};

/// Validates one request and asks the generator for an answer, exactly once.
pub async fn generate_reply(
    generator: &dyn TextGenerator,
    request: &ChatRequest,
) -> Result<String, AppError> {
    let (question, age_group) = required_fields(request)?;

    let prompt = build_prompt(question, age_group);
    let reply = generator.generate(&prompt).await?;

    tracing::info!(age_group, reply_len = reply.len(), "Generated reply");
    Ok(reply)
}

/// Both fields must be present and non-empty. Whitespace counts as content.
fn required_fields(request: &ChatRequest) -> Result<(&str, &str), AppError> {
    match (request.question.as_deref(), request.age.as_deref()) {
        (Some(question), Some(age)) if !question.is_empty() && !age.is_empty() => {
            Ok((question, age))
        }
        _ => Err(AppError::MissingField),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(question: Option<&str>, age: Option<&str>) -> ChatRequest {
        ChatRequest {
            question: question.map(str::to_string),
            age: age.map(str::to_string),
        }
    }

    #[test]
    fn rejects_absent_or_empty_fields() {
        let cases = [
            request(None, Some("19-24")),
            request(Some("q"), None),
            request(Some(""), Some("19-24")),
            request(Some("q"), Some("")),
            request(None, None),
        ];
        for case in &cases {
            assert!(matches!(required_fields(case), Err(AppError::MissingField)));
        }
    }

    #[test]
    fn keeps_whitespace_question_and_unknown_age() {
        let req = request(Some("  "), Some("martian"));
        assert_eq!(required_fields(&req).unwrap(), ("  ", "martian"));
    }
}
