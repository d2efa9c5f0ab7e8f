use crate::llm::types::Content;

/// Persona and style rules sent as the first segment of every request.
pub const SYSTEM_INSTRUCTION: &str = "You are a helpful FAQ answerer bot. \
You can answer questions from the user in a friendly manner. \
Rules: Answers must be brief, polite, and plain-spoken.";

/// Label prefixed to the literal user question in the second segment.
pub const QUESTION_LABEL: &str = "User's question: ";

/// Assemble the two-segment request: the fixed system instruction followed by
/// the labelled user question, in that order.
pub fn build_prompt(question: &str) -> Vec<Content> {
    vec![
        Content::user(SYSTEM_INSTRUCTION),
        Content::user(format!("{}{}", QUESTION_LABEL, question)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_has_two_ordered_segments() {
        let prompt = build_prompt("What is the refund policy?");
        assert_eq!(prompt.len(), 2);
        assert_eq!(prompt[0].parts[0].text, SYSTEM_INSTRUCTION);
        assert_eq!(
            prompt[1].parts[0].text,
            "User's question: What is the refund policy?"
        );
    }

    #[test]
    fn test_question_passed_through_verbatim() {
        let prompt = build_prompt("  spaced?  ");
        assert!(prompt[1].parts[0].text.ends_with("  spaced?  "));
    }

    #[test]
    fn test_segments_use_user_role() {
        for content in build_prompt("q") {
            assert_eq!(content.role, "user");
        }
    }
}
