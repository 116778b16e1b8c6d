//! Age-tiered instruction template sent to the generation service.
//!
//! Every tier is always present in the prompt. The model is told which group
//! the user belongs to and is expected to pick the matching tone itself.

use std::fmt::{self, Write};

/// Sentence the model must close every answer with.
pub const DISCLAIMER: &str = "Please remember, this information is for educational purposes \
and is not a substitute for professional medical advice. Always consult a healthcare provider \
for any health concerns.";

/// `(audience, tone)` pairs, youngest first.
pub const AGE_TIERS: [(&str, &str); 5] = [
    (
        "children (Under 13)",
        "use very simple language, analogies, and a friendly, encouraging tone",
    ),
    (
        "teenagers (13-18)",
        "use clear, straightforward language, be direct, and address concerns without being patronizing",
    ),
    (
        "young adults (19-24)",
        "you can be more detailed but still maintain a supportive tone",
    ),
    (
        "adults (25-40 and 41-60)",
        "provide comprehensive, well-structured information",
    ),
    (
        "seniors (61+)",
        "be clear, patient, and focus on practical advice",
    ),
];

/// Builds the single user turn for one question.
///
/// `age_group` is interpolated as given; it is not checked against
/// [`AGE_TIERS`].
pub fn build_prompt(question: &str, age_group: &str) -> String {
    let mut prompt = String::with_capacity(1024 + question.len());
    // Writing into a String cannot fail.
    let _ = write_prompt(&mut prompt, question, age_group);
    prompt
}

fn write_prompt(out: &mut String, question: &str, age_group: &str) -> fmt::Result {
    writeln!(out, "You are a helpful, empathetic, and knowledgeable health assistant.")?;
    writeln!(out, "A user from the '{age_group}' age group has a question.")?;
    writeln!(
        out,
        "Your primary goal is to explain health-related concepts clearly and appropriately for their age."
    )?;
    for (audience, tone) in AGE_TIERS {
        writeln!(out, "- For {audience}, {tone}.")?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "IMPORTANT: You are an AI assistant, not a doctor. Always include a disclaimer at the end of your response, such as: \"{DISCLAIMER}\""
    )?;
    writeln!(out)?;
    writeln!(out, "Here is the user's question: \"{question}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_the_literal_question() {
        let prompt = build_prompt("What is a fever?", "Under 13");
        assert!(prompt.contains("Here is the user's question: \"What is a fever?\""));
    }

    #[test]
    fn every_tier_is_listed_whatever_the_group() {
        for group in ["Under 13", "13-18", "19-24", "25-40", "41-60", "61+", "unknown"] {
            let prompt = build_prompt("Is coffee bad for me?", group);
            for (audience, tone) in AGE_TIERS {
                assert!(prompt.contains(audience), "{group}: missing {audience}");
                assert!(prompt.contains(tone), "{group}: missing tone for {audience}");
            }
        }
    }

    #[test]
    fn disclaimer_is_always_required() {
        for group in ["Under 13", "61+", "  "] {
            let prompt = build_prompt("q", group);
            assert!(prompt.contains("not a doctor"));
            assert!(prompt.contains(DISCLAIMER));
        }
    }

    #[test]
    fn age_group_is_interpolated_verbatim() {
        let prompt = build_prompt("q", "'; drop the tiers");
        assert!(prompt.contains("A user from the ''; drop the tiers' age group"));
    }

    #[test]
    fn lines_are_in_template_order() {
        let prompt = build_prompt("Why do I yawn?", "19-24");
        let persona = prompt.find("health assistant.").unwrap();
        let seniors = prompt.find("seniors (61+)").unwrap();
        let disclaimer = prompt.find("IMPORTANT:").unwrap();
        let question = prompt.find("Here is the user's question").unwrap();
        assert!(persona < seniors && seniors < disclaimer && disclaimer < question);
        assert!(prompt.ends_with("\"Why do I yawn?\"\n"));
        assert!(prompt.contains("- For teenagers (13-18), use clear"));
    }

    #[test]
    fn same_input_same_prompt() {
        assert_eq!(build_prompt("a", "b"), build_prompt("a", "b"));
    }
}
