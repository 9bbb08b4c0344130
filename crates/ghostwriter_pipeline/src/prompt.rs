//! Prompt composition.
//!
//! Prompts are assembled deterministically from caller input: two
//! submissions with the same fields produce the same messages (the model
//! itself remains stochastic).

use ghostwriter_core::{ContentKind, Message, QuizAnswer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Messages for a free-text draft generation.
///
/// Styling parameters are merged verbatim into the user message as
/// labeled lines, in key order.
pub fn draft_messages(
    kind: ContentKind,
    title: &str,
    prompt: &str,
    parameters: &BTreeMap<String, Value>,
) -> Vec<Message> {
    let system = format!(
        "You are a professional {} writer. Write an engaging, well-structured {} \
         that follows the requested styling exactly. Respond with the {} text only, \
         no preamble.",
        kind.phrase(),
        kind.phrase(),
        kind.phrase(),
    );

    let mut user = format!("Title: {}\n\nPrompt: {}\n", title, prompt);
    if !parameters.is_empty() {
        user.push_str("\nStyling parameters:\n");
        for (key, value) in parameters {
            user.push_str(&format!("- {}: {}\n", key, render_parameter(value)));
        }
    }

    vec![Message::system(system), Message::user(user)]
}

/// Messages for the personality-quiz analysis.
///
/// Answers must already be in canonical question order; each is labeled
/// with its question so the model never has to guess the binding.
pub fn personality_messages(answers: &[QuizAnswer], template: &Value) -> Vec<Message> {
    let system = "You are an expert writing coach who analyzes a writer's personality \
                  from how they describe their own practice. Respond with a single JSON \
                  object and nothing else."
        .to_string();

    let mut user = String::from("Analyze this writer's personality from their quiz answers:\n\n");
    for (index, answer) in answers.iter().enumerate() {
        user.push_str(&format!(
            "{}. {}: {}\n",
            index + 1,
            answer.question().label(),
            answer.answer()
        ));
    }
    user.push_str(&template_instruction(template));

    vec![Message::system(system), Message::user(user)]
}

/// Messages for the writing-sample analysis.
pub fn writing_messages(prompt: &str, response: &str, template: &Value) -> Vec<Message> {
    let system = "You are an expert writing coach who scores writing samples on fixed \
                  stylistic dimensions. Score each dimension 0-100 and quote real \
                  excerpts as examples. Respond with a single JSON object and nothing \
                  else."
        .to_string();

    let user = format!(
        "Analyze this writing sample.\n\nWriting prompt:\n{}\n\nWriter's response:\n{}\n{}",
        prompt,
        response,
        template_instruction(template)
    );

    vec![Message::system(system), Message::user(user)]
}

fn template_instruction(template: &Value) -> String {
    format!(
        "\nFill in each field of this JSON structure with your analysis. \
         Keep the structure exactly as shown, changing only the placeholder values:\n{}\n",
        serde_json::to_string_pretty(template).unwrap_or_else(|_| template.to_string())
    )
}

fn render_parameter(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
