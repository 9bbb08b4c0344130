//! Markdown rendering of conformed analysis data.
//!
//! Pure and deterministic: identical input yields identical Markdown.
//! Input has already passed conformance, so every key lookup here falls
//! back to an empty default only for safety, never by expectation.

use ghostwriter_core::WritingMetric;
use serde_json::Value;

/// Render a personality analysis as Markdown.
///
/// Six fixed sections under `# Writing Personality Analysis`.
pub fn render_personality(data: &Value) -> String {
    let mut out = String::from("# Writing Personality Analysis\n");

    let profile = &data["overallProfile"];
    push_heading(&mut out, "Overall Profile");
    push_labeled(&mut out, "Primary Style", str_of(&profile["primaryStyle"]));
    push_labeled(&mut out, "Secondary Style", str_of(&profile["secondaryStyle"]));
    push_paragraph(&mut out, str_of(&profile["description"]));
    push_bullets(&mut out, "Strengths", &profile["strengths"]);

    let approach = &data["writingApproach"];
    push_heading(&mut out, "Writing Approach");
    push_labeled(&mut out, "Preparation", str_of(&approach["preparation"]));
    push_labeled(&mut out, "Process", str_of(&approach["process"]));
    push_paragraph(&mut out, str_of(&approach["description"]));

    let environment = &data["environmentalFactors"];
    push_heading(&mut out, "Environmental Factors");
    push_labeled(
        &mut out,
        "Optimal Conditions",
        str_of(&environment["optimalConditions"]),
    );
    push_labeled(
        &mut out,
        "Productivity Patterns",
        str_of(&environment["productivityPatterns"]),
    );
    push_paragraph(&mut out, str_of(&environment["description"]));

    let creative = &data["creativeProcess"];
    push_heading(&mut out, "Creative Process");
    push_labeled(&mut out, "Idea Generation", str_of(&creative["ideaGeneration"]));
    push_labeled(&mut out, "Block Handling", str_of(&creative["blockHandling"]));
    push_paragraph(&mut out, str_of(&creative["description"]));

    let goals = &data["goalsAndImpact"];
    push_heading(&mut out, "Goals and Impact");
    push_labeled(&mut out, "Primary Goal", str_of(&goals["primaryGoal"]));
    push_labeled(
        &mut out,
        "Audience Connection",
        str_of(&goals["audienceConnection"]),
    );
    push_paragraph(&mut out, str_of(&goals["description"]));

    push_heading(&mut out, "Recommendations");
    push_list(&mut out, &data["recommendations"]);

    out
}

/// Render a writing-sample analysis as Markdown.
///
/// Four fixed sections under `# Writing Style Analysis`, the first with
/// one subsection per metric.
pub fn render_writing(data: &Value) -> String {
    let mut out = String::from("# Writing Style Analysis\n");

    push_heading(&mut out, "Writing Metrics");
    let metrics = &data["writingMetrics"];
    for metric in WritingMetric::all() {
        let section = &metrics[metric.to_string().as_str()];
        let score = section["score"].as_i64().unwrap_or(0);
        out.push_str(&format!("\n### {} - {}/100\n", metric.label(), score));
        push_bullets(&mut out, "Examples", &section["examples"]);
        push_bullets(&mut out, "Suggestions", &section["suggestions"]);
    }

    let style = &data["styleAnalysis"];
    push_heading(&mut out, "Style Analysis");
    push_paragraph(&mut out, str_of(&style["description"]));
    push_bullets(&mut out, "Strengths", &style["strengths"]);
    push_bullets(&mut out, "Characteristics", &style["characteristics"]);

    let content = &data["contentAnalysis"];
    push_heading(&mut out, "Content Analysis");
    push_labeled(&mut out, "Structure", str_of(&content["structure"]));
    push_labeled(&mut out, "Clarity", str_of(&content["clarity"]));
    push_labeled(&mut out, "Engagement", str_of(&content["engagement"]));

    push_heading(&mut out, "Recommendations");
    push_list(&mut out, &data["recommendations"]);

    out
}

fn str_of(value: &Value) -> &str {
    value.as_str().unwrap_or("")
}

fn push_heading(out: &mut String, title: &str) {
    out.push_str(&format!("\n## {}\n", title));
}

fn push_labeled(out: &mut String, label: &str, value: &str) {
    if !value.is_empty() {
        out.push_str(&format!("\n**{}:** {}\n", label, value));
    }
}

fn push_paragraph(out: &mut String, text: &str) {
    if !text.is_empty() {
        out.push_str(&format!("\n{}\n", text));
    }
}

fn push_bullets(out: &mut String, label: &str, items: &Value) {
    let Some(items) = items.as_array() else {
        return;
    };
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("\n**{}:**\n", label));
    for item in items {
        out.push_str(&format!("- {}\n", str_of(item)));
    }
}

fn push_list(out: &mut String, items: &Value) {
    let Some(items) = items.as_array() else {
        return;
    };
    out.push('\n');
    for item in items {
        out.push_str(&format!("- {}\n", str_of(item)));
    }
}
