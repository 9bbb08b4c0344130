//! Tests for Markdown rendering.

use ghostwriter_pipeline::{
    conform_to_template, personality_template, render_personality, render_writing,
    writing_template,
};
use serde_json::json;

#[test]
fn personality_rendering_is_deterministic() {
    let data = conform_to_template(
        &personality_template(),
        &json!({
            "overallProfile": {
                "primaryStyle": "Lyrical",
                "description": "Writes toward feeling.",
                "strengths": ["imagery"]
            },
            "recommendations": ["Trust the first draft"]
        }),
    );

    let first = render_personality(&data);
    let second = render_personality(&data);
    assert_eq!(first, second);
}

#[test]
fn personality_document_has_six_sections() {
    let data = conform_to_template(&personality_template(), &json!({}));
    let rendered = render_personality(&data);

    for section in [
        "## Overall Profile",
        "## Writing Approach",
        "## Environmental Factors",
        "## Creative Process",
        "## Goals and Impact",
        "## Recommendations",
    ] {
        assert!(rendered.contains(section), "missing section {}", section);
    }
}

#[test]
fn rendering_never_fails_on_conformed_defaults() {
    // The whole point of conformance: an empty model reply still renders.
    let writing = conform_to_template(&writing_template(), &json!({}));
    let rendered = render_writing(&writing);

    assert!(rendered.contains("# Writing Style Analysis"));
    assert!(rendered.contains("### Optimistic Tone - 0/100"));
    assert!(rendered.contains("### Conversational Style - 0/100"));
}

#[test]
fn list_fields_render_as_bullets() {
    let data = conform_to_template(
        &personality_template(),
        &json!({
            "overallProfile": { "strengths": ["clarity", "pace"] }
        }),
    );
    let rendered = render_personality(&data);

    assert!(rendered.contains("**Strengths:**\n- clarity\n- pace\n"));
}
