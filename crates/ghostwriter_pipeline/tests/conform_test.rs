//! Tests for template conformance.

use ghostwriter_pipeline::{conform_to_template, writing_template};
use serde_json::json;

#[test]
fn conforming_input_passes_through() {
    let template = json!({
        "styleAnalysis": { "description": "", "strengths": [] },
        "recommendations": []
    });
    let actual = json!({
        "styleAnalysis": { "description": "vivid", "strengths": ["imagery"] },
        "recommendations": ["read poetry"]
    });

    let conformed = conform_to_template(&template, &actual);
    assert_eq!(conformed, actual);
}

#[test]
fn missing_keys_take_template_defaults() {
    let template = json!({
        "overallProfile": { "primaryStyle": "", "strengths": [] },
        "recommendations": []
    });
    let actual = json!({ "overallProfile": { "primaryStyle": "narrative" } });

    let conformed = conform_to_template(&template, &actual);
    assert_eq!(conformed["overallProfile"]["primaryStyle"], "narrative");
    assert_eq!(conformed["overallProfile"]["strengths"], json!([]));
    assert_eq!(conformed["recommendations"], json!([]));
}

#[test]
fn unknown_keys_are_dropped() {
    let template = json!({ "description": "" });
    let actual = json!({ "description": "ok", "extra": "ignored" });

    let conformed = conform_to_template(&template, &actual);
    assert_eq!(conformed, json!({ "description": "ok" }));
}

#[test]
fn mistyped_leaves_fall_back() {
    let template = json!({ "score": 0, "description": "", "examples": [] });
    let actual = json!({ "score": "eighty", "description": 42, "examples": "none" });

    let conformed = conform_to_template(&template, &actual);
    assert_eq!(conformed, template);
}

#[test]
fn scores_are_clamped_to_range() {
    let template = json!({ "high": 0, "low": 0, "float": 0 });
    let actual = json!({ "high": 250, "low": -3, "float": 87.6 });

    let conformed = conform_to_template(&template, &actual);
    assert_eq!(conformed["high"], 100);
    assert_eq!(conformed["low"], 0);
    assert_eq!(conformed["float"], 88);
}

#[test]
fn output_always_matches_writing_template_shape() {
    // Even an empty reply conforms to the full template.
    let template = writing_template();
    let conformed = conform_to_template(&template, &json!({}));
    assert_eq!(conformed, template);

    let metrics = conformed["writingMetrics"].as_object().expect("object");
    assert_eq!(metrics.len(), 5);
    for section in metrics.values() {
        assert_eq!(section["score"], 0);
    }
}

#[test]
fn non_string_list_elements_are_dropped() {
    let template = json!({ "items": [] });
    let actual = json!({ "items": ["keep", 7, {"no": true}, "also keep"] });

    let conformed = conform_to_template(&template, &actual);
    assert_eq!(conformed["items"], json!(["keep", "also keep"]));
}
