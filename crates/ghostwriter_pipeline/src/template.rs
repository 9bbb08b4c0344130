//! Schema templates for structured analysis.
//!
//! Each template is a nested JSON object whose leaves are typed
//! placeholders (0 for numbers, "" for strings, [] for lists). The
//! template is embedded verbatim in the prompt and later drives
//! conformance, so the model's reply is validated against the exact shape
//! the renderer expects.

use ghostwriter_core::WritingMetric;
use serde_json::{Value, json};

/// Expected shape of a personality-quiz analysis.
pub fn personality_template() -> Value {
    json!({
        "overallProfile": {
            "primaryStyle": "",
            "secondaryStyle": "",
            "description": "",
            "strengths": []
        },
        "writingApproach": {
            "preparation": "",
            "process": "",
            "description": ""
        },
        "environmentalFactors": {
            "optimalConditions": "",
            "productivityPatterns": "",
            "description": ""
        },
        "creativeProcess": {
            "ideaGeneration": "",
            "blockHandling": "",
            "description": ""
        },
        "goalsAndImpact": {
            "primaryGoal": "",
            "audienceConnection": "",
            "description": ""
        },
        "recommendations": []
    })
}

/// Expected shape of a writing-sample analysis.
///
/// The metric keys match the serde form of
/// [`ghostwriter_core::WritingMetrics`], so the conformed section
/// deserializes directly into the five-metric group.
pub fn writing_template() -> Value {
    let mut metrics = serde_json::Map::new();
    for metric in WritingMetric::all() {
        metrics.insert(
            metric.to_string(),
            json!({ "score": 0, "examples": [], "suggestions": [] }),
        );
    }

    json!({
        "writingMetrics": Value::Object(metrics),
        "styleAnalysis": {
            "strengths": [],
            "characteristics": [],
            "description": ""
        },
        "contentAnalysis": {
            "structure": "",
            "clarity": "",
            "engagement": ""
        },
        "recommendations": []
    })
}
