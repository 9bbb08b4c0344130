//! Shared generation settings.

/// Sampling knobs applied to every request an orchestrator sends.
///
/// # Examples
///
/// ```
/// use ghostwriter_pipeline::GenerationSettings;
///
/// let settings = GenerationSettings::builder()
///     .temperature(Some(0.8))
///     .build()
///     .expect("valid settings");
/// assert_eq!(*settings.temperature(), Some(0.8));
/// ```
#[derive(Debug, Clone, Default, PartialEq, derive_getters::Getters, derive_builder::Builder)]
pub struct GenerationSettings {
    /// Model override; the client default applies when unset
    #[builder(default)]
    model: Option<String>,
    /// Sampling temperature
    #[builder(default)]
    temperature: Option<f32>,
    /// Token budget per completion
    #[builder(default)]
    max_tokens: Option<u32>,
}

impl GenerationSettings {
    /// Returns a builder for constructing GenerationSettings.
    pub fn builder() -> GenerationSettingsBuilder {
        GenerationSettingsBuilder::default()
    }
}
