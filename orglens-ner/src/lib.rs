//! GLiNER-backed named-entity recognition.
//!
//! The production [`EntityExtractor`] runs a GLiNER span model through ONNX
//! Runtime (via gline-rs). The model and tokenizer are loaded from a
//! configured directory at process start; any load failure is surfaced to
//! the caller, which treats it as fatal. Per-request inference errors are
//! reported through [`ExtractError`].
//!
//! The ONNX stack is heavy, so it sits behind the `embedded-ner` feature.
//! Builds without the feature still compile; [`load`] then fails, which
//! keeps the fail-fast startup contract intact.

use std::path::Path;
use std::sync::Arc;

use orglens_common::EntityExtractor;

#[cfg(feature = "embedded-ner")]
mod backend {
    use std::path::Path;

    use anyhow::{anyhow, Context, Result};
    use gliner::model::input::text::TextInput;
    use gliner::model::params::Parameters;
    use gliner::model::pipeline::span::SpanMode;
    use gliner::model::GLiNER;
    use orglens_common::{Entity, EntityExtractor, EntityKind, ExtractError};
    use orp::params::RuntimeParameters;
    use tracing::{debug, info};

    /// Entity labels the model is queried for.
    const LABELS: [&str; 2] = ["organization", "geopolitical entity"];
    const MIN_CONFIDENCE: f32 = 0.5;

    pub struct GlinerExtractor {
        model: GLiNER<SpanMode>,
    }

    impl GlinerExtractor {
        /// Load `model.onnx` and `tokenizer.json` from `model_dir`.
        pub fn load(model_dir: &Path) -> Result<Self> {
            let model_path = model_dir.join("model.onnx");
            let tokenizer_path = model_dir.join("tokenizer.json");
            for path in [&model_path, &tokenizer_path] {
                if !path.exists() {
                    return Err(anyhow!("model file not found: {}", path.display()));
                }
            }

            let model = GLiNER::<SpanMode>::new(
                Parameters::default(),
                RuntimeParameters::default(),
                tokenizer_path
                    .to_str()
                    .context("tokenizer path is not valid UTF-8")?,
                model_path
                    .to_str()
                    .context("model path is not valid UTF-8")?,
            )
            .map_err(|e| anyhow!("failed to initialize GLiNER model: {e}"))?;

            info!(dir = %model_dir.display(), "ner.model.loaded");
            Ok(Self { model })
        }
    }

    impl EntityExtractor for GlinerExtractor {
        fn extract_entities(&self, text: &str) -> Result<Vec<Entity>, ExtractError> {
            let input = TextInput::from_str(&[text], &LABELS)
                .map_err(|e| ExtractError::Inference(e.to_string()))?;

            let output = self
                .model
                .inference(input)
                .map_err(|e| ExtractError::Inference(e.to_string()))?;

            let mut entities = Vec::new();
            for spans in &output.spans {
                for span in spans {
                    if span.probability() < MIN_CONFIDENCE {
                        continue;
                    }
                    let kind = match span.class().to_lowercase().as_str() {
                        "organization" => EntityKind::Organization,
                        "geopolitical entity" => EntityKind::GeoPolitical,
                        _ => EntityKind::Other,
                    };
                    let span_text = span.text().trim();
                    if !span_text.is_empty() {
                        entities.push(Entity::new(span_text, kind));
                    }
                }
            }

            debug!(count = entities.len(), "ner.extracted");
            Ok(entities)
        }
    }
}

/// Load the entity-recognition backend, or fail so the caller can abort
/// startup. The service never runs without a model.
#[cfg(feature = "embedded-ner")]
pub fn load(model_dir: &Path) -> anyhow::Result<Arc<dyn EntityExtractor>> {
    let extractor = backend::GlinerExtractor::load(model_dir)?;
    Ok(Arc::new(extractor))
}

/// Built without the `embedded-ner` feature: there is no backend, so
/// loading always fails and the server refuses to start.
#[cfg(not(feature = "embedded-ner"))]
pub fn load(_model_dir: &Path) -> anyhow::Result<Arc<dyn EntityExtractor>> {
    anyhow::bail!(
        "no entity-recognition backend in this build; recompile with --features embedded-ner"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "embedded-ner"))]
    #[test]
    fn load_fails_without_a_backend() {
        let err = load(Path::new("models")).err().unwrap();
        assert!(err.to_string().contains("embedded-ner"));
    }

    #[cfg(feature = "embedded-ner")]
    #[test]
    fn load_fails_fast_on_missing_model_files() {
        let err = load(Path::new("/nonexistent/model/dir")).err().unwrap();
        assert!(err.to_string().contains("not found"));
    }
}
