//! Common types shared across Orglens crates.
//!
//! This crate defines the classification domain model, the entity-extraction
//! capability trait, and observability helpers used throughout the Orglens
//! workspace. It is intentionally lightweight so that all crates can depend
//! on it without introducing heavy transitive costs.
//!
//! # Overview
//!
//! - [`Entity`] and [`EntityKind`]: spans produced by named-entity recognition
//! - [`EntityExtractor`]: the capability trait the pipeline depends on
//! - [`Classification`]: the three nullable fields returned to callers
//! - [`observability`]: centralised tracing/logging initialisation
use serde::{Deserialize, Serialize};

pub mod observability;

/// Coarse tag assigned to a recognized entity.
///
/// The classifiers only distinguish organizations and geopolitical entities;
/// everything else the model emits is carried as [`EntityKind::Other`] so the
/// entity sequence stays faithful to recognition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Organization,
    GeoPolitical,
    Other,
}

/// A span of text recognized by the entity model, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub kind: EntityKind,
}

impl Entity {
    pub fn new(text: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Error produced by an [`EntityExtractor`] backend.
#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    /// Model inference failed on otherwise valid input.
    #[error("entity recognition failed: {0}")]
    Inference(String),
}

/// Capability trait for named-entity recognition.
///
/// The pretrained model is treated as a black box behind this seam so the
/// classifiers can be exercised with stub implementations in tests. Inference
/// is CPU-bound, hence the synchronous signature; the pipeline moves calls
/// onto a blocking thread.
pub trait EntityExtractor: Send + Sync {
    fn extract_entities(&self, text: &str) -> Result<Vec<Entity>, ExtractError>;
}

/// Result of classifying a single page.
///
/// Each field is independently nullable: `None` means no heuristic matched,
/// which is distinct from a processing failure (the pipeline returning an
/// error).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub industry: Option<String>,
    pub company_size: Option<String>,
    pub location: Option<String>,
}
