//! Heuristic page classification: normalizer, keyword tables, and the three
//! classifiers (industry, company size, location), plus the pipeline that
//! sequences fetch → normalize → extract → classify.
//!
//! Classification is a pure function of the normalized text and the entity
//! list; nothing here carries state across requests.

pub mod company_size;
pub mod industry;
pub mod keywords;
pub mod location;
pub mod normalize;
pub mod pipeline;

pub use normalize::text_from_html;
pub use pipeline::{Pipeline, PipelineError};
