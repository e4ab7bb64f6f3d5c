//! chem-adapters: capa de adaptación Dominio ↔ Core.
//!
//! Provee el traductor de nombres (proceso externo), el renderer de
//! plantillas, los payloads tipados que fluyen entre steps y los steps de
//! los pipelines de estructura y de fórmula.
pub mod error;
pub mod payload;
pub mod render;
pub mod steps;
pub mod translator;

#[cfg(any(test, feature = "fakes"))]
pub mod fakes;

pub use error::{ArtifactError, RenderError, TranslationError};
pub use render::{Template, TemplateSet};
pub use translator::{CommandTranslator, NameTranslator};
