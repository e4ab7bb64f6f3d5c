//! Conocimiento químico del dominio: entradas, fórmulas, DU, hechos,
//! slugs y narrativa. Las operaciones sobre estructuras se delegan en un
//! `chemengine::StructureToolkit`.
pub mod error;
pub mod facts;
pub mod formula;
pub mod input;
pub mod narrative;
pub mod slug;
pub mod structure;
pub mod unsaturation;

pub use error::DomainError;
pub use facts::{format_mass, format_unsaturation, round_mass, FactSet, Facts, NOT_AVAILABLE};
pub use formula::{ElementCounts, HALOGENS};
pub use input::MoleculeInput;
pub use narrative::{bullets_from_name, caption_timeline, narration_lines, teaching_bullets, to_srt, CaptionBlock,
                    Narrative, FORMULA_ONLY_BULLETS};
pub use slug::slugify;
pub use structure::{build_structure, Structure, StructureText};
pub use unsaturation::degree_of_unsaturation;
