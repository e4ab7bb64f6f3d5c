//! chem-autotutor
//!
//! Genera un mini tutorial para una molécula a partir de un nombre IUPAC,
//! SMILES, InChI o una fórmula:
//! - `config` carga la configuración desde el entorno (`CONFIG`).
//! - `tutorial` elige el pipeline y lo ejecuta sobre `chem_core`.
//! - `errors` agrupa los fallos de una corrida.

pub mod config;
pub mod errors;
pub mod tutorial;

pub use config::{AppConfig, CONFIG};
pub use errors::TutorialError;
pub use tutorial::{Plan, Tutorial, TutorialReport};
