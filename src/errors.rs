use std::io;
use std::path::PathBuf;

use chem_adapters::RenderError;
use chem_core::CoreEngineError;
use chem_domain::DomainError;
use chemengine::EngineError;
use thiserror::Error;

/// Error de una corrida completa del generador.
#[derive(Debug, Error)]
pub enum TutorialError {
    #[error("Entrada inválida: {0}")]
    Input(#[from] DomainError),
    #[error("Error de plantillas: {0}")]
    Templates(#[from] RenderError),
    #[error("No se pudo iniciar el motor químico: {0}")]
    Engine(#[from] EngineError),
    #[error("Fallo del pipeline: {0}")]
    Flow(#[from] CoreEngineError),
    #[error("No se pudo crear el directorio de salida {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TutorialError {
    /// Step que falló, si el error vino del pipeline.
    pub fn failed_step(&self) -> Option<&str> {
        match self {
            TutorialError::Flow(e) => e.failed_step(),
            _ => None,
        }
    }
}
