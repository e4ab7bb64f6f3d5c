use std::path::PathBuf;
use std::process::ExitStatus;

use chemengine::EngineError;
use thiserror::Error;

/// Fallo del traductor nombre -> SMILES.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("no se pudo lanzar el traductor `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("el traductor terminó con {status}: {stderr}")]
    ProcessFailed { status: ExitStatus, stderr: String },

    #[error("el traductor no devolvió SMILES para `{0}`")]
    EmptyResult(String),

    #[error("error de E/S en archivos temporales del traductor: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("la plantilla `{template}` usa `${{{placeholder}}}` sin valor asignado")]
    MissingBinding { template: String, placeholder: String },

    #[error("no se pudo leer la plantilla {path}: {source}")]
    TemplateIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no se pudo escribir {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Fallo generando geometría 3D o depicción 2D.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("no se pudo escribir {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
