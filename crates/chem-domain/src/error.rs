use chemengine::EngineError;
use thiserror::Error;

/// Error personalizado del dominio.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Se requiere exactamente una entrada (--name, --smiles, --inchi o --formula), recibidas {0}")]
    InputCount(usize),

    #[error("Entrada vacía para {0}")]
    EmptyInput(&'static str),

    /// La gramática SMILES/InChI no produjo un grafo válido.
    #[error("could not parse structure from {kind} input: {value}")]
    StructureParse { kind: &'static str, value: String },

    #[error(transparent)]
    Engine(#[from] EngineError),
}
