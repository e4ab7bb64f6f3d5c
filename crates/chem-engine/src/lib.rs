//! chemengine: frontera con el motor quimioinformático externo (RDKit).
//!
//! El resto del workspace sólo conoce el trait `StructureToolkit`; `ChemEngine`
//! es la implementación de producción que delega en RDKit vía Python.
use pyo3::PyErr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod core;
pub use core::RdkitMol;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Error inicializando Python/RDKit: {0}")]
    Init(PyErr),
    #[error("Error en RDKit ({op}): {error}")]
    Call { op: &'static str, error: PyErr },
}

/// Parámetros del embedding 3D (ETKDG) y la minimización UFF posterior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedOptions {
    /// Tope de iteraciones UFF. No se verifica convergencia.
    pub max_iters: u32,
    /// `None` deja el seeding al algoritmo (corridas distintas pueden diferir).
    pub random_seed: Option<u32>,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self { max_iters: 200,
               random_seed: None }
    }
}

/// Parámetros de la depicción 2D.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepictOptions {
    pub width: u32,
    pub height: u32,
    pub kekulize: bool,
}

impl Default for DepictOptions {
    fn default() -> Self {
        Self { width: 800,
               height: 520,
               kekulize: true }
    }
}

/// Operaciones que el pipeline necesita del motor químico.
///
/// `Mol` es un handle opaco y exclusivo: las operaciones que mutan el grafo
/// lo consumen y devuelven el handle resultante.
pub trait StructureToolkit {
    type Mol;

    /// `Ok(None)` si la gramática SMILES no produce un grafo válido.
    fn parse_smiles(&self, smiles: &str) -> Result<Option<Self::Mol>, EngineError>;
    /// `Ok(None)` si el InChI no produce un grafo válido.
    fn parse_inchi(&self, inchi: &str) -> Result<Option<Self::Mol>, EngineError>;
    fn add_hydrogens(&self, mol: Self::Mol) -> Result<Self::Mol, EngineError>;
    fn canonical_smiles(&self, mol: &Self::Mol) -> Result<String, EngineError>;
    /// Fórmula compacta estilo Hill (p. ej. `C8H12Br`).
    fn formula(&self, mol: &Self::Mol) -> Result<String, EngineError>;
    fn exact_mass(&self, mol: &Self::Mol) -> Result<f64, EngineError>;
    fn embed_and_minimize(&self, mol: Self::Mol, options: &EmbedOptions) -> Result<Self::Mol, EngineError>;
    /// Serializa el grafo (con sus coordenadas) como molfile.
    fn mol_block(&self, mol: &Self::Mol) -> Result<String, EngineError>;
    /// PNG de la estructura sin hidrógenos, con coordenadas 2D recalculadas.
    fn depict_png(&self, mol: &Self::Mol, options: &DepictOptions) -> Result<Vec<u8>, EngineError>;
}

pub struct ChemEngine {
    _private: (),
}

impl ChemEngine {
    /// Inicializa Python/RDKit y devuelve una instancia de ChemEngine
    pub fn init() -> Result<Self, EngineError> {
        core::init_python().map_err(EngineError::Init)?;
        Ok(Self { _private: () })
    }
}

fn call(op: &'static str) -> impl FnOnce(PyErr) -> EngineError {
    move |error| EngineError::Call { op, error }
}

impl StructureToolkit for ChemEngine {
    type Mol = RdkitMol;

    fn parse_smiles(&self, smiles: &str) -> Result<Option<RdkitMol>, EngineError> {
        core::parse_smiles(smiles).map_err(call("parse_smiles"))
    }

    fn parse_inchi(&self, inchi: &str) -> Result<Option<RdkitMol>, EngineError> {
        core::parse_inchi(inchi).map_err(call("parse_inchi"))
    }

    fn add_hydrogens(&self, mol: RdkitMol) -> Result<RdkitMol, EngineError> {
        core::add_hs(mol).map_err(call("add_hs"))
    }

    fn canonical_smiles(&self, mol: &RdkitMol) -> Result<String, EngineError> {
        core::to_smiles(mol).map_err(call("to_smiles"))
    }

    fn formula(&self, mol: &RdkitMol) -> Result<String, EngineError> {
        core::mol_formula(mol).map_err(call("mol_formula"))
    }

    fn exact_mass(&self, mol: &RdkitMol) -> Result<f64, EngineError> {
        core::exact_mass(mol).map_err(call("exact_mass"))
    }

    fn embed_and_minimize(&self, mol: RdkitMol, options: &EmbedOptions) -> Result<RdkitMol, EngineError> {
        core::embed_and_minimize(mol, options).map_err(call("embed_and_minimize"))
    }

    fn mol_block(&self, mol: &RdkitMol) -> Result<String, EngineError> {
        core::mol_block(mol).map_err(call("mol_block"))
    }

    fn depict_png(&self, mol: &RdkitMol, options: &DepictOptions) -> Result<Vec<u8>, EngineError> {
        core::depict_png(mol, options).map_err(call("depict_png"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let embed = EmbedOptions::default();
        assert_eq!(embed.max_iters, 200);
        assert!(embed.random_seed.is_none());
        let depict = DepictOptions::default();
        assert_eq!((depict.width, depict.height, depict.kekulize), (800, 520, true));
    }

    #[test]
    #[ignore = "requiere Python con RDKit"]
    fn test_full_structure_round() {
        let engine = ChemEngine::init().expect("Fallo al inicializar Python/RDKit");
        let mol = engine.parse_smiles("C#CC").unwrap().expect("SMILES válido");
        assert_eq!(engine.canonical_smiles(&mol).unwrap(), "C#CC");
        let mol = engine.add_hydrogens(mol).unwrap();
        let options = EmbedOptions { random_seed: Some(42),
                                     ..EmbedOptions::default() };
        let mol = engine.embed_and_minimize(mol, &options).unwrap();
        let block = engine.mol_block(&mol).unwrap();
        assert!(block.contains("V2000"));
        let png = engine.depict_png(&mol, &DepictOptions::default()).unwrap();
        assert_eq!(&png[1..4], b"PNG");
    }
}
