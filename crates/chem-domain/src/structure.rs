//! Construcción del grafo molecular a partir de SMILES o InChI.
use chemengine::StructureToolkit;
use log::debug;

use crate::DomainError;

/// Texto estructural aceptado por el constructor. Un nombre IUPAC llega aquí
/// ya traducido a SMILES.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureText<'a> {
    Smiles(&'a str),
    InChI(&'a str),
}

impl StructureText<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            StructureText::Smiles(_) => "smiles",
            StructureText::InChI(_) => "inchi",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            StructureText::Smiles(v) | StructureText::InChI(v) => v,
        }
    }
}

/// Grafo con hidrógenos explícitos y su SMILES canónico.
pub struct Structure<M> {
    pub mol: M,
    pub smiles: String,
}

impl<M> std::fmt::Debug for Structure<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Structure").field("smiles", &self.smiles).finish_non_exhaustive()
    }
}

/// Parsea y agrega hidrógenos explícitos.
///
/// SMILES se devuelve tal cual llegó. Para InChI el SMILES canónico se
/// calcula sobre el grafo ya con hidrógenos explícitos.
pub fn build_structure<T: StructureToolkit>(toolkit: &T,
                                            text: StructureText<'_>)
                                            -> Result<Structure<T::Mol>, DomainError> {
    let value = text.value().trim();
    let parsed = match text {
        StructureText::Smiles(_) => toolkit.parse_smiles(value)?,
        StructureText::InChI(_) => toolkit.parse_inchi(value)?,
    };
    let mol = parsed.ok_or_else(|| DomainError::StructureParse { kind: text.kind(),
                                                                  value: value.to_string() })?;
    let mol = toolkit.add_hydrogens(mol)?;
    let smiles = match text {
        StructureText::Smiles(_) => value.to_string(),
        StructureText::InChI(_) => toolkit.canonical_smiles(&mol)?,
    };
    debug!("estructura {} -> {}", text.kind(), smiles);
    Ok(Structure { mol, smiles })
}
