use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Identificador químico provisto por el usuario. Exactamente una variante
/// por corrida.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoleculeInput {
    Name(String),
    Smiles(String),
    InChI(String),
    Formula(String),
}

impl MoleculeInput {
    /// Selecciona la única entrada presente entre las cuatro opciones.
    pub fn from_options(name: Option<String>,
                        smiles: Option<String>,
                        inchi: Option<String>,
                        formula: Option<String>)
                        -> Result<Self, DomainError> {
        let mut given: Vec<MoleculeInput> = [name.map(MoleculeInput::Name),
                                             smiles.map(MoleculeInput::Smiles),
                                             inchi.map(MoleculeInput::InChI),
                                             formula.map(MoleculeInput::Formula)].into_iter()
                                                                                 .flatten()
                                                                                 .collect();
        if given.len() != 1 {
            return Err(DomainError::InputCount(given.len()));
        }
        let input = given.remove(0);
        if input.value().trim().is_empty() {
            return Err(DomainError::EmptyInput(input.kind()));
        }
        Ok(input)
    }

    /// Valor tal como lo escribió el usuario.
    pub fn value(&self) -> &str {
        match self {
            MoleculeInput::Name(v) | MoleculeInput::Smiles(v) | MoleculeInput::InChI(v) | MoleculeInput::Formula(v) => v,
        }
    }

    /// Título del tutorial: el propio identificador.
    pub fn title(&self) -> &str {
        self.value()
    }

    pub fn kind(&self) -> &'static str {
        match self {
            MoleculeInput::Name(_) => "name",
            MoleculeInput::Smiles(_) => "smiles",
            MoleculeInput::InChI(_) => "inchi",
            MoleculeInput::Formula(_) => "formula",
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            MoleculeInput::Name(n) => Some(n),
            _ => None,
        }
    }
}
