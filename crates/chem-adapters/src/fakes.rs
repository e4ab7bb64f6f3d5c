//! Dobles de prueba deterministas para el motor químico y el traductor.
use std::collections::BTreeMap;

use chemengine::{DepictOptions, EmbedOptions, EngineError, StructureToolkit};

use crate::error::TranslationError;
use crate::translator::NameTranslator;

pub const FAKE_PNG: &[u8] = b"\x89PNG\r\n\x1a\nfake";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeMol {
    pub smiles: String,
    pub explicit_h: bool,
    pub embedded: bool,
}

/// Motor con una tabla fija SMILES -> (fórmula, masa exacta).
#[derive(Debug, Clone)]
pub struct FakeToolkit {
    table: BTreeMap<String, (String, f64)>,
    inchi: BTreeMap<String, String>,
}

impl Default for FakeToolkit {
    fn default() -> Self {
        Self::new().with("CCO", "C2H6O", 46.041864814)
                   .with("C=C", "C2H4", 28.0313001)
                   .with("C#C", "C2H2", 26.015650064)
                   .with("c1ccccc1", "C6H6", 78.046950192)
                   .with("C=CC(C)C(Br)CC#C", "C8H11Br", 186.004062)
                   .with_inchi("InChI=1S/C2H6O/c1-2-3/h3H,2H2,1H3", "CCO")
    }
}

impl FakeToolkit {
    pub fn new() -> Self {
        Self { table: BTreeMap::new(),
               inchi: BTreeMap::new() }
    }

    pub fn with(mut self, smiles: &str, formula: &str, mass: f64) -> Self {
        self.table.insert(smiles.to_string(), (formula.to_string(), mass));
        self
    }

    pub fn with_inchi(mut self, inchi: &str, smiles: &str) -> Self {
        self.inchi.insert(inchi.to_string(), smiles.to_string());
        self
    }

    fn entry(&self, mol: &FakeMol) -> (String, f64) {
        self.table.get(&mol.smiles).cloned().unwrap_or_default()
    }

    fn mol(smiles: &str) -> FakeMol {
        FakeMol { smiles: smiles.to_string(),
                  explicit_h: false,
                  embedded: false }
    }
}

impl StructureToolkit for FakeToolkit {
    type Mol = FakeMol;

    fn parse_smiles(&self, smiles: &str) -> Result<Option<FakeMol>, EngineError> {
        Ok(self.table.contains_key(smiles).then(|| Self::mol(smiles)))
    }

    fn parse_inchi(&self, inchi: &str) -> Result<Option<FakeMol>, EngineError> {
        Ok(self.inchi.get(inchi).map(|smiles| Self::mol(smiles)))
    }

    fn add_hydrogens(&self, mol: FakeMol) -> Result<FakeMol, EngineError> {
        Ok(FakeMol { explicit_h: true, ..mol })
    }

    fn canonical_smiles(&self, mol: &FakeMol) -> Result<String, EngineError> {
        Ok(mol.smiles.clone())
    }

    fn formula(&self, mol: &FakeMol) -> Result<String, EngineError> {
        Ok(self.entry(mol).0)
    }

    fn exact_mass(&self, mol: &FakeMol) -> Result<f64, EngineError> {
        Ok(self.entry(mol).1)
    }

    fn embed_and_minimize(&self, mol: FakeMol, _options: &EmbedOptions) -> Result<FakeMol, EngineError> {
        Ok(FakeMol { embedded: true, ..mol })
    }

    fn mol_block(&self, mol: &FakeMol) -> Result<String, EngineError> {
        Ok(format!("{}\n     FakeToolkit 3D\n\n  0  0  0  0  0  0  0  0  0  0999 V2000\nM  END\n", mol.smiles))
    }

    fn depict_png(&self, _mol: &FakeMol, _options: &DepictOptions) -> Result<Vec<u8>, EngineError> {
        Ok(FAKE_PNG.to_vec())
    }
}

/// Traductor en memoria; un nombre desconocido produce `EmptyResult`.
#[derive(Debug, Clone, Default)]
pub struct StaticTranslator {
    names: BTreeMap<String, String>,
}

impl StaticTranslator {
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self { names: pairs.iter()
                           .map(|(n, s)| (n.to_string(), s.to_string()))
                           .collect() }
    }
}

impl NameTranslator for StaticTranslator {
    fn translate(&self, name: &str) -> Result<String, TranslationError> {
        self.names
            .get(name.trim())
            .cloned()
            .ok_or_else(|| TranslationError::EmptyResult(name.trim().to_string()))
    }
}
