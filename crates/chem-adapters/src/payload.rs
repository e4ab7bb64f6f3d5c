//! Payloads tipados que fluyen entre los steps del pipeline.
//!
//! Cada step recibe el payload anterior por valor y cede lo que el siguiente
//! necesita. El handle de molécula viaja dentro del payload hasta que
//! `generate_artifacts` lo consume.
use std::path::{Path, PathBuf};

use chem_domain::{FactSet, MoleculeInput, Narrative, Structure};

pub const FORMULA_TUTORIAL_ID: &str = "Tutorial 01";
pub const FORMULA_DEFAULT_SUBTITLE: &str = "Understanding Alkene and Alkyne Substitution Patterns";

/// Datos de presentación comunes a toda la corrida.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorialMeta {
    pub title: String,
    /// Nombre IUPAC original, si la entrada fue un nombre.
    pub name: Option<String>,
    pub subtitle: String,
    pub tutorial_id: String,
    /// Directorio final `<out>/<slug>`.
    pub out_dir: PathBuf,
}

/// Entrada estructural antes de traducir.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureSource {
    Name(String),
    Smiles(String),
    InChI(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureRequest {
    pub meta: TutorialMeta,
    pub source: StructureSource,
}

impl StructureRequest {
    /// `None` para una fórmula: ese modo usa `FormulaRequest`.
    pub fn from_input(input: &MoleculeInput, subtitle: Option<&str>, out_dir: &Path) -> Option<Self> {
        let source = match input {
            MoleculeInput::Name(v) => StructureSource::Name(v.clone()),
            MoleculeInput::Smiles(v) => StructureSource::Smiles(v.clone()),
            MoleculeInput::InChI(v) => StructureSource::InChI(v.clone()),
            MoleculeInput::Formula(_) => return None,
        };
        let meta = TutorialMeta { title: input.title().to_string(),
                                  name: input.name().map(str::to_string),
                                  subtitle: subtitle.unwrap_or_default().to_string(),
                                  tutorial_id: String::new(),
                                  out_dir: out_dir.to_path_buf() };
        Some(Self { meta, source })
    }
}

/// Texto estructural listo para parsear (los nombres ya traducidos).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedText {
    Smiles(String),
    InChI(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStructure {
    pub meta: TutorialMeta,
    pub text: ResolvedText,
}

#[derive(Debug)]
pub struct BuiltStructure<M> {
    pub meta: TutorialMeta,
    pub structure: Structure<M>,
}

#[derive(Debug)]
pub struct FactsReady<M> {
    pub meta: TutorialMeta,
    pub structure: Structure<M>,
    pub facts: FactSet,
}

/// Archivo escrito en el directorio de salida.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub bytes: usize,
}

impl WrittenFile {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Geometría y depicción ya en disco; la molécula fue consumida.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactBundle {
    pub meta: TutorialMeta,
    pub facts: FactSet,
    pub sdf: String,
    pub written: Vec<WrittenFile>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NarratedTutorial {
    pub meta: TutorialMeta,
    pub facts: FactSet,
    pub sdf: String,
    pub written: Vec<WrittenFile>,
    pub narrative: Narrative,
}

/// Modo sólo-fórmula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaRequest {
    pub meta: TutorialMeta,
    pub formula: String,
}

impl FormulaRequest {
    /// El título es la fórmula tal cual la escribió el usuario.
    pub fn new(formula: &str, subtitle: Option<&str>, out_dir: &Path) -> Self {
        let meta = TutorialMeta { title: formula.to_string(),
                                  name: None,
                                  subtitle: subtitle.unwrap_or(FORMULA_DEFAULT_SUBTITLE).to_string(),
                                  tutorial_id: FORMULA_TUTORIAL_ID.to_string(),
                                  out_dir: out_dir.to_path_buf() };
        Self { meta,
               formula: formula.to_string() }
    }

    /// `None` si la entrada no es una fórmula.
    pub fn from_input(input: &MoleculeInput, subtitle: Option<&str>, out_dir: &Path) -> Option<Self> {
        match input {
            MoleculeInput::Formula(formula) => Some(Self::new(formula, subtitle, out_dir)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormulaExplainer {
    pub meta: TutorialMeta,
    pub facts: FactSet,
    pub bullets: Vec<String>,
}

/// Resultado final de cualquiera de los dos pipelines.
#[derive(Debug, Clone, PartialEq)]
pub struct TutorialOutput {
    pub out_dir: PathBuf,
    pub facts: FactSet,
    pub written: Vec<WrittenFile>,
}

impl TutorialOutput {
    pub fn file_names(&self) -> Vec<String> {
        self.written.iter().map(WrittenFile::file_name).collect()
    }
}
