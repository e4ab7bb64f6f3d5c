use chem_core::{StepKind, TypedStep};
use chem_domain::{build_structure, DomainError, FactSet, Facts, StructureText};
use chemengine::StructureToolkit;
use serde_json::{json, Value};

use crate::error::TranslationError;
use crate::payload::{BuiltStructure, FactsReady, ResolvedStructure, ResolvedText, StructureRequest, StructureSource};
use crate::translator::NameTranslator;

/// Resuelve la entrada a texto estructural; sólo los nombres pasan por el
/// traductor externo.
#[derive(Debug)]
pub struct TranslateNameStep<N> {
    translator: N,
}

impl<N: NameTranslator> TranslateNameStep<N> {
    pub fn new(translator: N) -> Self {
        Self { translator }
    }
}

impl<N: NameTranslator> TypedStep for TranslateNameStep<N> {
    type Input = StructureRequest;
    type Output = ResolvedStructure;
    type Error = TranslationError;

    fn id(&self) -> &'static str {
        "translate_name"
    }

    fn kind(&self) -> StepKind {
        StepKind::Source
    }

    fn run_typed(&self, input: StructureRequest) -> Result<ResolvedStructure, TranslationError> {
        let text = match input.source {
            StructureSource::Name(name) => ResolvedText::Smiles(self.translator.translate(&name)?),
            StructureSource::Smiles(smiles) => ResolvedText::Smiles(smiles),
            StructureSource::InChI(inchi) => ResolvedText::InChI(inchi),
        };
        Ok(ResolvedStructure { meta: input.meta,
                               text })
    }

    fn summarize(&self, output: &ResolvedStructure) -> Value {
        match &output.text {
            ResolvedText::Smiles(s) => json!({ "smiles": s }),
            ResolvedText::InChI(s) => json!({ "inchi": s }),
        }
    }
}

pub struct BuildStructureStep<'a, T> {
    toolkit: &'a T,
}

impl<'a, T: StructureToolkit> BuildStructureStep<'a, T> {
    pub fn new(toolkit: &'a T) -> Self {
        Self { toolkit }
    }
}

impl<T: StructureToolkit> TypedStep for BuildStructureStep<'_, T> {
    type Input = ResolvedStructure;
    type Output = BuiltStructure<T::Mol>;
    type Error = DomainError;

    fn id(&self) -> &'static str {
        "build_structure"
    }

    fn kind(&self) -> StepKind {
        StepKind::Transform
    }

    fn run_typed(&self, input: ResolvedStructure) -> Result<Self::Output, DomainError> {
        let text = match &input.text {
            ResolvedText::Smiles(s) => StructureText::Smiles(s),
            ResolvedText::InChI(s) => StructureText::InChI(s),
        };
        let structure = build_structure(self.toolkit, text)?;
        Ok(BuiltStructure { meta: input.meta,
                            structure })
    }

    fn summarize(&self, output: &Self::Output) -> Value {
        json!({ "smiles": output.structure.smiles })
    }
}

pub struct ComputeFactsStep<'a, T> {
    toolkit: &'a T,
}

impl<'a, T: StructureToolkit> ComputeFactsStep<'a, T> {
    pub fn new(toolkit: &'a T) -> Self {
        Self { toolkit }
    }
}

impl<T: StructureToolkit> TypedStep for ComputeFactsStep<'_, T> {
    type Input = BuiltStructure<T::Mol>;
    type Output = FactsReady<T::Mol>;
    type Error = DomainError;

    fn id(&self) -> &'static str {
        "compute_facts"
    }

    fn kind(&self) -> StepKind {
        StepKind::Transform
    }

    fn run_typed(&self, input: Self::Input) -> Result<Self::Output, DomainError> {
        let facts = Facts::compute(self.toolkit, &input.structure.mol)?;
        let facts = FactSet::from_structure(&facts, &input.structure.smiles);
        Ok(FactsReady { meta: input.meta,
                        structure: input.structure,
                        facts })
    }

    fn summarize(&self, output: &Self::Output) -> Value {
        json!({
            "formula": output.facts.formula,
            "exact_mass": output.facts.exact_mass,
            "du": output.facts.unsaturation,
        })
    }
}
