use std::convert::Infallible;

use chem_core::{StepKind, TypedStep};
use chem_domain::{FactSet, FORMULA_ONLY_BULLETS};
use serde_json::{json, Value};

use super::render::{bindings, write_rendered};
use super::{file_names, PAGE_FILE, README_FILE};
use crate::error::RenderError;
use crate::payload::{FormulaExplainer, FormulaRequest, TutorialOutput};
use crate::render::TemplateSet;

/// Hechos y bullets del modo sólo-fórmula. No hay grafo: SMILES y masa
/// quedan ausentes y el DU sale del conteo de elementos de la entrada.
#[derive(Debug, Default)]
pub struct ExplainFormulaStep;

impl TypedStep for ExplainFormulaStep {
    type Input = FormulaRequest;
    type Output = FormulaExplainer;
    type Error = Infallible;

    fn id(&self) -> &'static str {
        "explain_formula"
    }

    fn kind(&self) -> StepKind {
        StepKind::Source
    }

    fn run_typed(&self, input: FormulaRequest) -> Result<FormulaExplainer, Infallible> {
        Ok(FormulaExplainer { facts: FactSet::formula_only(&input.formula),
                              meta: input.meta,
                              bullets: FORMULA_ONLY_BULLETS.iter().map(|b| b.to_string()).collect() })
    }

    fn summarize(&self, output: &FormulaExplainer) -> Value {
        json!({ "formula": output.facts.formula, "du": output.facts.unsaturation })
    }
}

/// Escribe `index.html` (sin geometría) y `README.txt`.
#[derive(Debug, Clone, Default)]
pub struct RenderFormulaStep {
    templates: TemplateSet,
}

impl RenderFormulaStep {
    pub fn new(templates: TemplateSet) -> Self {
        Self { templates }
    }
}

impl TypedStep for RenderFormulaStep {
    type Input = FormulaExplainer;
    type Output = TutorialOutput;
    type Error = RenderError;

    fn id(&self) -> &'static str {
        "render_formula"
    }

    fn kind(&self) -> StepKind {
        StepKind::Sink
    }

    fn run_typed(&self, input: FormulaExplainer) -> Result<TutorialOutput, RenderError> {
        let values = bindings(&input.meta, &input.facts, "", &input.bullets);
        let page = self.templates.page.render(&values)?;
        let readme = self.templates.formula_readme.render(&values)?;
        let written = vec![write_rendered(&input.meta, PAGE_FILE, &page)?,
                           write_rendered(&input.meta, README_FILE, &readme)?];
        Ok(TutorialOutput { out_dir: input.meta.out_dir,
                            facts: input.facts,
                            written })
    }

    fn summarize(&self, output: &TutorialOutput) -> Value {
        json!({ "files": file_names(&output.written) })
    }
}
