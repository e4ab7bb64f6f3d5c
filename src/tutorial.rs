//! Orquestación de una corrida: elige el pipeline (estructura o fórmula),
//! lo ejecuta en un `FlowEngine` y devuelve lo escrito.
use std::fs;
use std::path::{Path, PathBuf};

use chem_adapters::payload::{FormulaRequest, StructureRequest, TutorialOutput, WrittenFile};
use chem_adapters::steps::{BuildStructureStep, ComposeNarrativeStep, ComputeFactsStep, ExplainFormulaStep,
                           GenerateArtifactsStep, RenderFormulaStep, RenderTutorialStep, TranslateNameStep};
use chem_adapters::{NameTranslator, TemplateSet};
use chem_core::{FlowEngine, Pipe};
use chem_domain::{slugify, FactSet, MoleculeInput};
use chemengine::{EmbedOptions, StructureToolkit};
use log::{debug, info};

use crate::config::AppConfig;
use crate::errors::TutorialError;

/// Qué pipeline corresponde a la entrada.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    Structure(StructureRequest),
    Formula(FormulaRequest),
}

impl Plan {
    /// El directorio de salida es `<out_base>/<slug(título)>`.
    pub fn for_input(input: &MoleculeInput, subtitle: Option<&str>, out_base: &Path) -> Self {
        let out_dir = out_base.join(slugify(input.title()));
        match StructureRequest::from_input(input, subtitle, &out_dir) {
            Some(request) => Plan::Structure(request),
            None => Plan::Formula(FormulaRequest::new(input.value(), subtitle, &out_dir)),
        }
    }

    pub fn out_dir(&self) -> &Path {
        match self {
            Plan::Structure(r) => &r.meta.out_dir,
            Plan::Formula(r) => &r.meta.out_dir,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TutorialReport {
    pub out_dir: PathBuf,
    pub facts: FactSet,
    pub written: Vec<WrittenFile>,
    pub flow_fingerprint: Option<String>,
}

impl TutorialReport {
    fn new(output: TutorialOutput, flow_fingerprint: Option<String>) -> Self {
        Self { out_dir: output.out_dir,
               facts: output.facts,
               written: output.written,
               flow_fingerprint }
    }

    pub fn file_names(&self) -> Vec<String> {
        self.written.iter().map(WrittenFile::file_name).collect()
    }
}

/// Generador configurado (plantillas + parámetros 3D).
#[derive(Debug, Clone, Default)]
pub struct Tutorial {
    templates: TemplateSet,
    embed: EmbedOptions,
}

impl Tutorial {
    pub fn new(templates: TemplateSet, embed: EmbedOptions) -> Self {
        Self { templates, embed }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, TutorialError> {
        let templates = match &config.templates_dir {
            Some(dir) => TemplateSet::from_dir(dir)?,
            None => TemplateSet::embedded(),
        };
        Ok(Self::new(templates, config.embed.clone()))
    }

    /// Modo sólo-fórmula: `index.html` y `README.txt`.
    pub fn run_formula(&self, request: FormulaRequest) -> Result<TutorialReport, TutorialError> {
        prepare_out_dir(&request.meta.out_dir)?;
        let mut engine = FlowEngine::new();
        engine.set_name("formula_explainer");
        let pipe = Pipe::new(ExplainFormulaStep).then(RenderFormulaStep::new(self.templates.clone()));
        let output = engine.run(pipe, request)?;
        Ok(self.report(&engine, output))
    }

    /// Modo estructura: traducción (si hay nombre), grafo, hechos,
    /// artefactos, narrativa y render.
    pub fn run_structure<T, N>(&self,
                               toolkit: &T,
                               translator: N,
                               request: StructureRequest)
                               -> Result<TutorialReport, TutorialError>
        where T: StructureToolkit,
              N: NameTranslator
    {
        prepare_out_dir(&request.meta.out_dir)?;
        let mut engine = FlowEngine::new();
        engine.set_name("structure_tutorial");
        let pipe = Pipe::new(TranslateNameStep::new(translator)).then(BuildStructureStep::new(toolkit))
                                                                .then(ComputeFactsStep::new(toolkit))
                                                                .then(GenerateArtifactsStep::new(toolkit,
                                                                                                 self.embed.clone()))
                                                                .then(ComposeNarrativeStep)
                                                                .then(RenderTutorialStep::new(self.templates.clone()));
        let output = engine.run(pipe, request)?;
        Ok(self.report(&engine, output))
    }

    fn report(&self, engine: &FlowEngine<chem_core::InMemoryEventStore>, output: TutorialOutput) -> TutorialReport {
        let fingerprint = engine.flow_fingerprint();
        if let Some(fp) = &fingerprint {
            debug!("flow {} fingerprint {}", engine.name().unwrap_or("?"), fp);
        }
        info!("{} archivos en {}", output.written.len(), output.out_dir.display());
        TutorialReport::new(output, fingerprint)
    }
}

/// El directorio existe antes de que corra cualquier step, aunque la
/// traducción falle después.
fn prepare_out_dir(dir: &Path) -> Result<(), TutorialError> {
    fs::create_dir_all(dir).map_err(|source| TutorialError::OutputDir { path: dir.to_path_buf(),
                                                                         source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_picks_pipeline_and_slugged_dir() {
        let base = Path::new("out");
        let plan = Plan::for_input(&MoleculeInput::Formula("C8H12Br".into()), None, base);
        assert!(matches!(plan, Plan::Formula(_)));
        assert_eq!(plan.out_dir(), Path::new("out/C8H12Br"));

        let plan = Plan::for_input(&MoleculeInput::Smiles("C1=CC=CC=C1".into()), Some("Aromatics"), base);
        match &plan {
            Plan::Structure(r) => assert_eq!(r.meta.subtitle, "Aromatics"),
            other => panic!("plan inesperado: {other:?}"),
        }
        assert_eq!(plan.out_dir(), Path::new("out/C1-CC-CC-C1"));
    }

    #[test]
    fn unwritable_out_base_fails_before_the_pipeline() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("ocupado");
        fs::write(&blocker, "no es un directorio").unwrap();

        let plan = Plan::for_input(&MoleculeInput::Formula("C2H6O".into()), None, &blocker);
        let Plan::Formula(request) = plan else { panic!("se esperaba plan de fórmula") };
        let err = Tutorial::default().run_formula(request).unwrap_err();
        match err {
            TutorialError::OutputDir { path, .. } => assert_eq!(path, blocker.join("C2H6O")),
            other => panic!("error inesperado: {other:?}"),
        }
    }
}
