//! Steps tipados de los dos pipelines.
//!
//! Estructura: translate_name -> build_structure -> compute_facts ->
//! generate_artifacts -> compose_narrative -> render_tutorial.
//! Fórmula: explain_formula -> render_formula.
pub mod artifacts;
pub mod formula;
pub mod narrative;
pub mod render;
pub mod structure;

pub use artifacts::GenerateArtifactsStep;
pub use formula::{ExplainFormulaStep, RenderFormulaStep};
pub use narrative::ComposeNarrativeStep;
pub use render::RenderTutorialStep;
pub use structure::{BuildStructureStep, ComputeFactsStep, TranslateNameStep};

use std::fs;
use std::path::Path;

use log::info;

use crate::payload::WrittenFile;

pub const MODEL_FILE: &str = "model.sdf";
pub const STRUCTURE_IMAGE_FILE: &str = "structure.png";
pub const PAGE_FILE: &str = "index.html";
pub const VOICEOVER_FILE: &str = "voiceover.txt";
pub const CAPTIONS_FILE: &str = "captions.srt";
pub const DESCRIPTION_FILE: &str = "YOUTUBE_DESCRIPTION.md";
pub const README_FILE: &str = "README.txt";

/// Escribe (o sobrescribe) `dir/file_name`, creando el directorio si falta.
pub(crate) fn write_output(dir: &Path, file_name: &str, contents: &[u8]) -> std::io::Result<WrittenFile> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, contents)?;
    info!("escrito {} ({} bytes)", path.display(), contents.len());
    Ok(WrittenFile { path,
                     bytes: contents.len() })
}

pub(crate) fn file_names(written: &[WrittenFile]) -> Vec<String> {
    written.iter().map(WrittenFile::file_name).collect()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use chem_core::{FlowEngine, Pipe, StepStatus};
    use chem_domain::MoleculeInput;
    use chemengine::EmbedOptions;

    use super::*;
    use crate::fakes::{FakeToolkit, StaticTranslator, FAKE_PNG};
    use crate::payload::{FormulaRequest, StructureRequest};
    use crate::render::TemplateSet;
    use crate::TranslationError;

    fn structure_pipe<'a>(toolkit: &'a FakeToolkit,
                          translator: &'a StaticTranslator)
                          -> Pipe<'a, StructureRequest, crate::payload::TutorialOutput> {
        Pipe::new(TranslateNameStep::new(translator)).then(BuildStructureStep::new(toolkit))
                                                     .then(ComputeFactsStep::new(toolkit))
                                                     .then(GenerateArtifactsStep::new(toolkit, EmbedOptions::default()))
                                                     .then(ComposeNarrativeStep)
                                                     .then(RenderTutorialStep::new(TemplateSet::embedded()))
    }

    fn request(input: MoleculeInput, dir: &Path) -> StructureRequest {
        StructureRequest::from_input(&input, None, dir).unwrap()
    }

    #[test]
    fn named_structure_writes_full_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("ethanol");
        let toolkit = FakeToolkit::default();
        let translator = StaticTranslator::new(&[("ethanol", "CCO")]);
        let mut engine = FlowEngine::new();

        let output = engine.run(structure_pipe(&toolkit, &translator),
                                request(MoleculeInput::Name("ethanol".into()), &out))
                           .unwrap();
        assert_eq!(output.facts.formula, "C2H6O");
        assert_eq!(output.facts.unsaturation, 0.0);
        assert_eq!(output.file_names(),
                   vec![MODEL_FILE, STRUCTURE_IMAGE_FILE, PAGE_FILE, VOICEOVER_FILE, CAPTIONS_FILE, DESCRIPTION_FILE]);
        assert_eq!(fs::read(out.join(STRUCTURE_IMAGE_FILE)).unwrap(), FAKE_PNG);

        let page = fs::read_to_string(out.join(PAGE_FILE)).unwrap();
        assert!(page.contains("<h1>ethanol</h1>"));
        assert!(page.contains("<code>CCO</code>"));
        assert!(page.contains("46.0419 u"));
        assert!(page.contains("<li>Double-bond equivalents (DU): 0.0</li>"));
        assert!(page.contains("FakeToolkit 3D"));

        let voiceover = fs::read_to_string(out.join(VOICEOVER_FILE)).unwrap();
        assert_eq!(voiceover.lines().nth(1), Some("Formula: C2H6O | Exact mass 46.0419 u | SMILES: CCO"));
        let captions = fs::read_to_string(out.join(CAPTIONS_FILE)).unwrap();
        assert!(captions.contains("4\n00:00:09,000 --> 00:00:12,000\n"));
        let description = fs::read_to_string(out.join(DESCRIPTION_FILE)).unwrap();
        assert!(description.starts_with("# ethanol\n"));

        assert_eq!(engine.event_variants().unwrap().len(), 2 + 6 * 2);
        assert!(engine.flow_fingerprint().is_some());
    }

    #[test]
    fn fingerprint_is_stable_across_runs() {
        let dir = tempfile::tempdir().unwrap();
        let toolkit = FakeToolkit::default();
        let translator = StaticTranslator::default();
        let mut fingerprints = Vec::new();
        for _ in 0..2 {
            let mut engine = FlowEngine::new();
            engine.run(structure_pipe(&toolkit, &translator),
                       request(MoleculeInput::Smiles("C=C".into()), &dir.path().join("C-C")))
                  .unwrap();
            fingerprints.push(engine.flow_fingerprint().unwrap());
        }
        assert_eq!(fingerprints[0], fingerprints[1]);
    }

    #[test]
    fn translation_failure_stops_before_any_output() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("unobtainium");
        let toolkit = FakeToolkit::default();
        let translator = StaticTranslator::default();
        let mut engine = FlowEngine::new();

        let err = engine.run(structure_pipe(&toolkit, &translator),
                             request(MoleculeInput::Name("unobtainium".into()), &out))
                        .unwrap_err();
        assert_eq!(err.failed_step(), Some("translate_name"));
        assert!(matches!(err.step_error::<TranslationError>(), Some(TranslationError::EmptyResult(_))));
        assert_eq!(engine.event_variants().unwrap(), vec!["I", "S", "X"]);
        let instance = engine.instance().unwrap();
        assert_eq!(instance.steps[0].status, StepStatus::Failed);
        assert!(!out.exists());
    }

    #[test]
    fn unparseable_smiles_fails_in_build_structure() {
        let dir = tempfile::tempdir().unwrap();
        let toolkit = FakeToolkit::default();
        let translator = StaticTranslator::default();
        let mut engine = FlowEngine::new();
        let err = engine.run(structure_pipe(&toolkit, &translator),
                             request(MoleculeInput::Smiles("C1CC(".into()), dir.path()))
                        .unwrap_err();
        assert_eq!(err.failed_step(), Some("build_structure"));
        assert!(err.to_string().contains("build_structure"));
        let source = err.step_error::<chem_domain::DomainError>().unwrap();
        assert_eq!(source.to_string(), "could not parse structure from smiles input: C1CC(");
    }

    #[test]
    fn formula_only_writes_page_and_readme() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("C8H12Br");
        let input = MoleculeInput::Formula("C8H12Br".into());
        let mut engine = FlowEngine::new();
        let pipe = Pipe::new(ExplainFormulaStep).then(RenderFormulaStep::new(TemplateSet::embedded()));

        let output = engine.run(pipe, FormulaRequest::from_input(&input, None, &out).unwrap()).unwrap();
        assert_eq!(output.file_names(), vec![PAGE_FILE, README_FILE]);
        assert_eq!(output.facts.unsaturation, 2.5);

        let page = fs::read_to_string(out.join(PAGE_FILE)).unwrap();
        assert!(page.contains("<small>Tutorial 01</small>"));
        assert!(page.contains("Understanding Alkene and Alkyne Substitution Patterns"));
        assert!(page.contains("n/a u"));
        assert!(page.contains("<li>A single molecular formula can represent many isomers.</li>"));
        let readme = fs::read_to_string(out.join(README_FILE)).unwrap();
        assert!(readme.starts_with("Formula-only mode."));
        assert!(readme.contains("Degree of unsaturation (DU): 2.5"));
        for absent in [MODEL_FILE, VOICEOVER_FILE, CAPTIONS_FILE, STRUCTURE_IMAGE_FILE] {
            assert!(!out.join(absent).exists(), "{absent} no debe existir");
        }
    }
}
