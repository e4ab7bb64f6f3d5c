use chem_core::{StepKind, TypedStep};
use chem_domain::FactSet;
use serde_json::{json, Value};

use super::{file_names, write_output, CAPTIONS_FILE, DESCRIPTION_FILE, PAGE_FILE, VOICEOVER_FILE};
use crate::error::RenderError;
use crate::payload::{NarratedTutorial, TutorialMeta, TutorialOutput, WrittenFile};
use crate::render::{Bindings, TemplateSet};

/// `<li>` por bullet, una línea cada uno.
pub(crate) fn html_bullets(bullets: &[String]) -> String {
    bullets.iter()
           .map(|b| format!("      <li>{b}</li>"))
           .collect::<Vec<_>>()
           .join("\n")
}

pub(crate) fn markdown_bullets(bullets: &[String]) -> String {
    bullets.iter().map(|b| format!("- {b}")).collect::<Vec<_>>().join("\n")
}

/// Valores comunes a las tres plantillas.
pub(crate) fn bindings(meta: &TutorialMeta, facts: &FactSet, sdf: &str, bullets: &[String]) -> Bindings {
    Bindings::from([("title", meta.title.clone()),
                    ("subtitle", meta.subtitle.clone()),
                    ("tutorial_id", meta.tutorial_id.clone()),
                    ("smiles", facts.smiles_display().to_string()),
                    ("formula", facts.formula.clone()),
                    ("mw", facts.mass_display()),
                    ("du", facts.unsaturation_display()),
                    ("sdf", sdf.to_string()),
                    ("bullets", html_bullets(bullets)),
                    ("bullets_md", markdown_bullets(bullets))])
}

pub(crate) fn write_rendered(meta: &TutorialMeta, file_name: &str, text: &str) -> Result<WrittenFile, RenderError> {
    let dir = &meta.out_dir;
    write_output(dir, file_name, text.as_bytes()).map_err(|source| RenderError::Write { path: dir.join(file_name),
                                                                                         source })
}

/// Escribe página, locución, subtítulos y descripción del modo estructura.
#[derive(Debug, Clone, Default)]
pub struct RenderTutorialStep {
    templates: TemplateSet,
}

impl RenderTutorialStep {
    pub fn new(templates: TemplateSet) -> Self {
        Self { templates }
    }
}

impl TypedStep for RenderTutorialStep {
    type Input = NarratedTutorial;
    type Output = TutorialOutput;
    type Error = RenderError;

    fn id(&self) -> &'static str {
        "render_tutorial"
    }

    fn kind(&self) -> StepKind {
        StepKind::Sink
    }

    fn run_typed(&self, input: NarratedTutorial) -> Result<TutorialOutput, RenderError> {
        let NarratedTutorial { meta,
                               facts,
                               sdf,
                               mut written,
                               narrative } = input;
        let values = bindings(&meta, &facts, &sdf, &narrative.bullets);

        let page = self.templates.page.render(&values)?;
        written.push(write_rendered(&meta, PAGE_FILE, &page)?);
        written.push(write_rendered(&meta, VOICEOVER_FILE, &narrative.voiceover)?);
        written.push(write_rendered(&meta, CAPTIONS_FILE, &narrative.captions)?);
        let description = self.templates.description.render(&values)?;
        written.push(write_rendered(&meta, DESCRIPTION_FILE, &description)?);

        Ok(TutorialOutput { out_dir: meta.out_dir,
                            facts,
                            written })
    }

    fn summarize(&self, output: &TutorialOutput) -> Value {
        json!({ "files": file_names(&output.written) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullet_lists() {
        let bullets = vec!["a & b".to_string(), "c".to_string()];
        assert_eq!(html_bullets(&bullets), "      <li>a & b</li>\n      <li>c</li>");
        assert_eq!(markdown_bullets(&bullets), "- a & b\n- c");
        assert_eq!(html_bullets(&[]), "");
    }
}
