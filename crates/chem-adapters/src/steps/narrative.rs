use std::convert::Infallible;

use chem_core::{StepKind, TypedStep};
use chem_domain::Narrative;
use serde_json::{json, Value};

use crate::payload::{ArtifactBundle, NarratedTutorial};

#[derive(Debug, Default)]
pub struct ComposeNarrativeStep;

impl TypedStep for ComposeNarrativeStep {
    type Input = ArtifactBundle;
    type Output = NarratedTutorial;
    type Error = Infallible;

    fn id(&self) -> &'static str {
        "compose_narrative"
    }

    fn kind(&self) -> StepKind {
        StepKind::Transform
    }

    fn run_typed(&self, input: ArtifactBundle) -> Result<NarratedTutorial, Infallible> {
        let narrative = Narrative::compose(&input.meta.title, &input.facts, input.meta.name.as_deref());
        Ok(NarratedTutorial { meta: input.meta,
                              facts: input.facts,
                              sdf: input.sdf,
                              written: input.written,
                              narrative })
    }

    fn summarize(&self, output: &NarratedTutorial) -> Value {
        json!({
            "bullets": output.narrative.bullets,
            "voiceover": output.narrative.voiceover,
        })
    }
}
