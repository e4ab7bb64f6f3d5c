use chem_core::{StepKind, TypedStep};
use chemengine::{DepictOptions, EmbedOptions, StructureToolkit};
use serde_json::{json, Value};

use super::{file_names, write_output, MODEL_FILE, STRUCTURE_IMAGE_FILE};
use crate::error::ArtifactError;
use crate::payload::{ArtifactBundle, FactsReady};

/// Embedding 3D + minimización (`model.sdf`) y depicción 2D (`structure.png`).
///
/// Consume la molécula: después de este step sólo viajan textos y hechos.
pub struct GenerateArtifactsStep<'a, T> {
    toolkit: &'a T,
    embed: EmbedOptions,
    depict: DepictOptions,
}

impl<'a, T: StructureToolkit> GenerateArtifactsStep<'a, T> {
    pub fn new(toolkit: &'a T, embed: EmbedOptions) -> Self {
        Self { toolkit,
               embed,
               depict: DepictOptions::default() }
    }
}

impl<T: StructureToolkit> TypedStep for GenerateArtifactsStep<'_, T> {
    type Input = FactsReady<T::Mol>;
    type Output = ArtifactBundle;
    type Error = ArtifactError;

    fn id(&self) -> &'static str {
        "generate_artifacts"
    }

    fn kind(&self) -> StepKind {
        StepKind::Transform
    }

    fn run_typed(&self, input: Self::Input) -> Result<ArtifactBundle, ArtifactError> {
        let FactsReady { meta, structure, facts } = input;
        let dir = meta.out_dir.clone();
        let write = |name: &str, bytes: &[u8]| {
            write_output(&dir, name, bytes).map_err(|source| ArtifactError::Write { path: dir.join(name),
                                                                                    source })
        };

        let mol = self.toolkit.embed_and_minimize(structure.mol, &self.embed)?;
        let sdf = self.toolkit.mol_block(&mol)?;
        let mut written = vec![write(MODEL_FILE, sdf.as_bytes())?];

        let png = self.toolkit.depict_png(&mol, &self.depict)?;
        written.push(write(STRUCTURE_IMAGE_FILE, &png)?);

        Ok(ArtifactBundle { meta,
                            facts,
                            sdf,
                            written })
    }

    /// Las coordenadas no son reproducibles sin semilla: sólo se resumen los
    /// nombres de archivo.
    fn summarize(&self, output: &ArtifactBundle) -> Value {
        json!({ "files": file_names(&output.written) })
    }
}
