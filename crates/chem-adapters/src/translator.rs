//! Traducción nombre IUPAC -> SMILES mediante un proceso externo (OPSIN).
//!
//! Contrato con el proceso: recibe `<args fijos> -osmi <request> <response>`,
//! lee un nombre por línea del request y escribe un SMILES por línea en el
//! response, opcionalmente seguido de campos separados por tabulador.
use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::{debug, info};
use tempfile::{Builder, NamedTempFile};

use crate::error::TranslationError;

/// Convierte un nombre químico en SMILES.
pub trait NameTranslator {
    fn translate(&self, name: &str) -> Result<String, TranslationError>;
}

impl<T: NameTranslator + ?Sized> NameTranslator for &T {
    fn translate(&self, name: &str) -> Result<String, TranslationError> {
        (**self).translate(name)
    }
}

/// Traductor que delega en un programa externo con handoff por archivos.
///
/// Los dos archivos temporales son `NamedTempFile`: se borran al salir de
/// `translate` por cualquier camino, incluido un fallo del proceso.
#[derive(Debug, Clone)]
pub struct CommandTranslator {
    program: OsString,
    leading_args: Vec<OsString>,
    temp_dir: Option<PathBuf>,
}

impl CommandTranslator {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self { program: program.into(),
               leading_args: Vec::new(),
               temp_dir: None }
    }

    /// `java -jar <jar> -osmi <in> <out>`
    pub fn opsin(java: impl Into<OsString>, jar: impl AsRef<Path>) -> Self {
        Self::new(java).arg("-jar").arg(jar.as_ref())
    }

    /// Argumento fijo previo a `-osmi`.
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.leading_args.push(arg.into());
        self
    }

    /// Directorio para los temporales; por defecto el del sistema.
    pub fn temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    fn temp_file(&self, prefix: &str) -> std::io::Result<NamedTempFile> {
        let mut builder = Builder::new();
        builder.prefix(prefix).suffix(".txt");
        match &self.temp_dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
    }
}

impl NameTranslator for CommandTranslator {
    fn translate(&self, name: &str) -> Result<String, TranslationError> {
        let mut request = self.temp_file("opsin_in_")?;
        let response = self.temp_file("opsin_out_")?;
        writeln!(request, "{}", name.trim())?;
        request.flush()?;

        let program = self.program.to_string_lossy().into_owned();
        debug!("traduciendo `{}` con {}", name.trim(), program);
        let output = Command::new(&self.program).args(&self.leading_args)
                                                .arg("-osmi")
                                                .arg(request.path())
                                                .arg(response.path())
                                                .output()
                                                .map_err(|source| TranslationError::Spawn { program, source })?;
        if !output.status.success() {
            return Err(TranslationError::ProcessFailed { status: output.status,
                                                         stderr: String::from_utf8_lossy(&output.stderr).trim()
                                                                                                          .to_string() });
        }

        let text = fs::read_to_string(response.path())?;
        let smiles = first_token(&text).ok_or_else(|| TranslationError::EmptyResult(name.trim().to_string()))?;
        info!("`{}` -> {}", name.trim(), smiles);
        Ok(smiles.to_string())
    }
}

/// Primer token de la primera línea; los campos auxiliares se ignoran.
fn first_token(text: &str) -> Option<&str> {
    text.trim().lines().next().and_then(|line| line.split_whitespace().next())
}
