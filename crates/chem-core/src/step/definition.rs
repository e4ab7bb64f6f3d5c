use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepKind {
    Source,
    Transform,
    Sink,
}

/// Interfaz de alto nivel para definir Steps con tipos fuertes.
///
/// El input se recibe por valor: un step es dueño exclusivo de lo que
/// consume mientras corre (p. ej. el handle de molécula del engine químico) y
/// lo cede al siguiente dentro de su output.
pub trait TypedStep {
    /// Tipo concreto esperado como input.
    type Input;
    /// Tipo concreto producido como output.
    type Output;
    /// Error terminal del step.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Identificador estable del step dentro del flow.
    fn id(&self) -> &'static str;

    /// Nombre amigable (por defecto usa el id).
    fn name(&self) -> &str {
        self.id()
    }

    /// Tipo general del step.
    fn kind(&self) -> StepKind;

    /// Ejecución tipada.
    fn run_typed(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;

    /// Resumen JSON del output. Se registra en `StepFinished` y entra en el
    /// fingerprint, por lo que sólo debe contener datos deterministas.
    fn summarize(&self, _output: &Self::Output) -> Value {
        Value::Null
    }
}
