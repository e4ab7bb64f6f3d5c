//! Definiciones relacionadas a Steps.
//!
//! Un Step es una unidad que consume por valor el output del step anterior y
//! produce el input del siguiente. Este módulo define:
//! - `TypedStep`: interfaz con tipos fuertes (Input / Output / Error).
//! - `StepKind` y `StepStatus`.
//! - `Pipe` para construir pipelines tipados que validan IO en compilación.

pub mod definition;
pub mod pipeline;
mod status;

pub use definition::{StepKind, TypedStep};
pub use pipeline::Pipe;
pub use status::StepStatus;
