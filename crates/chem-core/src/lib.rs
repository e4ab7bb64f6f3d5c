//! chem-core: motor lineal determinista.
//!
//! Ejecuta una cadena de steps tipados (`Pipe`) en orden estricto con
//! semántica stop-on-failure. Cada transición queda registrada en un
//! `EventStore` append-only y cada step exitoso aporta un fingerprint
//! reproducible al fingerprint del flujo.
pub mod constants;
pub mod engine;
pub mod errors;
pub mod event;
pub mod hashing;
pub mod repo;
pub mod step;

pub use engine::{FlowCtx, FlowEngine};
pub use errors::{BoxError, CoreEngineError};
pub use event::{EventStore, FlowEvent, FlowEventKind, InMemoryEventStore};
pub use repo::{FlowDefinition, FlowInstance, StepSlot};
pub use step::{Pipe, StepKind, StepStatus, TypedStep};
