pub mod types;
pub use types::{FlowDefinition, FlowInstance, StepSlot};
