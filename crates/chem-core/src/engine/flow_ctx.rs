//! Flow context implementation

use serde_json::json;
use uuid::Uuid;

use crate::constants::ENGINE_VERSION;
use crate::errors::CoreEngineError;
use crate::event::{EventStore, FlowEventKind};
use crate::hashing::hash_value;
use crate::repo::FlowDefinition;
use crate::step::TypedStep;

/// Contexto de ejecución para un flujo específico.
///
/// Lleva el cursor del step actual y los fingerprints acumulados; cada step
/// de un `Pipe` pasa por `run_step`, que emite `StepStarted` y luego
/// `StepFinished` o `StepFailed`.
pub struct FlowCtx<'a> {
    event_store: &'a mut dyn EventStore,
    flow_id: Uuid,
    definition: FlowDefinition,
    cursor: usize,
    step_fingerprints: Vec<String>,
    completed: bool,
}

impl<'a> FlowCtx<'a> {
    /// Crea el contexto y emite `FlowInitialized`.
    pub fn start(event_store: &'a mut dyn EventStore, flow_id: Uuid, definition: FlowDefinition) -> Self {
        event_store.append_kind(flow_id,
                                FlowEventKind::FlowInitialized { definition_hash: definition.definition_hash.clone(),
                                                                 step_count: definition.len() });
        Self { event_store,
               flow_id,
               definition,
               cursor: 0,
               step_fingerprints: Vec::new(),
               completed: false }
    }

    /// Ejecuta un step en la posición del cursor.
    pub fn run_step<S: TypedStep>(&mut self, step: &S, input: S::Input) -> Result<S::Output, CoreEngineError> {
        if self.completed {
            return Err(CoreEngineError::FlowCompleted);
        }
        let index = self.cursor;
        if index >= self.definition.len() {
            return Err(CoreEngineError::InvalidStepIndex(index));
        }
        let step_id = step.id().to_string();
        self.event_store.append_kind(self.flow_id,
                                     FlowEventKind::StepStarted { step_index: index,
                                                                  step_id: step_id.clone() });

        match step.run_typed(input) {
            Ok(output) => {
                let summary = step.summarize(&output);
                let fingerprint = self.fingerprint(index, &summary);
                self.event_store.append_kind(self.flow_id,
                                             FlowEventKind::StepFinished { step_index: index,
                                                                           step_id,
                                                                           summary,
                                                                           fingerprint: fingerprint.clone() });
                self.step_fingerprints.push(fingerprint);
                self.cursor += 1;
                Ok(output)
            }
            Err(error) => {
                let fingerprint = self.fingerprint(index, &serde_json::Value::Null);
                self.event_store.append_kind(self.flow_id,
                                             FlowEventKind::StepFailed { step_index: index,
                                                                         step_id: step_id.clone(),
                                                                         error: error.to_string(),
                                                                         fingerprint });
                Err(CoreEngineError::StepFailed { step_id,
                                                  source: Box::new(error) })
            }
        }
    }

    /// Cierra el flujo emitiendo `FlowCompleted` y devuelve su fingerprint.
    pub fn complete(&mut self) -> Result<String, CoreEngineError> {
        if self.completed {
            return Err(CoreEngineError::FlowCompleted);
        }
        if self.cursor != self.definition.len() {
            return Err(CoreEngineError::Internal(format!("flow closed after {} of {} steps",
                                                         self.cursor,
                                                         self.definition.len())));
        }
        let flow_fingerprint = hash_value(&json!({
            "engine_version": ENGINE_VERSION,
            "definition_hash": self.definition.definition_hash,
            "step_fingerprints": self.step_fingerprints,
        }));
        self.event_store.append_kind(self.flow_id,
                                     FlowEventKind::FlowCompleted { flow_fingerprint: flow_fingerprint.clone() });
        self.completed = true;
        Ok(flow_fingerprint)
    }

    fn fingerprint(&self, index: usize, summary: &serde_json::Value) -> String {
        hash_value(&json!({
            "engine_version": ENGINE_VERSION,
            "definition_hash": self.definition.definition_hash,
            "step_index": index,
            "output": summary,
        }))
    }
}
