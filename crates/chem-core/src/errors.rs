//! Errores específicos del core.

use std::error::Error;

use thiserror::Error;

/// Error concreto de un step, ya borrado de tipo.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum CoreEngineError {
    #[error("flow already completed")]
    FlowCompleted,
    #[error("pipe has more steps than its definition ({0})")]
    InvalidStepIndex(usize),
    #[error("step '{step_id}' failed")]
    StepFailed {
        step_id: String,
        #[source]
        source: BoxError,
    },
    #[error("internal: {0}")]
    Internal(String),
}

impl CoreEngineError {
    /// Id del step que abortó el flujo (stop-on-failure), si aplica.
    pub fn failed_step(&self) -> Option<&str> {
        match self {
            CoreEngineError::StepFailed { step_id, .. } => Some(step_id),
            _ => None,
        }
    }

    /// Recupera el error tipado que produjo el step.
    pub fn step_error<T: Error + 'static>(&self) -> Option<&T> {
        match self {
            CoreEngineError::StepFailed { source, .. } => source.downcast_ref::<T>(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("boom")]
    struct Boom;

    #[test]
    fn step_failed_exposes_step_and_source() {
        let err = CoreEngineError::StepFailed { step_id: "facts".into(),
                                                source: Box::new(Boom) };
        assert_eq!(err.to_string(), "step 'facts' failed");
        assert_eq!(err.failed_step(), Some("facts"));
        assert!(err.step_error::<Boom>().is_some());
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("boom"));
    }

    #[test]
    fn internal_has_no_failed_step() {
        let err = CoreEngineError::Internal("x".into());
        assert_eq!(err.failed_step(), None);
        assert!(err.step_error::<Boom>().is_none());
    }
}
