use super::{StepKind, TypedStep};
use crate::engine::FlowCtx;
use crate::errors::CoreEngineError;
use crate::repo::FlowDefinition;

type Stages<'a, I, O> = Box<dyn FnOnce(I, &mut FlowCtx<'_>) -> Result<O, CoreEngineError> + 'a>;

/// Typed pipeline builder that enforces at compile time that the next step's
/// input matches the previous step's output.
///
/// Usage:
///   let pipe = Pipe::new(SeedStep).then(SumStep).then(NextStep);
///   let out = engine.run(pipe, seed_input)?;
pub struct Pipe<'a, I, O> {
    steps: Vec<(&'static str, StepKind)>,
    stages: Stages<'a, I, O>,
}

impl<'a, I: 'a, O: 'a> Pipe<'a, I, O> {
    pub fn new<S>(step: S) -> Self
        where S: TypedStep<Input = I, Output = O> + 'a
    {
        let steps = vec![(step.id(), step.kind())];
        let stages: Stages<'a, I, O> = Box::new(move |input: I, ctx: &mut FlowCtx<'_>| ctx.run_step(&step, input));
        Self { steps, stages }
    }

    /// Append a new step, enforcing N::Input == O at compile time.
    pub fn then<N>(self, next: N) -> Pipe<'a, I, N::Output>
        where N: TypedStep<Input = O> + 'a,
              N::Output: 'a
    {
        let Pipe { mut steps, stages } = self;
        steps.push((next.id(), next.kind()));
        let chained: Stages<'a, I, N::Output> = Box::new(move |input: I, ctx: &mut FlowCtx<'_>| {
            let mid = stages(input, ctx)?;
            ctx.run_step(&next, mid)
        });
        Pipe { steps, stages: chained }
    }
}

impl<I, O> Pipe<'_, I, O> {
    /// Ids de los steps en orden de ejecución.
    pub fn step_ids(&self) -> Vec<&'static str> {
        self.steps.iter().map(|(id, _)| *id).collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Definición inmutable (ids + hash) derivada de la cadena.
    pub fn definition(&self) -> FlowDefinition {
        FlowDefinition::from_steps(&self.steps)
    }

    pub(crate) fn execute(self, input: I, ctx: &mut FlowCtx<'_>) -> Result<O, CoreEngineError> {
        (self.stages)(input, ctx)
    }
}
