use std::fmt;

use crate::error::CompileError;
use crate::plan::CompileTask;
use crate::runner::{CompileCommand, CompilerOutput};

#[derive(Debug)]
pub struct CompileOutcome {
    pub task: CompileTask,
    pub command: CompileCommand,
    pub result: Result<CompilerOutput, CompileError>,
}

impl CompileOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Every outcome of a batch, in the order the tasks ran.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<CompileOutcome>,
}

impl BatchReport {
    pub fn push(&mut self, outcome: CompileOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn succeeded(&self) -> impl Iterator<Item = &CompileOutcome> {
        self.outcomes.iter().filter(|o| o.is_success())
    }

    pub fn failures(&self) -> impl Iterator<Item = &CompileOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let failed = self.failures().count();
        write!(
            f,
            "compiled {} shader(s), {} failed",
            self.len() - failed,
            failed
        )?;
        for outcome in self.failures() {
            if let Err(err) = &outcome.result {
                write!(f, "\n  {}: {}", outcome.task.input.display(), err)?;
            }
        }
        Ok(())
    }
}
