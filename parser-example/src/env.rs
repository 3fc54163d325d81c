use common_framework::{Diagnostic, Position};
use std::collections::HashMap;

/// Variables and diagnostics shared by every statement the calculator runs.
///
/// The parser borrows it on each pull, so assignments made on one line are
/// visible to the next.
#[derive(Debug, Clone, Default)]
pub struct CalcEnv {
    vars: HashMap<String, f64>,
    diagnostics: Vec<Diagnostic>,
}

impl CalcEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        let name = name.into();
        log::debug!("{} = {}", name, value);
        self.vars.insert(name, value);
    }

    pub fn report(&mut self, position: Position, message: impl Into<String>) {
        let diagnostic = Diagnostic::new(position, message);
        log::debug!("diagnostic: {}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns the diagnostics reported so far and clears them.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}
