//! Diagnostics sinks.

use mapshelf_plugin::{Diagnostics, ScanWarning};
use std::sync::{Mutex, PoisonError};

/// Forwards diagnostics to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warning(&self, warning: &ScanWarning) {
        tracing::warn!(target: "mapshelf::templates", "{}", warning);
    }

    fn info(&self, message: &str) {
        tracing::info!(target: "mapshelf::templates", "{}", message);
    }

    fn debug(&self, message: &str) {
        tracing::debug!(target: "mapshelf::templates", "{}", message);
    }
}

/// Keeps every warning in memory, for reports and tests
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    warnings: Mutex<Vec<ScanWarning>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<ScanWarning> {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Remove and return the recorded warnings
    pub fn take(&self) -> Vec<ScanWarning> {
        std::mem::take(&mut *self.warnings.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn warning(&self, warning: &ScanWarning) {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(warning.clone());
    }
}
