//! Template discovery service.
//!
//! Owns the collaborators of a scan and exposes the single entry point
//! [`TemplateService::run_scan`]. Trigger sources are wired to it with
//! [`start`](TemplateService::start) / [`stop`](TemplateService::stop).

use super::scanner::{ScanReport, TemplateScanner};
use crate::diagnostics::TracingDiagnostics;
use crate::error::{MapshelfError, Result};
use mapshelf_plugin::{
    AssetIndexProvider, Diagnostics, NamingConvention, SettingsSource, SubscriptionId,
    TemplateRegistry, TriggerEvent, TriggerSource,
};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, error};

/// Result of a [`TemplateService::run_scan`] call
#[derive(Debug, Clone)]
pub enum ScanOutcome {
    /// The scan ran; the report covers the last full pass
    Completed(ScanReport),
    /// A scan was already running and will make one more pass
    Queued,
}

#[derive(Debug, Default)]
struct ScanState {
    running: bool,
    pending: bool,
}

/// Marks a scan as running until dropped, unwinding included
struct ScanGuard<'a> {
    state: &'a Mutex<ScanState>,
    finished: bool,
}

impl<'a> ScanGuard<'a> {
    /// Claim the scan slot, or record a pending pass if it is taken
    fn acquire(state: &'a Mutex<ScanState>) -> Option<Self> {
        let mut current = state.lock().unwrap_or_else(PoisonError::into_inner);
        if current.running {
            current.pending = true;
            return None;
        }
        current.running = true;
        Some(Self {
            state,
            finished: false,
        })
    }

    /// Consume a pending request, or release the slot when there is none
    fn take_pending(&mut self) -> bool {
        let mut current = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if current.pending {
            current.pending = false;
            return true;
        }
        current.running = false;
        self.finished = true;
        false
    }
}

impl Drop for ScanGuard<'_> {
    fn drop(&mut self) {
        if !self.finished {
            let mut current = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            current.running = false;
            current.pending = false;
        }
    }
}

/// Template discovery service
pub struct TemplateService {
    settings: Arc<dyn SettingsSource>,
    index: Arc<dyn AssetIndexProvider>,
    registry: Arc<dyn TemplateRegistry>,
    diagnostics: Arc<dyn Diagnostics>,
    scanner: TemplateScanner,
    state: Mutex<ScanState>,
    /// (trigger source address, subscription) pairs
    subscriptions: Mutex<Vec<(usize, SubscriptionId)>>,
}

impl TemplateService {
    /// Create a service that logs diagnostics through `tracing`
    pub fn new(
        settings: Arc<dyn SettingsSource>,
        index: Arc<dyn AssetIndexProvider>,
        registry: Arc<dyn TemplateRegistry>,
    ) -> Self {
        TemplateServiceBuilder::new(settings, index, registry).build()
    }

    /// Get a reference to the registry
    pub fn registry(&self) -> Arc<dyn TemplateRegistry> {
        self.registry.clone()
    }

    /// Whether a scan is currently running
    pub fn is_scanning(&self) -> bool {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).running
    }

    /// Run a full scan and publish new templates.
    ///
    /// Calls made while a scan is running (from a trigger fired during the
    /// scan, or from another thread) return [`ScanOutcome::Queued`]; the
    /// running scan then makes one more pass with fresh settings.
    ///
    /// Only a failure of the first pass is returned as an error. If a queued
    /// pass fails, the failure is logged and the report of the last completed
    /// pass is returned.
    pub fn run_scan(&self) -> Result<ScanOutcome> {
        let Some(mut guard) = ScanGuard::acquire(&self.state) else {
            debug!("Scan already in progress, queueing another pass");
            return Ok(ScanOutcome::Queued);
        };

        let mut report = self.scan_once()?;
        while guard.take_pending() {
            match self.scan_once() {
                Ok(next) => report = next,
                Err(e) => {
                    error!("Queued template rescan failed: {}", e);
                    break;
                }
            }
        }

        Ok(ScanOutcome::Completed(report))
    }

    fn scan_once(&self) -> Result<ScanReport> {
        let index = self
            .index
            .acquire()
            .map_err(|e| MapshelfError::IndexUnavailable(e.to_string()))?;

        let roots = self.settings.snapshot();
        self.diagnostics.info(&format!(
            "Scanning {} template roots with the {} index",
            roots.len(),
            index.name()
        ));

        Ok(self.scanner.scan(
            &roots,
            index.as_ref(),
            self.registry.as_ref(),
            self.diagnostics.as_ref(),
        ))
    }

    /// React to a trigger event
    pub fn handle_event(&self, event: TriggerEvent) {
        match event {
            TriggerEvent::HostReady { interactive: false } => {
                debug!("Host is not interactive, skipping template scan");
                return;
            }
            TriggerEvent::HostReady { interactive: true } | TriggerEvent::SettingsChanged => {}
        }

        if let Err(e) = self.run_scan() {
            error!("Template scan aborted on {:?}: {}", event, e);
        }
    }

    /// Subscribe this service to a trigger source
    pub fn start(self: &Arc<Self>, source: &dyn TriggerSource) -> SubscriptionId {
        let service = Arc::downgrade(self);
        let id = source.subscribe(Arc::new(move |event: TriggerEvent| {
            if let Some(service) = service.upgrade() {
                service.handle_event(event);
            }
        }));

        self.subscriptions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((source_key(source), id));
        id
    }

    /// Remove every subscription this service holds on `source`
    pub fn stop(&self, source: &dyn TriggerSource) {
        let key = source_key(source);
        let mut subscriptions = self
            .subscriptions
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        subscriptions.retain(|(owner, id)| {
            if *owner == key {
                source.unsubscribe(*id);
                false
            } else {
                true
            }
        });
    }
}

fn source_key(source: &dyn TriggerSource) -> usize {
    source as *const dyn TriggerSource as *const () as usize
}

/// Builder for TemplateService
pub struct TemplateServiceBuilder {
    settings: Arc<dyn SettingsSource>,
    index: Arc<dyn AssetIndexProvider>,
    registry: Arc<dyn TemplateRegistry>,
    diagnostics: Option<Arc<dyn Diagnostics>>,
    naming: Option<Arc<dyn NamingConvention>>,
}

impl TemplateServiceBuilder {
    pub fn new(
        settings: Arc<dyn SettingsSource>,
        index: Arc<dyn AssetIndexProvider>,
        registry: Arc<dyn TemplateRegistry>,
    ) -> Self {
        Self {
            settings,
            index,
            registry,
            diagnostics: None,
            naming: None,
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    pub fn with_naming(mut self, naming: Arc<dyn NamingConvention>) -> Self {
        self.naming = Some(naming);
        self
    }

    pub fn build(self) -> TemplateService {
        let mut scanner = TemplateScanner::new();
        if let Some(naming) = self.naming {
            scanner = scanner.with_naming(naming);
        }

        TemplateService {
            settings: self.settings,
            index: self.index,
            registry: self.registry,
            diagnostics: self
                .diagnostics
                .unwrap_or_else(|| Arc::new(TracingDiagnostics)),
            scanner,
            state: Mutex::new(ScanState::default()),
            subscriptions: Mutex::new(Vec::new()),
        }
    }
}
