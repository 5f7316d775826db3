//! Level template discovery core.
//!
//! Scans configured template roots through an asset index, pairs each
//! template path with a level and an optional thumbnail, and publishes new
//! templates to a registry one root at a time.

pub mod asset;
pub mod diagnostics;
pub mod error;
pub mod logging;
pub mod settings;
pub mod template;
pub mod trigger;

pub use error::{MapshelfError, Result};
pub use settings::{FileSettingsSource, TemplateSettings};
pub use template::{
    InMemoryTemplateRegistry, ScanOutcome, ScanReport, TemplateScanner, TemplateService,
    TemplateServiceBuilder,
};
pub use trigger::EventBus;
