//! Level template discovery.
//!
//! ```text
//! ┌──────────────┐   sub-paths    ┌───────────┐   MatchResult   ┌──────────────┐
//! │  AssetIndex  │───────────────▶│  matcher  │────────────────▶│   builder    │
//! └──────────────┘   + assets     └───────────┘                 └──────┬───────┘
//!                                                                      │ descriptors
//!                                                                      ▼
//!                      ┌──────────────────┐  one batch per root ┌──────────────┐
//!                      │ TemplateScanner  │────────────────────▶│   Registry   │
//!                      └──────────────────┘                     └──────────────┘
//! ```

pub mod builder;
pub mod humanize;
pub mod matcher;
pub mod registry;
pub mod scanner;
pub mod service;

pub use builder::build_template;
pub use humanize::humanize;
pub use matcher::{MatchOutcome, MatchResult, match_template};
pub use registry::{InMemoryTemplateRegistry, RegistryStats};
pub use scanner::{ScanReport, TemplateScanner};
pub use service::{ScanOutcome, TemplateService, TemplateServiceBuilder};
