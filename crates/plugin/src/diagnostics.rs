use std::fmt;

/// Non-fatal conditions reported while matching a template path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanWarning {
    /// The path holds no level whose name contains the template name
    MissingLevel { leaf: String, expected: String },
    /// A level was found but no thumbnail texture
    MissingThumbnail { leaf: String, expected: String },
}

impl ScanWarning {
    /// Template name the warning refers to
    pub fn leaf(&self) -> &str {
        match self {
            ScanWarning::MissingLevel { leaf, .. } | ScanWarning::MissingThumbnail { leaf, .. } => {
                leaf
            }
        }
    }

    /// Asset name the naming convention expects
    pub fn expected(&self) -> &str {
        match self {
            ScanWarning::MissingLevel { expected, .. }
            | ScanWarning::MissingThumbnail { expected, .. } => expected,
        }
    }
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanWarning::MissingLevel { leaf, expected } => write!(
                f,
                "A map template path was found, but it didn't contain a matching level with the name '{leaf}'. \
                 Ensure a level exists, and name it appropriately (ie. '{expected}')"
            ),
            ScanWarning::MissingThumbnail { leaf, expected } => write!(
                f,
                "A map template path was found, but it didn't contain a matching thumbnail texture with the name '{leaf}'. \
                 To use a custom thumbnail, ensure a texture exists, and name it appropriately (ie. '{expected}')"
            ),
        }
    }
}

/// Side channel for scan diagnostics, one method per severity
pub trait Diagnostics: Send + Sync {
    fn warning(&self, warning: &ScanWarning);

    fn info(&self, _message: &str) {}

    fn debug(&self, _message: &str) {}
}
