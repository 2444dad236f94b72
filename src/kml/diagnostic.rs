use std::fmt;

/// Data quality issues that never stop a conversion. They are reported only in strict mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The `normal` pair of a StyleMap points at a style without a direct color.
    UnresolvedAlias { style_map: String, target: String },
    UnresolvedStyleUrl { placemark: String, style_url: String },
    MissingGeometry { placemark: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnresolvedAlias { style_map, target } => write!(
                f,
                "StyleMap {style_map:?} refers to {target:?}, a style without a direct color"
            ),
            Diagnostic::UnresolvedStyleUrl {
                placemark,
                style_url,
            } => write!(
                f,
                "Placemark {placemark:?} refers to unknown style {style_url:?}, using default color"
            ),
            Diagnostic::MissingGeometry { placemark } => {
                write!(f, "Placemark {placemark:?} has no geometry and was skipped")
            }
        }
    }
}
