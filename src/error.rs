//! Unified error types for Signpost.
//!
//! Defines [`SignpostError`] (the main crate error enum) and
//! [`ValidationError`] for route-table construction failures. Error
//! messages include contextual hints to guide the user toward a fix.
//! Routing misses are deliberately NOT errors: a path that matches no
//! node or no leaf is an ordinary
//! [`ResolvedRoute`](crate::resolve::ResolvedRoute) with the
//! corresponding name absent.

#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Path of the node under inspection, e.g. `/shop/item`.
    pub node: String,
    /// The offending document key.
    pub key: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "  node {}: {} — {}", self.node, self.key, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " ({suggestion})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

fn format_errors(errors: &[ValidationError]) -> String {
    use std::fmt::Write;
    let mut buf = String::new();
    for (i, e) in errors.iter().enumerate() {
        if i > 0 {
            buf.push('\n');
        }
        // write! to String is infallible (only fails on OOM which is unrecoverable)
        let _ = write!(buf, "{e}");
    }
    buf
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SignpostError {
    #[error("Route table parse error in {path}:\n  {source}")]
    TableParse {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Route table validation failed:\n{}", format_errors(.errors))]
    TableValidation { errors: Vec<ValidationError> },

    #[error("Unsupported table format: '{0}'")]
    UnsupportedFormat(String),
}
