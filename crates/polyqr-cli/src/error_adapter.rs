//! Error adapter for converting PolyQrError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! type and miette's rich diagnostic formatting used in the CLI. The
//! library errors carry no source spans, so the adapter only maps codes
//! and help text.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use polyqr::PolyQrError;

/// Adapter wrapping a [`PolyQrError`] for miette rendering.
pub struct ErrorAdapter<'a>(pub &'a PolyQrError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            PolyQrError::Encode(_) => "polyqr::encode",
            PolyQrError::Geometry(_) => "polyqr::geometry",
            PolyQrError::Config(_) => "polyqr::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            PolyQrError::Encode(_) => Some(Box::new(
                "shorten the message; QR codes hold at most 2953 bytes",
            )),
            PolyQrError::Geometry(_) | PolyQrError::Config(_) => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
