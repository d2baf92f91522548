//! Error types for PolyQR operations.

use thiserror::Error;

use polyqr_core::GeometryError;

/// The main error type for PolyQR operations.
///
/// `Encode` carries the external encoder's failure unchanged; it is not
/// retried, since encoding is deterministic. `Geometry` signals an
/// internal-consistency defect in the pipeline and aborts the conversion.
#[derive(Debug, Error)]
pub enum PolyQrError {
    #[error("QR encoding error: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("Configuration error: {0}")]
    Config(String),
}
