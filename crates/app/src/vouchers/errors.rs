//! Voucher rendering errors.

use std::num::TryFromIntError;

use thiserror::Error;

/// Errors raised while building a voucher document.
#[derive(Debug, Error)]
pub enum VoucherError {
    /// The configured ISO currency code is not known.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    /// The configured time zone could not be loaded.
    #[error("invalid time zone")]
    TimeZone(#[from] jiff::Error),

    /// A number does not fit the representation the renderer needs.
    #[error("value out of range")]
    OutOfRange(#[from] TryFromIntError),

    /// A line total overflowed.
    #[error("line total overflowed")]
    Overflow,

    /// The QR payload could not be encoded.
    #[error("qr code encoding failed")]
    QrCode(#[from] qrcode::types::QrError),

    /// The PDF writer failed.
    #[error("pdf generation failed")]
    Pdf(#[from] printpdf::Error),
}
