//! Voucher formats and file names.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::domain::sales::records::SaleUuid;

/// Page layout of a voucher.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum VoucherFormat {
    /// A4 page with a QR code.
    #[default]
    Standard,

    /// 80 mm thermal roll, no QR code.
    Thermal,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown voucher format: {0}")]
pub struct UnknownVoucherFormat(String);

impl VoucherFormat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Thermal => "thermal",
        }
    }

    /// Download name offered for a sale's voucher.
    pub fn filename(&self, sale: SaleUuid) -> String {
        match self {
            Self::Standard => format!("receipt_{sale}.pdf"),
            Self::Thermal => format!("receipt_{sale}_thermal.pdf"),
        }
    }
}

impl FromStr for VoucherFormat {
    type Err = UnknownVoucherFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "standard" => Ok(Self::Standard),
            "thermal" => Ok(Self::Thermal),
            _ => Err(UnknownVoucherFormat(s.to_string())),
        }
    }
}

impl fmt::Display for VoucherFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
