//! Sales Data

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{clients::records::ClientUuid, sales::records::SaleUuid};

/// Kind of fiscal document issued for a sale.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceType {
    Receipt,
    Invoice,
    #[default]
    Unissued,
}

impl InvoiceType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Receipt => "receipt",
            Self::Invoice => "invoice",
            Self::Unissued => "unissued",
        }
    }
}

/// How the customer paid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    #[default]
    Cash,
    Card,
    Transfer,
}

impl PaymentType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Card => "card",
            Self::Transfer => "transfer",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
}

impl FromStr for InvoiceType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "receipt" => Ok(Self::Receipt),
            "invoice" => Ok(Self::Invoice),
            "unissued" => Ok(Self::Unissued),
            other => Err(UnknownVariant {
                kind: "invoice type",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for PaymentType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(Self::Cash),
            "card" => Ok(Self::Card),
            "transfer" => Ok(Self::Transfer),
            other => Err(UnknownVariant {
                kind: "payment type",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for InvoiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// New Sale Data
///
/// Totals and lines are derived from the cart at checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSale {
    pub uuid: SaleUuid,
    pub invoice_type: InvoiceType,
    pub payment_type: PaymentType,
    pub client_uuid: Option<ClientUuid>,
}

impl NewSale {
    /// A cash sale with no document and no client.
    pub fn simple(uuid: SaleUuid) -> Self {
        Self {
            uuid,
            invoice_type: InvoiceType::Unissued,
            payment_type: PaymentType::Cash,
            client_uuid: None,
        }
    }
}
