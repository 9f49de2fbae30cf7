//! Voucher settings.

use jiff::tz::{self, TimeZone};
use rusty_money::iso::{self, Currency};

use crate::{domain::sales::records::SaleUuid, vouchers::VoucherError};

pub const DEFAULT_SHOP_NAME: &str = "Market";
pub const DEFAULT_CURRENCY: &str = "PEN";
pub const DEFAULT_TIME_ZONE: &str = "America/Lima";
pub const DEFAULT_QR_BASE_URL: &str = "https://marketdj.com/venta";

/// Shop-wide values printed on every voucher.
#[derive(Debug, Clone)]
pub struct VoucherSettings {
    pub shop_name: String,
    pub currency: &'static Currency,

    /// Zone used to print the sale date.
    pub time_zone: TimeZone,

    /// QR codes encode `{qr_base_url}/{sale_uuid}`.
    pub qr_base_url: String,
}

impl VoucherSettings {
    /// Resolve settings from their configured string forms.
    pub fn new(
        shop_name: impl Into<String>,
        currency_code: &str,
        time_zone: &str,
        qr_base_url: impl Into<String>,
    ) -> Result<Self, VoucherError> {
        let currency = iso::find(&currency_code.trim().to_ascii_uppercase())
            .ok_or_else(|| VoucherError::UnknownCurrency(currency_code.to_string()))?;

        Ok(Self {
            shop_name: shop_name.into(),
            currency,
            time_zone: TimeZone::get(time_zone)?,
            qr_base_url: qr_base_url.into(),
        })
    }

    /// Public link to a sale, as embedded in its QR code.
    pub fn qr_url(&self, sale: SaleUuid) -> String {
        format!("{}/{sale}", self.qr_base_url.trim_end_matches('/'))
    }
}

impl Default for VoucherSettings {
    fn default() -> Self {
        Self {
            shop_name: DEFAULT_SHOP_NAME.to_string(),
            currency: iso::PEN,
            // Lima has no DST, so the fixed offset is exact when no tzdb is present.
            time_zone: TimeZone::get(DEFAULT_TIME_ZONE)
                .unwrap_or_else(|_| TimeZone::fixed(tz::offset(-5))),
            qr_base_url: DEFAULT_QR_BASE_URL.to_string(),
        }
    }
}
