//! Voucher Config

use clap::Args;

use market_app::vouchers::{
    DEFAULT_CURRENCY, DEFAULT_QR_BASE_URL, DEFAULT_SHOP_NAME, DEFAULT_TIME_ZONE, VoucherError,
    VoucherSettings,
};

/// Voucher printing settings.
#[derive(Debug, Args)]
pub struct VoucherConfig {
    /// Shop name printed in the voucher header
    #[arg(long, env = "VOUCHER_SHOP_NAME", default_value = DEFAULT_SHOP_NAME)]
    pub voucher_shop_name: String,

    /// ISO 4217 currency code used to format amounts
    #[arg(long, env = "VOUCHER_CURRENCY", default_value = DEFAULT_CURRENCY)]
    pub voucher_currency: String,

    /// IANA time zone used to print sale dates
    #[arg(long, env = "VOUCHER_TIME_ZONE", default_value = DEFAULT_TIME_ZONE)]
    pub voucher_time_zone: String,

    /// Base URL encoded in voucher QR codes
    #[arg(long, env = "VOUCHER_QR_BASE_URL", default_value = DEFAULT_QR_BASE_URL)]
    pub voucher_qr_base_url: String,
}

impl VoucherConfig {
    /// Resolve the configured currency and time zone.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown currency code or time zone.
    pub fn settings(&self) -> Result<VoucherSettings, VoucherError> {
        VoucherSettings::new(
            self.voucher_shop_name.clone(),
            &self.voucher_currency,
            &self.voucher_time_zone,
            self.voucher_qr_base_url.clone(),
        )
    }
}
