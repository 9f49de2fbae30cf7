//! Sale vouchers rendered as PDF documents.

mod content;
mod errors;
mod format;
mod pdf;
mod settings;

pub use errors::*;
pub use format::*;
pub use settings::*;

use crate::domain::{clients::records::ClientRecord, sales::records::SaleRecord};

/// Renders sale vouchers with a fixed set of shop settings.
#[derive(Debug, Clone, Default)]
pub struct VoucherRenderer {
    settings: VoucherSettings,
}

impl VoucherRenderer {
    pub fn new(settings: VoucherSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &VoucherSettings {
        &self.settings
    }

    /// Render `sale` (with its lines loaded) as a PDF in the given format.
    #[tracing::instrument(
        name = "vouchers.render",
        skip(self, sale, client, cashier),
        fields(sale_uuid = %sale.uuid, format = %format),
        err
    )]
    pub fn render(
        &self,
        sale: &SaleRecord,
        client: Option<&ClientRecord>,
        cashier: &str,
        format: VoucherFormat,
    ) -> Result<Vec<u8>, VoucherError> {
        let content = content::VoucherContent::build(&self.settings, sale, client, cashier)?;
        match format {
            VoucherFormat::Standard => {
                pdf::render_standard(&content, &self.settings.qr_url(sale.uuid))
            }
            VoucherFormat::Thermal => pdf::render_thermal(&content),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::{
        content::tests::{sample_sale, utc_settings},
        *,
    };

    #[test]
    fn standard_voucher_is_a_pdf() -> TestResult {
        let renderer = VoucherRenderer::new(utc_settings());
        let bytes = renderer.render(&sample_sale(false), None, "maria", VoucherFormat::Standard)?;

        assert!(bytes.starts_with(b"%PDF"), "expected a PDF header");

        Ok(())
    }

    #[test]
    fn thermal_voucher_is_a_pdf() -> TestResult {
        let renderer = VoucherRenderer::new(utc_settings());
        let bytes = renderer.render(&sample_sale(true), None, "maria", VoucherFormat::Thermal)?;

        assert!(bytes.starts_with(b"%PDF"), "expected a PDF header");

        Ok(())
    }

    #[test]
    fn long_sales_spill_onto_more_pages() -> TestResult {
        let mut sale = sample_sale(false);
        let template = sale.lines.first().cloned().ok_or("sample sale has lines")?;
        sale.lines = vec![template; 120];

        let renderer = VoucherRenderer::new(utc_settings());
        let short = renderer.render(&sample_sale(false), None, "maria", VoucherFormat::Standard)?;
        let long = renderer.render(&sale, None, "maria", VoucherFormat::Standard)?;

        assert!(long.len() > short.len(), "long voucher should be larger");

        Ok(())
    }
}
