//! Printable voucher content, independent of page layout.

use rusty_money::{Money, iso::Currency};

use crate::{
    domain::{
        clients::records::ClientRecord,
        sales::{
            data::{InvoiceType, PaymentType},
            records::SaleRecord,
        },
    },
    vouchers::{VoucherError, VoucherSettings},
};

pub(crate) const CANCELLED_BANNER: &str = "ANULADA / CANCELLED";

/// One printed sale line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct VoucherRow {
    pub quantity: String,
    pub product: String,
    pub unit_price: String,
    pub line_total: String,
}

/// Everything a layout prints, already formatted.
#[derive(Debug, Clone)]
pub(crate) struct VoucherContent {
    pub shop_name: String,
    pub banner: Option<&'static str>,
    pub details: Vec<(&'static str, String)>,
    pub rows: Vec<VoucherRow>,
    pub totals: Vec<(&'static str, String)>,
}

impl VoucherContent {
    pub(crate) fn build(
        settings: &VoucherSettings,
        sale: &SaleRecord,
        client: Option<&ClientRecord>,
        cashier: &str,
    ) -> Result<Self, VoucherError> {
        let date = sale
            .created_at
            .to_zoned(settings.time_zone.clone())
            .strftime("%d/%m/%Y %H:%M")
            .to_string();

        let mut details = vec![
            ("Sale", sale.uuid.to_string()),
            ("Date", date),
            ("Cashier", cashier.to_string()),
            ("Document", invoice_label(sale.invoice_type).to_string()),
            ("Payment", payment_label(sale.payment_type).to_string()),
        ];

        match client {
            Some(client) => {
                details.push(("Client", client.full_name()));

                if let Some(national_id) = &client.national_id {
                    details.push(("Client ID", national_id.clone()));
                }
            }
            None => details.push(("Client", "-".to_string())),
        }

        let rows = sale
            .lines
            .iter()
            .map(|line| {
                Ok(VoucherRow {
                    quantity: line.quantity.to_string(),
                    product: line.product_name.clone(),
                    unit_price: format_money(line.sale_price, settings.currency)?,
                    line_total: format_money(
                        line.total().ok_or(VoucherError::Overflow)?,
                        settings.currency,
                    )?,
                })
            })
            .collect::<Result<Vec<_>, VoucherError>>()?;

        let totals = vec![
            ("Items", sale.count.to_string()),
            ("Total", format_money(sale.amount, settings.currency)?),
        ];

        Ok(Self {
            shop_name: settings.shop_name.clone(),
            banner: sale.cancelled.then_some(CANCELLED_BANNER),
            details,
            rows,
            totals,
        })
    }
}

/// Render minor units as a currency string, e.g. `S/25.00`.
pub(crate) fn format_money(amount: u64, currency: &'static Currency) -> Result<String, VoucherError> {
    Ok(Money::from_minor(i64::try_from(amount)?, currency).to_string())
}

const fn invoice_label(invoice_type: InvoiceType) -> &'static str {
    match invoice_type {
        InvoiceType::Receipt => "Receipt",
        InvoiceType::Invoice => "Invoice",
        InvoiceType::Unissued => "Unissued",
    }
}

const fn payment_label(payment_type: PaymentType) -> &'static str {
    match payment_type {
        PaymentType::Cash => "Cash",
        PaymentType::Card => "Card",
        PaymentType::Transfer => "Transfer",
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use jiff::{Timestamp, tz::TimeZone};
    use rusty_money::iso;
    use testresult::TestResult;

    use crate::domain::{
        clients::records::ClientUuid,
        products::records::ProductUuid,
        sales::records::{SaleLineRecord, SaleLineUuid, SaleUuid},
        users::records::UserUuid,
    };

    use super::*;

    pub(crate) fn sample_sale(cancelled: bool) -> SaleRecord {
        let uuid = SaleUuid::new();
        let created_at = Timestamp::from_second(1_767_225_600).unwrap_or(Timestamp::UNIX_EPOCH);

        let line = |name: &str, quantity: u64, sale_price: u64| SaleLineRecord {
            uuid: SaleLineUuid::new(),
            sale_uuid: uuid,
            product_uuid: ProductUuid::new(),
            product_name: name.to_string(),
            quantity,
            purchase_price: sale_price / 2,
            sale_price,
            tax: 0,
            created_at,
        };

        SaleRecord {
            uuid,
            count: 3,
            amount: 2_500,
            invoice_type: InvoiceType::Receipt,
            payment_type: PaymentType::Cash,
            user_uuid: UserUuid::new(),
            client_uuid: None,
            closed: true,
            cancelled,
            lines: vec![line("Rice 1kg", 2, 1_000), line("Sugar", 1, 500)],
            created_at,
            updated_at: created_at,
        }
    }

    pub(crate) fn utc_settings() -> VoucherSettings {
        VoucherSettings {
            shop_name: "Bodega Test".to_string(),
            currency: iso::USD,
            time_zone: TimeZone::UTC,
            ..VoucherSettings::default()
        }
    }

    #[test]
    fn format_money_uses_currency_display() -> TestResult {
        assert_eq!(format_money(2_500, iso::USD)?, "$25.00");

        Ok(())
    }

    #[test]
    fn rows_carry_line_totals() -> TestResult {
        let content = VoucherContent::build(&utc_settings(), &sample_sale(false), None, "maria")?;

        assert_eq!(content.rows.len(), 2);
        assert_eq!(
            content.rows.first(),
            Some(&VoucherRow {
                quantity: "2".to_string(),
                product: "Rice 1kg".to_string(),
                unit_price: "$10.00".to_string(),
                line_total: "$20.00".to_string(),
            })
        );
        assert!(
            content.totals.contains(&("Total", "$25.00".to_string())),
            "total should be formatted: {:?}",
            content.totals
        );
        assert!(content.banner.is_none(), "live sale has no banner");

        Ok(())
    }

    #[test]
    fn date_is_printed_in_configured_zone() -> TestResult {
        let content = VoucherContent::build(&utc_settings(), &sample_sale(false), None, "maria")?;

        assert!(
            content.details.contains(&("Date", "01/01/2026 00:00".to_string())),
            "unexpected details: {:?}",
            content.details
        );

        Ok(())
    }

    #[test]
    fn client_block_lists_name_and_id() -> TestResult {
        let client = ClientRecord {
            uuid: ClientUuid::new(),
            name: "Rosa".to_string(),
            surname: "Quispe".to_string(),
            national_id: Some("45879632".to_string()),
            phone: String::new(),
            email: String::new(),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        };

        let content =
            VoucherContent::build(&utc_settings(), &sample_sale(false), Some(&client), "maria")?;

        assert!(content.details.contains(&("Client", "Rosa Quispe".to_string())));
        assert!(content.details.contains(&("Client ID", "45879632".to_string())));

        Ok(())
    }

    #[test]
    fn cancelled_sale_gets_banner() -> TestResult {
        let content = VoucherContent::build(&utc_settings(), &sample_sale(true), None, "maria")?;

        assert_eq!(content.banner, Some(CANCELLED_BANNER));

        Ok(())
    }
}
