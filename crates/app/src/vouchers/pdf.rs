//! PDF layouts for sale vouchers.

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Rect, Rgb, path::PaintMode,
};
use qrcode::QrCode;

use crate::vouchers::{
    VoucherError,
    content::{VoucherContent, VoucherRow},
};

const LAYER: &str = "Layer 1";

const A4_WIDTH: f32 = 210.0;
const A4_HEIGHT: f32 = 297.0;
const A4_MARGIN: f32 = 15.0;
const A4_LINE: f32 = 6.0;
const A4_QR_SIZE: f32 = 35.0;

const THERMAL_WIDTH: f32 = 80.0;
const THERMAL_MARGIN: f32 = 4.0;
const THERMAL_LINE: f32 = 4.5;
const THERMAL_FIXED_HEIGHT: f32 = 40.0;

/// Longest product name printed before truncation.
const A4_NAME_CHARS: usize = 48;
const THERMAL_NAME_CHARS: usize = 28;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Fonts {
    fn load(doc: &PdfDocumentReference) -> Result<Self, VoucherError> {
        Ok(Self {
            regular: doc.add_builtin_font(BuiltinFont::Helvetica)?,
            bold: doc.add_builtin_font(BuiltinFont::HelveticaBold)?,
        })
    }
}

/// Full-page A4 voucher. Rows continue on new pages as needed.
pub(crate) fn render_standard(content: &VoucherContent, qr_url: &str) -> Result<Vec<u8>, VoucherError> {
    let (doc, page, layer) =
        PdfDocument::new(content.shop_name.as_str(), Mm(A4_WIDTH), Mm(A4_HEIGHT), LAYER);
    let fonts = Fonts::load(&doc)?;
    let mut layer = doc.get_page(page).get_layer(layer);

    let mut y = A4_HEIGHT - A4_MARGIN - 5.0;

    layer.use_text(content.shop_name.as_str(), 18.0, Mm(A4_MARGIN), Mm(y), &fonts.bold);
    draw_qr(
        &layer,
        qr_url,
        A4_WIDTH - A4_MARGIN - A4_QR_SIZE,
        A4_HEIGHT - A4_MARGIN,
        A4_QR_SIZE,
    )?;
    y -= A4_LINE * 2.0;

    if let Some(banner) = content.banner {
        layer.use_text(banner, 16.0, Mm(A4_MARGIN), Mm(y), &fonts.bold);
        y -= A4_LINE * 1.5;
    }

    for (label, value) in &content.details {
        layer.use_text(format!("{label}:"), 10.0, Mm(A4_MARGIN), Mm(y), &fonts.bold);
        layer.use_text(value.as_str(), 10.0, Mm(A4_MARGIN + 25.0), Mm(y), &fonts.regular);
        y -= A4_LINE;
    }

    // Keep the table clear of the QR code.
    y = y.min(A4_HEIGHT - A4_MARGIN - A4_QR_SIZE - A4_LINE) - A4_LINE;

    draw_a4_header(&layer, &fonts, y);
    y -= A4_LINE;

    for row in &content.rows {
        if y < A4_MARGIN + A4_LINE * 4.0 {
            let (page, next) = doc.add_page(Mm(A4_WIDTH), Mm(A4_HEIGHT), LAYER);
            layer = doc.get_page(page).get_layer(next);
            y = A4_HEIGHT - A4_MARGIN - 5.0;

            draw_a4_header(&layer, &fonts, y);
            y -= A4_LINE;
        }

        draw_a4_row(&layer, &fonts, row, y);
        y -= A4_LINE;
    }

    y -= A4_LINE / 2.0;

    for (label, value) in &content.totals {
        layer.use_text(format!("{label}:"), 11.0, Mm(140.0), Mm(y), &fonts.bold);
        layer.use_text(value.as_str(), 11.0, Mm(172.0), Mm(y), &fonts.regular);
        y -= A4_LINE;
    }

    Ok(doc.save_to_bytes()?)
}

fn draw_a4_header(layer: &PdfLayerReference, fonts: &Fonts, y: f32) {
    for (text, x) in [("Qty", A4_MARGIN), ("Product", 32.0), ("Unit", 140.0), ("Total", 172.0)] {
        layer.use_text(text, 10.0, Mm(x), Mm(y), &fonts.bold);
    }
}

fn draw_a4_row(layer: &PdfLayerReference, fonts: &Fonts, row: &VoucherRow, y: f32) {
    layer.use_text(row.quantity.as_str(), 10.0, Mm(A4_MARGIN), Mm(y), &fonts.regular);
    layer.use_text(truncate(&row.product, A4_NAME_CHARS), 10.0, Mm(32.0), Mm(y), &fonts.regular);
    layer.use_text(row.unit_price.as_str(), 10.0, Mm(140.0), Mm(y), &fonts.regular);
    layer.use_text(row.line_total.as_str(), 10.0, Mm(172.0), Mm(y), &fonts.regular);
}

/// 80mm roll voucher on a single page sized to its content.
pub(crate) fn render_thermal(content: &VoucherContent) -> Result<Vec<u8>, VoucherError> {
    let lines = content.details.len() + content.rows.len() * 2 + content.totals.len();
    let height = THERMAL_FIXED_HEIGHT + f32::from(u16::try_from(lines)?) * THERMAL_LINE;

    let (doc, page, layer) =
        PdfDocument::new(content.shop_name.as_str(), Mm(THERMAL_WIDTH), Mm(height), LAYER);
    let fonts = Fonts::load(&doc)?;
    let layer = doc.get_page(page).get_layer(layer);

    let right = THERMAL_WIDTH - THERMAL_MARGIN - 18.0;
    let mut y = height - THERMAL_MARGIN - 4.0;

    layer.use_text(content.shop_name.as_str(), 12.0, Mm(THERMAL_MARGIN), Mm(y), &fonts.bold);
    y -= THERMAL_LINE * 1.5;

    if let Some(banner) = content.banner {
        layer.use_text(banner, 10.0, Mm(THERMAL_MARGIN), Mm(y), &fonts.bold);
        y -= THERMAL_LINE * 1.5;
    }

    for (label, value) in &content.details {
        layer.use_text(format!("{label}: {value}"), 7.0, Mm(THERMAL_MARGIN), Mm(y), &fonts.regular);
        y -= THERMAL_LINE;
    }

    y -= THERMAL_LINE / 2.0;

    for row in &content.rows {
        layer.use_text(
            truncate(&row.product, THERMAL_NAME_CHARS),
            8.0,
            Mm(THERMAL_MARGIN),
            Mm(y),
            &fonts.bold,
        );
        y -= THERMAL_LINE;

        layer.use_text(
            format!("{} x {}", row.quantity, row.unit_price),
            8.0,
            Mm(THERMAL_MARGIN + 2.0),
            Mm(y),
            &fonts.regular,
        );
        layer.use_text(row.line_total.as_str(), 8.0, Mm(right), Mm(y), &fonts.regular);
        y -= THERMAL_LINE;
    }

    y -= THERMAL_LINE / 2.0;

    for (label, value) in &content.totals {
        layer.use_text(*label, 9.0, Mm(THERMAL_MARGIN), Mm(y), &fonts.bold);
        layer.use_text(value.as_str(), 9.0, Mm(right), Mm(y), &fonts.bold);
        y -= THERMAL_LINE;
    }

    Ok(doc.save_to_bytes()?)
}

/// Draw `payload` as a QR code whose top-left corner is at (`left`, `top`).
fn draw_qr(
    layer: &PdfLayerReference,
    payload: &str,
    left: f32,
    top: f32,
    size: f32,
) -> Result<(), VoucherError> {
    let code = QrCode::new(payload.as_bytes())?;
    let width = code.width();
    let module = size / f32::from(u16::try_from(width)?);

    layer.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));

    let mut y = top;

    for row in code.to_colors().chunks(width) {
        let mut x = left;

        for color in row {
            if *color == qrcode::Color::Dark {
                layer.add_rect(
                    Rect::new(Mm(x), Mm(y - module), Mm(x + module), Mm(y))
                        .with_mode(PaintMode::Fill),
                );
            }

            x += module;
        }

        y -= module;
    }

    Ok(())
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let mut short: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    short.push_str("...");
    short
}
