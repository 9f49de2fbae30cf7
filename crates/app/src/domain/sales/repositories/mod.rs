//! Sale Repositories

mod checkout;
mod lines;
mod sales;

pub(crate) use checkout::{CheckoutEntry, PgCheckoutRepository};
pub(crate) use lines::PgSaleLinesRepository;
pub(crate) use sales::PgSalesRepository;
