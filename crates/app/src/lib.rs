//! Point-of-sale domain services, persistence and voucher rendering.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;
pub mod vouchers;

#[cfg(test)]
mod test;

mod uuids;

pub use uuids::TypedUuid;
