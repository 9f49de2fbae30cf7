//! Market Domain Concerns

pub mod carts;
pub mod clients;
pub mod products;
pub mod sales;
pub mod users;

mod sql_errors;
