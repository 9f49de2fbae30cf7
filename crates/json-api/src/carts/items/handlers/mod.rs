//! Cart Item Handlers

pub(crate) mod create;
pub(crate) mod decrement;
pub(crate) mod delete;
