//! State

use std::sync::Arc;

use market_app::{context::AppContext, vouchers::VoucherRenderer};

/// Shared request state injected into every route.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) vouchers: VoucherRenderer,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, vouchers: VoucherRenderer) -> Self {
        Self { app, vouchers }
    }

    #[must_use]
    pub(crate) fn shared(app: AppContext, vouchers: VoucherRenderer) -> Arc<Self> {
        Arc::new(Self::new(app, vouchers))
    }
}
