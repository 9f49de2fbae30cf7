//! Sale Totals

use thiserror::Error;

/// Quantity and amount of a sale, derived from its entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaleTotals {
    /// Sum of all entry quantities.
    pub count: u64,

    /// Sum of `quantity * unit_price` over all entries, in minor units.
    pub amount: u64,
}

/// A count, line total or amount did not fit in `u64`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("sale totals overflowed")]
pub struct TotalsOverflow;

impl SaleTotals {
    /// Fold `(quantity, unit_price)` pairs into totals.
    ///
    /// # Errors
    ///
    /// Returns [`TotalsOverflow`] when any product or sum exceeds `u64`.
    pub fn from_entries<I>(entries: I) -> Result<Self, TotalsOverflow>
    where
        I: IntoIterator<Item = (u64, u64)>,
    {
        entries
            .into_iter()
            .try_fold(Self::default(), |totals, (quantity, unit_price)| {
                Some(Self {
                    count: totals.count.checked_add(quantity)?,
                    amount: totals
                        .amount
                        .checked_add(line_total(quantity, unit_price)?)?,
                })
            })
            .ok_or(TotalsOverflow)
    }

    /// No units at all.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// `quantity * unit_price`, or `None` on overflow.
pub fn line_total(quantity: u64, unit_price: u64) -> Option<u64> {
    quantity.checked_mul(unit_price)
}
