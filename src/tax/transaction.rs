//! Transactional tax on early withdrawals

/// Withdrawals on or after this many days carry no transactional tax
pub const TRANSACTION_TAX_WINDOW_DAYS: u32 = 30;

/// Transactional tax rate for a withdrawal after `days` whole days.
///
/// Linear approximation of the regulatory table: (30 - max(1, days)) / 29,
/// falling by 1/29 per day until it reaches zero on day 30.
pub fn transaction_tax_rate(days: u32) -> f64 {
    if days >= TRANSACTION_TAX_WINDOW_DAYS {
        return 0.0;
    }
    let remaining = TRANSACTION_TAX_WINDOW_DAYS - days.max(1);
    (f64::from(remaining) / 29.0).max(0.0)
}
