//! # Shared Utility Functions
//!
//! Display helpers used by every client of the account service.
//!
//! ```rust
//! use shared::utils::format_currency;
//!
//! assert_eq!(format_currency(150.0), "$150.00");
//! ```

/// Format a balance as dollars with two decimal places.
///
/// Negative balances keep their sign after the dollar symbol (`$-3.50`),
/// matching how the balance is printed on the dashboard.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_currency;
///
/// assert_eq!(format_currency(100.0), "$100.00");
/// assert_eq!(format_currency(2.5), "$2.50");
/// ```
pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Display name for an account holder, with a dash for blank names.
pub fn display_name(customer_name: &str) -> &str {
    if customer_name.is_empty() {
        "—"
    } else {
        customer_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(100.0), "$100.00");
        assert_eq!(format_currency(150.5), "$150.50");
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-3.5), "$-3.50");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("Ada"), "Ada");
        assert_eq!(display_name(""), "—");
    }
}
