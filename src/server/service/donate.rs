//! Donation receipt shaping for PayPal return redirects.

use crate::server::model::donate::{DonationReceipt, PaypalReturn, UNKNOWN_AMOUNT};

const DEFAULT_CURRENCY: &str = "USD";

/// Builds the receipt shown on the thank-you page.
///
/// Every PayPal parameter is optional. Missing or malformed values never fail the
/// request: the status defaults to success, the currency to USD, a blank amount counts as
/// missing, and an amount that is not a finite number is shown as [`UNKNOWN_AMOUNT`].
pub fn build_receipt(params: PaypalReturn) -> DonationReceipt {
    let is_success = is_success(params.status.as_deref());

    let formatted = params
        .amount
        .as_deref()
        .filter(|amount| !amount.trim().is_empty())
        .map(|amount| format_amount(amount, params.currency.as_deref()));
    let amount_valid = !matches!(formatted, Some(None));
    let amount = formatted.map(|f| f.unwrap_or_else(|| UNKNOWN_AMOUNT.to_string()));

    DonationReceipt {
        transaction_id: params.transaction_id,
        amount,
        amount_valid,
        currency: params
            .currency
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        raw_amount: params.amount,
        status: params.status,
        item_name: params.item_name,
        is_success,
    }
}

/// A payment succeeded when PayPal sent no status or a status of "completed" in any case.
pub fn is_success(status: Option<&str>) -> bool {
    match status {
        None => true,
        Some(status) => status.is_empty() || status.eq_ignore_ascii_case("completed"),
    }
}

/// Formats a PayPal amount with two fraction digits and a currency prefix.
///
/// USD, a missing and an empty currency are shown as `$`; other currencies are prefixed
/// with their raw code.
///
/// # Returns
/// - `Some(String)` - Formatted amount such as `$12.50` or `EUR7.00`
/// - `None` - The amount is not a finite decimal number
pub fn format_amount(amount: &str, currency: Option<&str>) -> Option<String> {
    let value = amount.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;

    let symbol = match currency {
        None | Some("") | Some("USD") => "$",
        Some(code) => code,
    };

    Some(format!("{}{:.2}", symbol, value))
}
