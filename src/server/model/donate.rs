//! Donation receipt shown after a PayPal redirect.

use serde::Serialize;

/// Placeholder shown when PayPal returned an amount that is not a finite number.
pub const UNKNOWN_AMOUNT: &str = "Unknown amount";

/// Query parameters PayPal appends to the return URL, all optional.
#[derive(Debug, Clone, Default)]
pub struct PaypalReturn {
    /// Transaction ID (`tx`).
    pub transaction_id: Option<String>,
    /// Amount as sent by PayPal (`amt`).
    pub amount: Option<String>,
    /// Payment status (`st`).
    pub status: Option<String>,
    /// Currency code (`cc`).
    pub currency: Option<String>,
    /// Donation item name (`item_name`).
    pub item_name: Option<String>,
}

/// Outcome of a donation as presented on the thank-you page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationReceipt {
    pub transaction_id: Option<String>,
    /// Formatted amount such as `$12.50`, or [`UNKNOWN_AMOUNT`].
    pub amount: Option<String>,
    /// False when `amt` was present but could not be parsed.
    pub amount_valid: bool,
    pub raw_amount: Option<String>,
    pub status: Option<String>,
    /// Currency code, `USD` when PayPal did not send one.
    pub currency: String,
    pub item_name: Option<String>,
    pub is_success: bool,
}
