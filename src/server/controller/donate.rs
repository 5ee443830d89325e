use axum::{
    extract::{Query, State},
    response::Response,
};
use serde::{Deserialize, Serialize};

use crate::server::{
    error::AppError,
    model::donate::{DonationReceipt, PaypalReturn},
    service::donate::build_receipt,
    state::AppState,
    view::View,
};

/// Query parameters PayPal appends when redirecting back after a donation.
#[derive(Deserialize, Debug, Default)]
pub struct PaypalReturnParams {
    pub tx: Option<String>,
    pub amt: Option<String>,
    pub st: Option<String>,
    pub cc: Option<String>,
    pub item_name: Option<String>,
}

impl PaypalReturnParams {
    pub fn into_param(self) -> PaypalReturn {
        PaypalReturn {
            transaction_id: self.tx,
            amount: self.amt,
            status: self.st,
            currency: self.cc,
            item_name: self.item_name,
        }
    }
}

#[derive(Serialize)]
struct DonateView {
    title: &'static str,
    description: &'static str,
}

#[derive(Serialize)]
struct ThankYouView {
    title: &'static str,
    description: &'static str,
    #[serde(flatten)]
    receipt: DonationReceipt,
}

/// GET /donate - Donation page.
pub async fn index(State(state): State<AppState>) -> Result<Response, AppError> {
    let view = DonateView {
        title: "Support Weight Loss Watch",
        description: "Help us keep Weight Loss Watch free and ad-free by making a donation.",
    };

    state.render(View::new("donate/index", &view)?)
}

/// GET /donate/thank-you - Thank-you page PayPal redirects to.
///
/// # Query Parameters
/// All optional: `tx` (transaction ID), `amt` (amount), `st` (status), `cc` (currency)
/// and `item_name`.
///
/// # Returns
/// - `200 OK` - `donate/thank-you` view; malformed amounts show "Unknown amount"
pub async fn thank_you(
    State(state): State<AppState>,
    Query(params): Query<PaypalReturnParams>,
) -> Result<Response, AppError> {
    let receipt = build_receipt(params.into_param());
    if !receipt.amount_valid {
        tracing::warn!(raw_amount = ?receipt.raw_amount, "PayPal returned a malformed amount");
    }

    let view = ThankYouView {
        title: "Thank You for Your Donation",
        description: "Your donation helps keep Weight Loss Watch free and ad-free.",
        receipt,
    };

    state.render(View::new("donate/thank-you", &view)?)
}
