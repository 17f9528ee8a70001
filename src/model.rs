//! Wire records for the policy accounting API.
//!
//! These types mirror the server's JSON shapes verbatim: no validation, no
//! derived fields. Anything the server omits decodes to `None` so a partial
//! record still displays.
use serde::Deserialize;

/// One payment against a policy.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: i64,
    #[serde(default)]
    pub amount_paid: Option<f64>,
    #[serde(default)]
    pub transaction_date: Option<String>,
}

/// One invoice issued for a policy billing period.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: i64,
    #[serde(default)]
    pub bill_date: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub cancel_date: Option<String>,
    #[serde(default)]
    pub amount_due: Option<f64>,
}

/// One insurance policy snapshot as of a queried date.
///
/// The list endpoint serializes `accountBalance` as null; the detail endpoint
/// computes it, so the field is optional on both paths.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub effective_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub status_change_description: Option<String>,
    #[serde(default)]
    pub status_change_date: Option<String>,
    #[serde(default)]
    pub billing_schedule: Option<String>,
    #[serde(default)]
    pub annual_premium: Option<f64>,
    #[serde(default)]
    pub named_insured: Option<String>,
    #[serde(default)]
    pub agent: Option<String>,
    #[serde(default)]
    pub account_balance: Option<f64>,
}
