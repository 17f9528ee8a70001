//! HTTP client for the policy accounting service.
//!
//! The view-model talks to the server through the `PolicyApi` trait so tests
//! can script responses without a network. `HttpPolicyApi` is the real
//! implementation over ureq.
//!
//! Endpoint contract (server is an external collaborator):
//! - `GET {base}/policies` returns `{"policies": [...]}`
//! - `POST {base}/policies/{id}` with body `{"dateCursor": "Y-M-D"}` returns
//!   `{"policy": {...}, "invoices": [...], "payments": [...]}`
//!
//! Any transport failure or non-2xx status surfaces as a single uniform
//! error; the caller cannot distinguish a bad id from a bad date from a
//! server fault, and does not try to.
use crate::model::{Invoice, Payment, Policy};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Everything the detail endpoint returns for one policy.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PolicyDetail {
    pub policy: Policy,
    pub invoices: Vec<Invoice>,
    pub payments: Vec<Payment>,
}

/// Read access to the policy collection.
pub trait PolicyApi {
    /// Fetch the full policy collection in server order.
    fn fetch_policy_list(&self) -> Result<Vec<Policy>>;

    /// Fetch one policy with its invoices and payments as of `date_cursor`.
    fn fetch_policy_detail(&self, policy_id: &str, date_cursor: &str) -> Result<PolicyDetail>;
}

#[derive(Debug, Deserialize)]
struct PolicyListEnvelope {
    policies: Vec<Policy>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DetailRequest<'a> {
    date_cursor: &'a str,
}

/// ureq-backed client bound to one server base URL.
pub struct HttpPolicyApi {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpPolicyApi {
    /// Build a client for `base_url` (no trailing slash required).
    pub fn new(base_url: &str) -> Self {
        Self {
            agent: ureq::Agent::new_with_defaults(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn list_url(&self) -> String {
        format!("{}/policies", self.base_url)
    }

    fn detail_url(&self, policy_id: &str) -> String {
        format!("{}/policies/{}", self.base_url, policy_id)
    }
}

impl PolicyApi for HttpPolicyApi {
    fn fetch_policy_list(&self) -> Result<Vec<Policy>> {
        let url = self.list_url();
        let start = Instant::now();
        let mut response = self
            .agent
            .get(url.as_str())
            .call()
            .with_context(|| format!("fetch policy list from {url}"))?;
        let envelope: PolicyListEnvelope = response
            .body_mut()
            .read_json()
            .context("parse policy list JSON")?;

        tracing::info!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            policy_count = envelope.policies.len(),
            "policy list fetched"
        );
        Ok(envelope.policies)
    }

    fn fetch_policy_detail(&self, policy_id: &str, date_cursor: &str) -> Result<PolicyDetail> {
        let url = self.detail_url(policy_id);
        let start = Instant::now();
        // ureq's `send_json` pretty-prints; the wire contract is the compact
        // serde_json form, so serialize the body explicitly.
        let body = serde_json::to_string(&DetailRequest { date_cursor })
            .context("serialize detail request")?;
        let mut response = self
            .agent
            .post(url.as_str())
            .header("content-type", "application/json; charset=utf-8")
            .send(body)
            .with_context(|| format!("fetch policy detail from {url}"))?;
        let detail: PolicyDetail = response
            .body_mut()
            .read_json()
            .context("parse policy detail JSON")?;

        tracing::info!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            policy_id,
            date_cursor,
            invoice_count = detail.invoices.len(),
            payment_count = detail.payments.len(),
            "policy detail fetched"
        );
        Ok(detail)
    }
}
