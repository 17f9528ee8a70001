//! Client-side view-model for browsing policies.
//!
//! `PolicyBrowser` holds the whole view state and mutates it through three
//! operations: show the policy list, show one policy's detail, or click a
//! policy (which is just id-then-detail). Registered render callbacks are
//! invoked exactly once after each operation, success or failure, so a
//! front-end can redraw from the state alone.
//!
//! Fetches are synchronous blocking calls on the caller's thread, so at most
//! one request is ever outstanding and responses cannot arrive out of order.
use crate::api::PolicyApi;
use crate::model::{Invoice, Payment, Policy};
use crate::util::today_date_cursor;

/// The fixed user-facing message for any detail fetch failure. Bad id, bad
/// date, and server faults are deliberately indistinguishable.
pub const DETAIL_ERROR_MESSAGE: &str = "Invalid Policy ID or date";

/// Everything a render callback needs to draw the current view.
///
/// Two implicit modes: LIST (`policy` is `None`, `policy_list` populated) and
/// DETAIL (`policy` set alongside `invoices`/`payments`). Entering list view
/// resets `policy`; entering detail view leaves `policy_list` as-is.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    /// All policies, in server-returned order.
    pub policy_list: Vec<Policy>,
    /// The currently displayed policy, or `None` in list view.
    pub policy: Option<Policy>,
    /// Invoices for the displayed policy, in server-returned order.
    pub invoices: Vec<Invoice>,
    /// Payments for the displayed policy, in server-returned order.
    pub payments: Vec<Payment>,
    /// Target id for the next detail fetch; empty when cleared.
    pub policy_id: String,
    /// As-of date for detail queries, `{year}-{month}-{day}` without padding.
    pub date_cursor: String,
    /// Empty, or exactly [`DETAIL_ERROR_MESSAGE`].
    pub error_message: String,
}

type RenderCallback = Box<dyn FnMut(&ViewState)>;

/// State container over a [`PolicyApi`], notifying render callbacks on change.
pub struct PolicyBrowser {
    api: Box<dyn PolicyApi>,
    state: ViewState,
    callbacks: Vec<RenderCallback>,
}

impl PolicyBrowser {
    /// Build a browser and immediately enter list view with a fresh fetch.
    pub fn new(api: Box<dyn PolicyApi>) -> Self {
        let mut browser = Self {
            api,
            state: ViewState::default(),
            callbacks: Vec::new(),
        };
        browser.show_policy_list();
        browser
    }

    /// Current view state, for front-ends that render on demand.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Register a render callback invoked after every operation.
    pub fn subscribe(&mut self, callback: impl FnMut(&ViewState) + 'static) {
        self.callbacks.push(Box::new(callback));
    }

    /// Switch to list view and refresh the policy collection.
    ///
    /// Clears the target id and error message and resets the date cursor to
    /// today before fetching. A failed fetch keeps the prior list (and any
    /// displayed detail) and surfaces nothing to the user beyond a log line.
    pub fn show_policy_list(&mut self) {
        self.state.policy_id.clear();
        self.state.error_message.clear();
        self.state.date_cursor = today_date_cursor();

        match self.api.fetch_policy_list() {
            Ok(policies) => {
                self.state.policy = None;
                self.state.policy_list = policies;
            }
            Err(err) => {
                tracing::warn!(error = %err, "policy list fetch failed");
            }
        }
        self.notify();
    }

    /// Fetch and display the detail view for the current `policy_id`.
    ///
    /// On success the displayed policy, invoices, and payments are replaced
    /// wholesale. On failure the error message is set and the previously
    /// displayed data survives untouched; `policy_id` stays set.
    pub fn show_policy_detail(&mut self) {
        self.state.error_message.clear();

        match self
            .api
            .fetch_policy_detail(&self.state.policy_id, &self.state.date_cursor)
        {
            Ok(detail) => {
                self.state.policy = Some(detail.policy);
                self.state.invoices = detail.invoices;
                self.state.payments = detail.payments;
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    policy_id = %self.state.policy_id,
                    "policy detail fetch failed"
                );
                self.state.error_message = DETAIL_ERROR_MESSAGE.to_string();
            }
        }
        self.notify();
    }

    /// Select a policy from the list: set its id, then fetch its detail.
    pub fn click_policy(&mut self, policy: &Policy) {
        self.state.policy_id = policy.id.to_string();
        self.show_policy_detail();
    }

    /// Override the as-of date for subsequent detail fetches.
    pub fn set_date_cursor(&mut self, date_cursor: impl Into<String>) {
        self.state.date_cursor = date_cursor.into();
    }

    /// Set the target id for subsequent detail fetches.
    pub fn set_policy_id(&mut self, policy_id: impl Into<String>) {
        self.state.policy_id = policy_id.into();
    }

    fn notify(&mut self) {
        let state = &self.state;
        for callback in &mut self.callbacks {
            callback(state);
        }
    }
}
