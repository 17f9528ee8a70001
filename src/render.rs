//! Plain-text rendering of the view state.
//!
//! Pure string builders so the CLI stays a thin printing shell and the output
//! is testable without a terminal. Missing optional fields render as `-`.
use crate::browser::ViewState;
use crate::model::{Invoice, Payment, Policy};

/// Render whichever view the state is in: detail when a policy is displayed,
/// otherwise the list.
pub fn render_state(state: &ViewState) -> String {
    match &state.policy {
        Some(policy) => render_detail(state, policy),
        None => render_list(state),
    }
}

fn render_list(state: &ViewState) -> String {
    let mut out = String::new();
    push_line(&mut out, &format!("Policies as of {}", state.date_cursor));
    if state.policy_list.is_empty() {
        push_line(&mut out, "  (none)");
        return out;
    }
    for policy in &state.policy_list {
        push_line(
            &mut out,
            &format!(
                "  [{}] {}  status: {}  schedule: {}",
                policy.id,
                opt_str(&policy.name),
                opt_str(&policy.status),
                opt_str(&policy.billing_schedule),
            ),
        );
    }
    out
}

fn render_detail(state: &ViewState, policy: &Policy) -> String {
    let mut out = String::new();
    push_line(
        &mut out,
        &format!(
            "Policy {} ({}) as of {}",
            policy.id,
            opt_str(&policy.name),
            state.date_cursor
        ),
    );
    push_line(
        &mut out,
        &format!("  status:          {}", opt_str(&policy.status)),
    );
    push_line(
        &mut out,
        &format!("  effective:       {}", opt_str(&policy.effective_date)),
    );
    push_line(
        &mut out,
        &format!("  schedule:        {}", opt_str(&policy.billing_schedule)),
    );
    push_line(
        &mut out,
        &format!("  annual premium:  {}", opt_amount(policy.annual_premium)),
    );
    push_line(
        &mut out,
        &format!("  named insured:   {}", opt_str(&policy.named_insured)),
    );
    push_line(
        &mut out,
        &format!("  agent:           {}", opt_str(&policy.agent)),
    );
    push_line(
        &mut out,
        &format!("  account balance: {}", opt_amount(policy.account_balance)),
    );

    push_line(&mut out, &format!("Invoices ({})", state.invoices.len()));
    for invoice in &state.invoices {
        push_line(&mut out, &render_invoice_line(invoice));
    }
    push_line(&mut out, &format!("Payments ({})", state.payments.len()));
    for payment in &state.payments {
        push_line(&mut out, &render_payment_line(payment));
    }

    if !state.error_message.is_empty() {
        push_line(&mut out, &format!("error: {}", state.error_message));
    }
    out
}

/// The error line for a detail failure, or `None` when there is nothing to
/// report.
pub fn render_error(state: &ViewState) -> Option<String> {
    if state.error_message.is_empty() {
        None
    } else {
        Some(format!("error: {}", state.error_message))
    }
}

fn render_invoice_line(invoice: &Invoice) -> String {
    format!(
        "  [{}] billed {}  due {}  cancel {}  amount {}",
        invoice.id,
        opt_str(&invoice.bill_date),
        opt_str(&invoice.due_date),
        opt_str(&invoice.cancel_date),
        opt_amount(invoice.amount_due),
    )
}

fn render_payment_line(payment: &Payment) -> String {
    format!(
        "  [{}] paid {} on {}",
        payment.id,
        opt_amount(payment.amount_paid),
        opt_str(&payment.transaction_date),
    )
}

fn opt_str(value: &Option<String>) -> &str {
    match value.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => "-",
    }
}

fn opt_amount(value: Option<f64>) -> String {
    match value {
        Some(amount) => format!("{amount:.2}"),
        None => "-".to_string(),
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}
