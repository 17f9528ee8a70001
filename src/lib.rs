//! Client-side browser for an insurance policy accounting API.
//!
//! The crate is built around one view-model, [`browser::PolicyBrowser`]: it
//! fetches policy, invoice, and payment records through the [`api::PolicyApi`]
//! seam and notifies registered render callbacks whenever its view state
//! changes. The `polb` binary is a thin front-end that prints the rendered
//! state.
pub mod api;
pub mod browser;
pub mod cli;
pub mod model;
pub mod render;
pub mod util;
