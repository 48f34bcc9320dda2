//! Proposal rendering: turns a submitted site evaluation into a PDF
//! document, plus the currency and filename formatting it needs.

pub mod format;
pub mod renderer;

pub use format::{format_currency, proposal_filename};
pub use renderer::render_pdf;
