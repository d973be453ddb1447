//! File formats the CLI speaks: payments and outcomes as CSV, invoices as JSON.

pub mod csv;
pub mod json;
