//! Domain layer: invoices, payments and the ports the application layer
//! depends on. Nothing in here performs I/O.

pub mod invoice;
pub mod outcome;
pub mod payment;
pub mod ports;
