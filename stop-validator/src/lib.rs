//! Bus stop batch validator.
//!
//! Validates a batch of bus stop records against a field schema, then
//! checks each line's start/finish setup, arrival time ordering, and
//! whether any on-demand stop sits at a key station.

pub mod domain;
pub mod input;
pub mod network;
pub mod pipeline;
pub mod report;
pub mod schema;
