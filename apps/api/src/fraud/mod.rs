// Fraud & integrity monitor: interview integrity events, risk counts, candidate
// lookup, and the append-only event log.

pub mod alerts;
pub mod generator;
pub mod handlers;
pub mod log;
pub mod models;
