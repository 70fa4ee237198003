// Workforce optimizer: company-level saudization dataset and its aggregate view.
// The generator here also owns the company list consumed by the performance generator.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod summary;
