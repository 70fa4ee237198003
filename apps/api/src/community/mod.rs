// Community planner: organisation-level regional workforce data, its per-region
// rollup, and the repair pass that restores count invariants in old datasets.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod repair;
pub mod summary;
