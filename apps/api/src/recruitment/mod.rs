// Recruitment copilot: candidate dataset, hiring-funnel summary, mock resume screening.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod resume;
pub mod summary;
