// AI insight generator: pre-generated bilingual insight pool plus live
// cross-domain figures rendered into English and Arabic dashboard lines.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod narrative;
