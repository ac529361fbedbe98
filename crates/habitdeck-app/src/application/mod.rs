pub mod achievement_catalog;
pub mod dtos;
pub mod queries;
pub mod services;
pub mod state;
pub mod template_library;
