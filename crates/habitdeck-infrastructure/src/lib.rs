// Infrastructure layer - device and platform collaborators
// JSON blob persistence, in-process event bus, local notifications, logging

pub mod config;
pub mod events;
pub mod logging;
pub mod notification;
pub mod persistence;
