//! HTTP handlers

pub mod health;
pub mod auth;
pub mod predict;
pub mod bulk;
pub mod history;
