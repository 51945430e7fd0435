//! API route handlers

pub mod charts;
pub mod datasets;
pub mod health;
pub mod overview;
pub mod selection;
