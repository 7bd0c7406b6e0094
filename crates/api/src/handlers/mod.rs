//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate input, delegate to the corresponding repository in
//! `obra_db`, and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod activity;
pub mod budget_analysis;
pub mod exchange_rate;
pub mod project;
