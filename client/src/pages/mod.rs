//! Views for the single-viewport app: one module per `View` variant.

pub mod dashboard;
pub mod loading;
pub mod login;
