//! CLI commands for mobiplan

pub mod config;
pub mod dispatch;
pub mod modes;
pub mod nodes;
pub mod plan;
pub mod proposals;
pub mod rank;
pub mod route;
