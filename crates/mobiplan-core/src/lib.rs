//! Mobiplan Core Library
//!
//! Shortest-path routing over a static city graph and heuristic ranking of
//! transport modes for the resulting distance.

pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod modes;
pub mod planner;
pub mod records;
