//! Power plant catalog with plant and grid utilization reports.

pub mod cli;
pub mod config;
pub mod grid;
pub mod io;
pub mod logging;
pub mod menu;
pub mod plant;
pub mod report;
