pub mod cli;
pub mod config;
pub mod diff;
pub mod lines;
pub mod locate;
pub mod model;
pub mod report;
pub mod signature;
pub mod util;
