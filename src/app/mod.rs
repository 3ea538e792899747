pub mod cli;
pub mod draw;
pub mod error;
pub mod logging;
