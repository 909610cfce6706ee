pub mod catalog;
pub mod cli;
pub mod color;
pub mod driver;
pub mod error;
pub mod pipeline;
pub mod preview;
