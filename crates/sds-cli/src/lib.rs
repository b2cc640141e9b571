pub mod input;
pub mod logging;
pub mod output;
