pub mod canvas;
pub mod config;
pub mod logging;
#[cfg(test)]
pub mod recording;
