pub mod components;
pub mod config;
pub mod icons;
pub mod injected;
pub mod number_format;
