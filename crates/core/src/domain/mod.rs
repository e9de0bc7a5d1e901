pub mod configuration;
pub mod index;
pub mod screen;
