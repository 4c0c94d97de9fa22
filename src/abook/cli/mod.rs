mod commands;
mod console;
mod parser;
mod render;
mod setup;

pub use commands::run;
