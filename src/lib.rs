pub mod clean;
pub mod config;
pub mod emit;
pub mod extract;
pub mod model;
pub mod pipeline;
pub mod workbook;
