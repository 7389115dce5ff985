#[macro_use]
extern crate log;

pub mod api;
pub mod error;
pub mod import_data;
pub mod logs;
pub mod segment_selector;
pub mod speed;
pub mod track;
pub mod utils;
