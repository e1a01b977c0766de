#![doc = include_str!("../README.md")]

pub mod api;
pub mod cli;
pub mod core;
pub mod prelude;
pub mod quantity;
pub mod tables;
