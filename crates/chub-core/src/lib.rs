pub mod config;
pub mod logging;

pub mod autocomplete;
pub mod catalog;
pub mod controller;
pub mod download;
pub mod http;
pub mod render;
pub mod settings;
pub mod view;
