pub mod config;
pub mod consts;
pub mod controller;
pub mod errors;
pub mod models;
pub mod providers;
