pub mod handlers;
pub mod responses;
pub mod services;
