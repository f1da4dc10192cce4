//! Route configuration.

pub mod employee_routes;

pub use employee_routes::create_routes;
