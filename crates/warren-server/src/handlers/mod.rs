//! HTTP route handlers — thin translations between wire shapes and
//! the service/repository layers.

pub mod auth;
pub mod features;
pub mod health;
pub mod tenants;
pub mod users;
