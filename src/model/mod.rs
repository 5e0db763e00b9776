//! Client principals and the [`Client`] trait they share.

pub mod admin;
pub mod client;
pub mod manager;
pub mod user;

pub use admin::*;
pub use client::*;
pub use manager::*;
pub use user::*;
