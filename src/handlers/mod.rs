//! HTTP handlers, one per route.

pub mod baked_good;
pub mod bakery;
pub mod home;
