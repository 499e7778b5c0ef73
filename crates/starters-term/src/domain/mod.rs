//! Core domain logic for the picker.
//!
//! Data models and services that drive the list, independent of how the
//! terminal renders it.

pub mod models;
pub mod services;
