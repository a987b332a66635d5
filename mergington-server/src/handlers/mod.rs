//! HTTP request handlers organized by functionality

pub mod activities;
pub mod system;
