//! Infrastructure layer (adapters/implementations).
//!
//! This module contains the IO-heavy pieces: config files and HTTP.

pub mod app_config;
pub mod http;
pub mod remote;
