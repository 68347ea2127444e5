//! HTTP client for the storefront REST backend

mod client;

pub use client::ApiClient;
