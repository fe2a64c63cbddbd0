//! Royal Biryani Co. storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing it to be tested and reused.
//!
//! # Architecture
//!
//! - Axum web framework with HTMX for interactivity
//! - Askama templates for server-side rendering
//! - Static, hard-coded menu catalog
//! - tower-sessions (in-memory) as the per-shopper snapshot store for the
//!   cart, checkout draft, and location preference
//! - Nominatim reverse geocoding for the location widget

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
