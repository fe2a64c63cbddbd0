//! External service clients.

pub mod geocode;
