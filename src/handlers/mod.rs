//! API handlers for the Mingle backend

pub mod auth;
pub mod social;
