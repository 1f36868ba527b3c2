//! Paw-Mate application: outbound API clients, configuration, and the storefront session.

pub mod api;
pub mod config;
pub mod context;
pub mod flows;
pub mod observability;
pub mod session;

#[cfg(test)]
mod test;
