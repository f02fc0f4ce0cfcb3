//! HTTP request handlers.

pub(crate) mod menu;
