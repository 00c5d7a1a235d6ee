//! Networking for the browser build.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` implements the session crate's `Transport` over `gloo-net`;
//! all request shaping and response decoding stays in `session`.

pub mod transport;
