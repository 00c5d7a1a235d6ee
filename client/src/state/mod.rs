//! Reactive application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` bridges the platform-neutral session store into Leptos context
//! so guards and screens react to every published snapshot.

pub mod session;
