//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read session state from Leptos context providers; pages
//! compose them per route.

pub mod protected;
pub mod sign_in_form;
