//! Headless customer intake form: field tree, validation rules, value-change
//! reactions and the submission helpers. The browser component in the
//! `frontend` crate renders a [`screen::CustomerScreen`] and forwards DOM
//! events to it.

pub mod config;
pub mod debounce;
pub mod error;
pub mod form;
pub mod model;
pub mod reactions;
pub mod screen;
pub mod validation;
