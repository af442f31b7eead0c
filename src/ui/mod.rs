//! UI module - reusable widgets shared across pages

pub mod components;
