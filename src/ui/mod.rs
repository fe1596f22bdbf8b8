//! UI module - reusable widgets for the conversion form

pub mod components;
