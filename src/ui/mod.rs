//! UI layer (deep wrapper over `ratatui`).
//!
//! All `ratatui` types stay behind the backend adapter; the rest of the crate paints through
//! [`core::painter::Painter`] and reacts to pointer input through [`core::runtime::UiRuntime`].

pub mod core;

pub mod backend;
