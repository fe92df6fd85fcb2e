//! zdock - a reorderable drag-and-drop icon dock for the terminal.
//!
//! Modules:
//! - core: framework-neutral input events and handling results
//! - ui: headless UI core (geometry, painting, hit-testing, pointer runtime, animation) and backends
//! - dock: the generic `Dock<T, F>` widget with its drag state machine and reorder policies
//! - app: the shell that hosts a dock of icons
//! - settings: JSON settings under the cache directory
//! - tui: crossterm event conversion and terminal lifecycle (feature `tui`)

pub mod app;
pub mod core;
pub mod dock;
pub mod settings;
#[cfg(feature = "tui")]
pub mod tui;
pub mod ui;
