//! Core types shared by every layer: input events and input handling results.

pub mod event;

pub use event::{
    EventResult, InputEvent, Key, KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
