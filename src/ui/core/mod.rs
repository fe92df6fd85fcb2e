//! Framework-neutral UI core: geometry, paint recording, hit-testing and the pointer runtime.

pub mod anim;
pub mod color;
pub mod color_support;
pub mod geom;
pub mod id;
pub mod layout;
pub mod painter;
pub mod runtime;

#[path = "interaction/input.rs"]
pub mod input;
#[path = "primitives/style.rs"]
pub mod style;
#[path = "scene/tree.rs"]
pub mod tree;
#[path = "scene/widget.rs"]
pub mod widget;
