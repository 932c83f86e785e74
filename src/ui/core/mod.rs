//! Backend-independent UI primitives: geometry, styles, paint commands, the hit-test tree and
//! the pointer runtime that turns raw mouse input into clicks on tree nodes.

pub mod geom;
pub mod id;
pub mod input;
pub mod painter;
pub mod runtime;
pub mod style;
pub mod theme;
pub mod tree;
pub mod widget;
