//! Circular dial widgets for GTK4: an animated progress ring and a
//! draggable value dial, packaged as relm4 components drawing with cairo.

pub mod anim;
pub mod config;
pub mod events;
pub mod geometry;
pub mod gui;
pub mod sys;
pub mod validate;

mod macros;
