mod component;
mod geometry;
mod timeline;

pub use component::{PillNav, PillNavItem};
