//! 可复用组件

pub mod editor;
pub mod help;
pub mod statusbar;
