//!
//! src/event/mod.rs
//! Event 层：输入处理
//!
//!     poll_event(timeout)         // 等待按键或鼠标事件，超时返回 None
//!     handle_event(event, &app)   // 把原始事件翻译成 AppMessage
//!
//! 按键的去向按优先级：帮助弹窗 → 编辑器 → 全局快捷键 → 月历。
//! 鼠标左键点击通过 view::layout::hit_test 找到目标，和绘制共用同一份布局。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
