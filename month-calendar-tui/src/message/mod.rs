//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁。
//! 把形形色色的按键与鼠标事件翻译成 Update 能够看懂的 Messages。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息 AppMessage
//!         mod calendar;       // 月历子消息：翻月、选中格子、打开编辑器、删除
//!         mod editor;         // 编辑器子消息：输入、光标、提交、取消
//!
//!
//!     在 src/event/handler.rs 中：
//!         pub fn handle_event(event: Event, app: &App) -> AppMessage {
//!             ...
//!             KeyCode::Char('n') => AppMessage::Calendar(CalendarMessage::NextMonth),
//!             ...
//!             _ => AppMessage::Noop
//!         }
//!
//! 最后，Event 将消息传入 Update 层进行处理。
//!     —— 去往 src/update/mod.rs 吧
//!

mod app;
mod calendar;
mod editor;

pub use app::AppMessage;
pub use calendar::CalendarMessage;
pub use editor::EditorMessage;
