//! 应用主消息枚举

use super::{CalendarMessage, EditorMessage};

/// 应用主消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 月历相关消息
    Calendar(CalendarMessage),

    /// 编辑器相关消息
    Editor(EditorMessage),

    /// 显示帮助
    ShowHelp,

    /// 关闭弹窗
    CloseModal,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
