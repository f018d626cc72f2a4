//! 月历消息

use crate::view::layout::HitTarget;

/// 月历消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarMessage {
    // ========== 翻月 ==========
    /// 上一个月
    PreviousMonth,
    /// 下一个月
    NextMonth,
    /// 回到今天
    Today,

    // ========== 选中 ==========
    /// 按偏移移动选中格子（±1 天，±7 一周）
    MoveSelection(isize),

    // ========== 约会 ==========
    /// 在选中格子上打开编辑器
    OpenEditor,
    /// 删除选中格子的约会
    DeleteAppointment,

    /// 鼠标点击
    Click(HitTarget),
}
