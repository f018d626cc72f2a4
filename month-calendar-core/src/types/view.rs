//! 月视图模型定义
//!
//! 一次渲染的完整结果：标签、表头与 42 个日期格子。

use chrono::NaiveDate;

use super::DateId;

/// 每周天数
pub const DAYS_PER_WEEK: usize = 7;

/// 每个视图显示的周数
pub const WEEKS_PER_VIEW: usize = 6;

/// 每个视图的格子总数
pub const CELLS_PER_VIEW: usize = DAYS_PER_WEEK * WEEKS_PER_VIEW;

/// 单个日期格子
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateCell {
    /// 存储键
    pub id: DateId,
    /// 对应日期
    pub date: NaiveDate,
    /// 显示的日号
    pub day: u32,
    /// 是否属于相邻月份
    pub other_month: bool,
    /// 是否是今天
    pub is_today: bool,
    /// 已保存的约会
    pub appointment: Option<String>,
}

impl DateCell {
    pub fn has_appointment(&self) -> bool {
        self.appointment.is_some()
    }
}

/// 月视图
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    /// 月份标签，如 `Oct 2026`
    pub label: String,
    /// 星期表头（按显示顺序）
    pub weekdays: [&'static str; DAYS_PER_WEEK],
    /// 42 个格子，按行优先排列
    pub cells: Vec<DateCell>,
}

impl MonthView {
    /// 按周切分
    pub fn weeks(&self) -> impl Iterator<Item = &[DateCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    /// 查找日期所在格子的下标
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        self.cells.iter().position(|cell| cell.date == date)
    }

    /// 今天所在的格子
    pub fn today_cell(&self) -> Option<&DateCell> {
        self.cells.iter().find(|cell| cell.is_today)
    }

    /// 与另一次渲染相比发生变化的格子下标
    ///
    /// 两个视图格子数不同时，多出的下标也视为变化。
    pub fn diff(&self, other: &MonthView) -> Vec<usize> {
        let len = self.cells.len().max(other.cells.len());
        (0..len)
            .filter(|&i| self.cells.get(i) != other.cells.get(i))
            .collect()
    }
}
