//! 主布局渲染与几何
//!
//! 绘制与鼠标命中测试共用 [`calendar_layout`]，保证点到的就是画出来的。

use month_calendar_core::{MonthView, CELLS_PER_VIEW, DAYS_PER_WEEK, WEEKS_PER_VIEW};
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;

use super::components;
use super::pages;
use super::theme::Styles;

/// 编辑框最小宽度
const EDITOR_MIN_WIDTH: u16 = 32;
/// 编辑框高度（含边框）
const EDITOR_HEIGHT: u16 = 3;

pub const PREVIOUS_LABEL: &str = " ◀ Prev ";
pub const TODAY_LABEL: &str = " Today ";
pub const NEXT_LABEL: &str = " Next ▶ ";

/// 鼠标点中的目标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    PreviousMonth,
    NextMonth,
    Today,
    /// 日期格子
    Cell(usize),
    /// 格子右上角的 ✕
    DeleteAppointment(usize),
}

/// 一帧的全部区域
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarLayout {
    pub title: Rect,
    pub previous: Rect,
    pub label: Rect,
    pub today: Rect,
    pub next: Rect,
    /// 星期表头，每列一个
    pub weekdays: Vec<Rect>,
    /// 整个网格区域
    pub grid: Rect,
    /// 42 个格子，按行优先
    pub cells: Vec<Rect>,
    pub status: Rect,
}

fn label_width(label: &str) -> u16 {
    u16::try_from(unicode_width::UnicodeWidthStr::width(label)).unwrap_or(u16::MAX)
}

/// 计算布局：标题栏 + 控制栏 + 星期表头 + 6×7 网格 + 状态栏
pub fn calendar_layout(area: Rect) -> CalendarLayout {
    let rows = Layout::vertical([
        Constraint::Length(1), // 标题栏
        Constraint::Length(1), // 月份与翻页控制
        Constraint::Length(1), // 星期表头
        Constraint::Min(0),    // 网格
        Constraint::Length(1), // 状态栏
    ])
    .split(area);

    let controls = Layout::horizontal([
        Constraint::Length(label_width(PREVIOUS_LABEL)),
        Constraint::Min(0),
        Constraint::Length(label_width(TODAY_LABEL)),
        Constraint::Length(label_width(NEXT_LABEL)),
    ])
    .split(rows[1]);

    let columns = [Constraint::Ratio(1, 7); DAYS_PER_WEEK];
    let weekdays = Layout::horizontal(columns).split(rows[2]).to_vec();

    let weeks = Layout::vertical([Constraint::Ratio(1, 6); WEEKS_PER_VIEW]).split(rows[3]);
    let mut cells = Vec::with_capacity(CELLS_PER_VIEW);
    for week in weeks.iter() {
        cells.extend(Layout::horizontal(columns).split(*week).iter().copied());
    }

    CalendarLayout {
        title: rows[0],
        previous: controls[0],
        label: controls[1],
        today: controls[2],
        next: controls[3],
        weekdays,
        grid: rows[3],
        cells,
        status: rows[4],
    }
}

/// ✕ 所在的列（右边框内侧）
pub fn delete_column(cell: Rect) -> u16 {
    cell.x + cell.width.saturating_sub(2)
}

/// 编辑框区域：优先放在格子下方，放不下时放在上方
pub fn editor_area(layout: &CalendarLayout, index: usize) -> Option<Rect> {
    let cell = *layout.cells.get(index)?;
    let bounds = layout.grid;

    let width = cell.width.max(EDITOR_MIN_WIDTH).min(bounds.width);
    let height = EDITOR_HEIGHT.min(bounds.height);
    let x = cell.x.min(bounds.right().saturating_sub(width)).max(bounds.x);
    let y = if cell.bottom() + height <= bounds.bottom() {
        cell.bottom()
    } else {
        cell.y.saturating_sub(height).max(bounds.y)
    };

    Some(Rect::new(x, y, width, height))
}

/// 鼠标命中测试
pub fn hit_test(layout: &CalendarLayout, month: &MonthView, column: u16, row: u16) -> Option<HitTarget> {
    let pos = Position::new(column, row);

    if layout.previous.contains(pos) {
        return Some(HitTarget::PreviousMonth);
    }
    if layout.next.contains(pos) {
        return Some(HitTarget::NextMonth);
    }
    if layout.today.contains(pos) {
        return Some(HitTarget::Today);
    }

    let index = layout.cells.iter().position(|cell| cell.contains(pos))?;
    let cell = layout.cells[index];
    let has_appointment = month.cells.get(index).is_some_and(|c| c.has_appointment());

    if has_appointment && row == cell.y && column == delete_column(cell) {
        Some(HitTarget::DeleteAppointment(index))
    } else {
        Some(HitTarget::Cell(index))
    }
}

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let layout = calendar_layout(frame.area());

    render_title_bar(frame, layout.title);
    pages::month::render(app, frame, &layout);
    components::statusbar::render(app, frame, layout.status);

    // 编辑框与弹窗在最上层
    components::editor::render(app, frame, &layout);
    components::help::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(concat!(" Month Calendar v", env!("CARGO_PKG_VERSION")))
        .style(Styles::title_bar());
    frame.render_widget(title, area);
}
