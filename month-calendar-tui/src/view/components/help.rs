//! 帮助弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::{App, Modal};

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn shortcut(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<10}"), Style::default().fg(Color::Yellow)),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}

/// 渲染帮助弹窗（如果打开）
pub fn render(app: &App, frame: &mut Frame) {
    if app.modal.active != Some(Modal::Help) {
        return;
    }

    let area = centered_rect(50, 22, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let section = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::styled("Calendar", section),
        Line::from(""),
        shortcut("←↑↓→/hjkl", "Select day"),
        shortcut("p/PgUp", "Previous month"),
        shortcut("n/PgDn", "Next month"),
        shortcut("t", "Today"),
        shortcut("Enter", "Add / edit appointment"),
        shortcut("d/Del", "Delete appointment"),
        shortcut("q", "Quit"),
        Line::from(""),
        Line::styled("Editor", section),
        Line::from(""),
        shortcut("Enter", "Save"),
        shortcut("Esc", "Cancel"),
        shortcut("Home/End", "Jump to start / end"),
        Line::from(""),
        Line::styled("Mouse: click a day to edit, ✕ to delete", Style::default().fg(Color::Gray)),
        Line::styled("Press Esc to close the help", Style::default().fg(Color::DarkGray)),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
