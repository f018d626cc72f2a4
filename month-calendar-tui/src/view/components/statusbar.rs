//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前状态生成快捷键提示
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
pub fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.modal.is_open() {
        return vec![("Esc", "Close")];
    }

    if app.calendar.editor().is_open() {
        return vec![("Enter", "Save"), ("Esc", "Cancel"), ("←→", "Move Cursor")];
    }

    let mut hints = vec![
        ("←↑↓→", "Select"),
        ("Enter", "Edit"),
        ("p/n", "Month"),
        ("t", "Today"),
    ];

    let has_appointment = app
        .month
        .cells
        .get(app.selected)
        .is_some_and(|cell| cell.has_appointment());
    if has_appointment {
        hints.push(("d", "Delete"));
    }

    hints.push(("?", "Help"));
    hints.push(("q", "Quit"));

    hints
}
