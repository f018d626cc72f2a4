//! 约会编辑框组件
//!
//! 锚定在目标格子旁的单行输入框。

use ratatui::{
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::model::App;
use crate::view::layout::{editor_area, CalendarLayout};

/// 渲染编辑框（如果打开）
pub fn render(app: &App, frame: &mut Frame, layout: &CalendarLayout) {
    let Some(form) = app.calendar.editor().form() else {
        return;
    };
    let Some(index) = app.month.index_of(form.date) else {
        return;
    };
    let Some(area) = editor_area(layout, index) else {
        return;
    };

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", form.date.format("%a %b %-d, %Y")))
        .title_bottom(Line::from(" Enter save · Esc cancel ").right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (visible, cursor_x) = visible_window(form.text(), form.cursor(), inner.width);
    let input = Paragraph::new(visible).style(Style::default().fg(Color::White));
    frame.render_widget(input, inner);

    frame.set_cursor_position((inner.x + cursor_x, inner.y));
}

/// 计算可见片段，保证光标落在输入框内
///
/// 返回 (可见文本, 光标相对列)
pub fn visible_window(text: &str, cursor: usize, width: u16) -> (String, u16) {
    if width == 0 {
        return (String::new(), 0);
    }
    let width = usize::from(width);

    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());
    let char_width = |c: &char| c.width().unwrap_or(0);

    // 从光标往左收，直到光标前的内容加光标本身放得下
    let mut start = cursor;
    let mut before = 0;
    while start > 0 {
        let w = char_width(&chars[start - 1]);
        if before + w + 1 > width {
            break;
        }
        before += w;
        start -= 1;
    }

    let mut visible = String::new();
    let mut used = 0;
    for c in &chars[start..] {
        let w = char_width(c);
        if used + w > width {
            break;
        }
        visible.push(*c);
        used += w;
    }

    (visible, u16::try_from(before).unwrap_or(0))
}
