//! 月历页面视图

use month_calendar_core::DateCell;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::model::App;
use crate::view::layout::{CalendarLayout, NEXT_LABEL, PREVIOUS_LABEL, TODAY_LABEL};
use crate::view::theme::{colors, Styles};

/// 渲染月历页面
pub fn render(app: &App, frame: &mut Frame, layout: &CalendarLayout) {
    render_controls(app, frame, layout);
    render_weekdays(app, frame, layout);

    for (index, (cell, area)) in app.month.cells.iter().zip(&layout.cells).enumerate() {
        render_cell(frame, *area, cell, index == app.selected);
    }
}

/// 渲染月份标签与翻页控制
fn render_controls(app: &App, frame: &mut Frame, layout: &CalendarLayout) {
    let c = colors();

    frame.render_widget(Paragraph::new(PREVIOUS_LABEL).style(Styles::control()), layout.previous);
    frame.render_widget(Paragraph::new(TODAY_LABEL).style(Styles::control()), layout.today);
    frame.render_widget(Paragraph::new(NEXT_LABEL).style(Styles::control()), layout.next);

    let label = Paragraph::new(app.month.label.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD));
    frame.render_widget(label, layout.label);
}

/// 渲染星期表头
fn render_weekdays(app: &App, frame: &mut Frame, layout: &CalendarLayout) {
    let c = colors();
    for (name, area) in app.month.weekdays.iter().zip(&layout.weekdays) {
        let header = Paragraph::new(*name)
            .alignment(Alignment::Center)
            .style(Style::default().fg(c.muted).add_modifier(Modifier::BOLD));
        frame.render_widget(header, *area);
    }
}

/// 渲染单个日期格子
fn render_cell(frame: &mut Frame, area: Rect, cell: &DateCell, selected: bool) {
    let c = colors();

    let mut day_style = Style::default().fg(if cell.other_month { c.muted } else { c.fg });
    if cell.is_today {
        day_style = day_style.fg(c.today).add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }

    let border_style = if selected {
        Style::default().fg(c.border_focused).add_modifier(Modifier::BOLD)
    } else if cell.is_today {
        Style::default().fg(c.today)
    } else {
        Style::default().fg(c.border)
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Line::styled(format!(" {} ", cell.day), day_style));

    if cell.has_appointment() {
        block = block.title(Line::styled("✕", Style::default().fg(c.error)).right_aligned());
    }
    if selected {
        block = block.style(Style::default().bg(c.selected_bg));
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(ref text) = cell.appointment else {
        return;
    };

    let style = Style::default().fg(c.appointment);
    let paragraph = if inner.height <= 1 {
        Paragraph::new(truncate_to_width(text, usize::from(inner.width)))
    } else {
        Paragraph::new(text.as_str()).wrap(Wrap { trim: true })
    };
    frame.render_widget(paragraph.style(style), inner);
}

/// 按显示宽度截断，超出时以 `…` 结尾
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_to_width("gym", 10), "gym");
    }

    #[test]
    fn long_text_gets_ellipsis() {
        assert_eq!(truncate_to_width("dentist appointment", 8), "dentist…");
    }

    #[test]
    fn wide_chars_count_double() {
        // each CJK char is two columns wide
        assert_eq!(truncate_to_width("牙医预约", 5), "牙医…");
    }

    #[test]
    fn zero_width_yields_empty() {
        assert_eq!(truncate_to_width("gym", 0), "");
    }
}
