//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Position;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, CalendarMessage, EditorMessage};
use crate::model::App;
use crate::view::layout::{calendar_layout, editor_area, hit_test};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Mouse(mouse_event) => handle_mouse_event(mouse_event, app),
        // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    if app.calendar.editor().is_open() {
        return handle_editor_keys(key);
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key) || key.code == KeyCode::Char('?') {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::ClearStatus;
    }

    handle_calendar_keys(key)
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q' | '?') => AppMessage::CloseModal,
        _ => AppMessage::Noop,
    }
}

/// 处理编辑器中的按键
fn handle_editor_keys(key: KeyEvent) -> AppMessage {
    let msg = match key.code {
        KeyCode::Enter => EditorMessage::Submit,
        KeyCode::Esc => EditorMessage::Cancel,
        KeyCode::Backspace => EditorMessage::Backspace,
        KeyCode::Delete => EditorMessage::Delete,
        KeyCode::Left => EditorMessage::CursorLeft,
        KeyCode::Right => EditorMessage::CursorRight,
        KeyCode::Home => EditorMessage::CursorHome,
        KeyCode::End => EditorMessage::CursorEnd,
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            EditorMessage::Input(c)
        }
        _ => return AppMessage::Noop,
    };
    AppMessage::Editor(msg)
}

/// 处理月历的按键
fn handle_calendar_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::PREVIOUS_MONTH.matches(&key) || DefaultKeymap::PREVIOUS_PAGE.matches(&key) {
        return AppMessage::Calendar(CalendarMessage::PreviousMonth);
    }
    if DefaultKeymap::NEXT_MONTH.matches(&key) || DefaultKeymap::NEXT_PAGE.matches(&key) {
        return AppMessage::Calendar(CalendarMessage::NextMonth);
    }
    if DefaultKeymap::TODAY.matches(&key) {
        return AppMessage::Calendar(CalendarMessage::Today);
    }
    if DefaultKeymap::EDIT.matches(&key) {
        return AppMessage::Calendar(CalendarMessage::OpenEditor);
    }
    if DefaultKeymap::DELETE.matches(&key) || DefaultKeymap::DELETE_KEY.matches(&key) {
        return AppMessage::Calendar(CalendarMessage::DeleteAppointment);
    }

    let delta = match key.code {
        KeyCode::Left | KeyCode::Char('h') => -1,
        KeyCode::Right | KeyCode::Char('l') => 1,
        KeyCode::Up | KeyCode::Char('k') => -7,
        KeyCode::Down | KeyCode::Char('j') => 7,
        _ => return AppMessage::Noop,
    };
    AppMessage::Calendar(CalendarMessage::MoveSelection(delta))
}

/// 处理鼠标事件（仅左键按下）
fn handle_mouse_event(mouse: MouseEvent, app: &App) -> AppMessage {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) || app.modal.is_open() {
        return AppMessage::Noop;
    }

    let layout = calendar_layout(app.viewport);

    // 点在编辑框内部不做处理
    let inside_editor = app
        .calendar
        .editor()
        .form()
        .and_then(|form| app.month.index_of(form.date))
        .and_then(|index| editor_area(&layout, index))
        .is_some_and(|area| area.contains(Position::new(mouse.column, mouse.row)));
    if inside_editor {
        return AppMessage::Noop;
    }

    match hit_test(&layout, &app.month, mouse.column, mouse.row) {
        Some(target) => AppMessage::Calendar(CalendarMessage::Click(target)),
        None => AppMessage::Noop,
    }
}
