//! 编辑器消息处理

use month_calendar_core::SubmitOutcome;

use crate::message::EditorMessage;
use crate::model::App;

/// 处理编辑器消息
pub fn update(app: &mut App, msg: EditorMessage) {
    match msg {
        EditorMessage::Submit => submit(app),
        EditorMessage::Cancel => {
            app.calendar.cancel_editor();
            app.clear_status();
        }
        edit => {
            let Some(form) = app.calendar.editor_form_mut() else {
                return;
            };
            match edit {
                EditorMessage::Input(c) => form.insert(c),
                EditorMessage::Backspace => form.backspace(),
                EditorMessage::Delete => form.delete(),
                EditorMessage::CursorLeft => form.move_left(),
                EditorMessage::CursorRight => form.move_right(),
                EditorMessage::CursorHome => form.move_home(),
                EditorMessage::CursorEnd => form.move_end(),
                EditorMessage::Submit | EditorMessage::Cancel => {}
            }
        }
    }
}

fn submit(app: &mut App) {
    let date = app.calendar.editor().form().map(|form| form.date);

    match app.calendar.submit_editor() {
        Ok(SubmitOutcome::Saved { .. }) => {
            if let Some(date) = date {
                app.set_status(format!("Saved appointment for {}", date.format("%b %-d")));
            }
            app.refresh();
        }
        Ok(SubmitOutcome::IgnoredEmpty { closed: false }) => {
            app.set_status("Appointment is empty");
        }
        Ok(SubmitOutcome::IgnoredEmpty { closed: true }) => {
            app.set_status("Empty appointment discarded");
        }
        Ok(SubmitOutcome::NotEditing) => {}
        Err(e) => app.report_error(&e),
    }
}
