//! 月历消息处理

use month_calendar_core::CalendarResult;

use crate::message::CalendarMessage;
use crate::model::App;
use crate::view::layout::HitTarget;

/// 处理月历消息
pub fn update(app: &mut App, msg: CalendarMessage) {
    match msg {
        CalendarMessage::PreviousMonth => {
            let result = app.calendar.go_to_previous_month();
            after_navigation(app, result);
        }
        CalendarMessage::NextMonth => {
            let result = app.calendar.go_to_next_month();
            after_navigation(app, result);
        }
        CalendarMessage::Today => {
            app.calendar.go_to_today();
            after_navigation(app, Ok(()));
        }
        CalendarMessage::MoveSelection(delta) => {
            app.move_selection(delta);
        }
        CalendarMessage::OpenEditor => open_editor(app),
        CalendarMessage::DeleteAppointment => delete_selected(app),
        CalendarMessage::Click(target) => handle_click(app, target),
    }
}

fn after_navigation(app: &mut App, result: CalendarResult<()>) {
    match result {
        Ok(()) => {
            app.refresh();
            app.select_default();
            app.clear_status();
        }
        Err(e) => app.report_error(&e),
    }
}

fn open_editor(app: &mut App) {
    let Some(date) = app.selected_date() else {
        return;
    };
    if let Err(e) = app.calendar.open_editor(date) {
        app.report_error(&e);
    }
}

fn delete_selected(app: &mut App) {
    let Some(date) = app.selected_date() else {
        return;
    };
    match app.calendar.delete_appointment(date) {
        Ok(true) => {
            app.set_status(format!("Deleted appointment for {}", date.format("%b %-d")));
            app.refresh();
        }
        Ok(false) => app.set_status("Nothing to delete"),
        Err(e) => app.report_error(&e),
    }
}

fn handle_click(app: &mut App, target: HitTarget) {
    match target {
        HitTarget::PreviousMonth => update(app, CalendarMessage::PreviousMonth),
        HitTarget::NextMonth => update(app, CalendarMessage::NextMonth),
        HitTarget::Today => update(app, CalendarMessage::Today),
        HitTarget::Cell(index) => {
            app.select(index);
            open_editor(app);
        }
        HitTarget::DeleteAppointment(index) => {
            app.select(index);
            delete_selected(app);
        }
    }
}
