//! 月网格渲染
//!
//! 纯函数：同样的 (月份, 今天, 仓库内容, 周起始) 总是得到同样的 `MonthView`。

use chrono::{Datelike, Days, Local, NaiveDate, TimeZone};

use crate::error::{CalendarError, CalendarResult};
use crate::traits::AppointmentStore;
use crate::types::{ActiveMonth, DateCell, DateId, MonthView, WeekStart, CELLS_PER_VIEW};

/// 网格第一格的日期：包含本月 1 日的那一周的第一天
pub fn first_visible_date(active: ActiveMonth, week_start: WeekStart) -> CalendarResult<NaiveDate> {
    let first = active.first_day();
    let offset = week_start.offset_of(first.weekday());
    first
        .checked_sub_days(Days::new(u64::from(offset)))
        .ok_or_else(|| CalendarError::DateOutOfRange(format!("week before {first}")))
}

/// 按本地时区渲染月视图
pub fn render_month<S: AppointmentStore + ?Sized>(
    active: ActiveMonth,
    today: NaiveDate,
    store: &S,
    week_start: WeekStart,
) -> CalendarResult<MonthView> {
    render_month_in(active, today, store, week_start, &Local)
}

/// 按指定时区渲染月视图
pub fn render_month_in<S, Tz>(
    active: ActiveMonth,
    today: NaiveDate,
    store: &S,
    week_start: WeekStart,
    tz: &Tz,
) -> CalendarResult<MonthView>
where
    S: AppointmentStore + ?Sized,
    Tz: TimeZone,
{
    let start = first_visible_date(active, week_start)?;

    let mut cells = Vec::with_capacity(CELLS_PER_VIEW);
    for date in start.iter_days().take(CELLS_PER_VIEW) {
        let id = DateId::from_date_in(date, tz)?;
        cells.push(DateCell {
            id,
            date,
            day: date.day(),
            other_month: !active.contains(date),
            is_today: date == today,
            appointment: store.get(&id)?,
        });
    }

    if cells.len() != CELLS_PER_VIEW {
        return Err(CalendarError::DateOutOfRange(format!(
            "grid for {} runs past the supported date range",
            active.label()
        )));
    }

    Ok(MonthView {
        label: active.label(),
        weekdays: week_start.header_labels(),
        cells,
    })
}
