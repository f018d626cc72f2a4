//! 月份与周起始类型定义

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};

/// 一周从哪天开始
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// 对应的 chrono 星期
    #[must_use]
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }

    /// `weekday` 距离一周第一天的天数（0..7）
    #[must_use]
    pub fn offset_of(self, weekday: Weekday) -> u32 {
        match self {
            WeekStart::Sunday => weekday.num_days_from_sunday(),
            WeekStart::Monday => weekday.num_days_from_monday(),
        }
    }

    /// 表头的星期缩写，按显示顺序排列
    #[must_use]
    pub fn header_labels(self) -> [&'static str; 7] {
        const SUNDAY_FIRST: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
        let mut labels = SUNDAY_FIRST;
        if self == WeekStart::Monday {
            labels.rotate_left(1);
        }
        labels
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekStart::Sunday => f.write_str("sunday"),
            WeekStart::Monday => f.write_str("monday"),
        }
    }
}

impl FromStr for WeekStart {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sunday" | "sun" => Ok(WeekStart::Sunday),
            "monday" | "mon" => Ok(WeekStart::Monday),
            other => Err(CalendarError::Config(format!("unknown week start: {other}"))),
        }
    }
}

/// 当前显示的月份（总是该月 1 日）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActiveMonth {
    first: NaiveDate,
}

impl ActiveMonth {
    /// 从年月创建
    pub fn new(year: i32, month: u32) -> CalendarResult<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
            .ok_or_else(|| CalendarError::DateOutOfRange(format!("{year}-{month:02}")))
    }

    /// 包含指定日期的月份
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    /// 该月 1 日
    #[must_use]
    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// 日期是否落在本月
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.first.year() && date.month() == self.first.month()
    }

    /// 上一个月（跨年时回到上一年 12 月）
    pub fn previous(&self) -> CalendarResult<Self> {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| Self { first })
            .ok_or_else(|| CalendarError::DateOutOfRange(format!("before {}", self.first)))
    }

    /// 下一个月（跨年时进入下一年 1 月）
    pub fn next(&self) -> CalendarResult<Self> {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Self { first })
            .ok_or_else(|| CalendarError::DateOutOfRange(format!("after {}", self.first)))
    }

    /// 月份标签，如 `Oct 2026`
    #[must_use]
    pub fn label(&self) -> String {
        self.first.format("%b %Y").to_string()
    }
}

impl fmt::Display for ActiveMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
