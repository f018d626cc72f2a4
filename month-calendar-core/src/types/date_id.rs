//! 日期标识类型定义
//!
//! 存储键格式为 `date-<当地零点的 epoch 毫秒>`，同一天在同一时区下永远得到同一个键。

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, TimeZone};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CalendarError, CalendarResult};

/// 存储键前缀
const KEY_PREFIX: &str = "date-";

/// 日期标识（按日粒度）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateId {
    millis: i64,
}

impl DateId {
    /// 按本地时区生成日期标识
    pub fn from_date(date: NaiveDate) -> CalendarResult<Self> {
        Self::from_date_in(date, &Local)
    }

    /// 按指定时区生成日期标识
    ///
    /// 零点不存在（夏令时跳变）时取跳变后的第一个有效时刻；
    /// 零点出现两次时取较早的一次。
    pub fn from_date_in<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> CalendarResult<Self> {
        let midnight = date.and_time(NaiveTime::MIN);

        // 夏令时跳变最长不超过两小时，按半小时步进探测
        for step in 0..=4 {
            let candidate = midnight + Duration::minutes(30 * step);
            if let Some(instant) = tz.from_local_datetime(&candidate).earliest() {
                return Ok(Self {
                    millis: instant.timestamp_millis(),
                });
            }
        }

        Err(CalendarError::DateOutOfRange(format!(
            "no valid local midnight for {date}"
        )))
    }

    /// 直接从毫秒数构造
    #[must_use]
    pub fn from_millis(millis: i64) -> Self {
        Self { millis }
    }

    /// 当地零点的 epoch 毫秒
    #[must_use]
    pub fn millis(&self) -> i64 {
        self.millis
    }

    /// 还原为指定时区下的日期
    pub fn to_date_in<Tz: TimeZone>(&self, tz: &Tz) -> CalendarResult<NaiveDate> {
        DateTime::from_timestamp_millis(self.millis)
            .map(|utc| utc.with_timezone(tz).date_naive())
            .ok_or_else(|| CalendarError::DateOutOfRange(self.millis.to_string()))
    }

    /// 生成存储用的字符串键（格式: `date-<millis>`）
    #[must_use]
    pub fn to_storage_key(&self) -> String {
        self.to_string()
    }

    /// 从存储键解析
    #[must_use]
    pub fn from_storage_key(key: &str) -> Option<Self> {
        key.parse().ok()
    }
}

impl fmt::Display for DateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{KEY_PREFIX}{}", self.millis)
    }
}

impl FromStr for DateId {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let millis = s
            .strip_prefix(KEY_PREFIX)
            .and_then(|rest| rest.parse::<i64>().ok())
            .ok_or_else(|| CalendarError::InvalidDateId(s.to_string()))?;
        Ok(Self { millis })
    }
}

impl Serialize for DateId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_storage_key())
    }
}

impl<'de> Deserialize<'de> for DateId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
