use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta, Utc};
use serde::{Deserialize, Deserializer};
use ts_rs::TS;

// 创建作业请求，缺失字段按空值处理并在服务层校验
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "homework.ts")]
pub struct CreateHomeworkRequest {
    #[serde(default)]
    pub class_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    #[ts(type = "string | null")]
    pub due_date: Option<DueDateInput>,
    #[serde(default)]
    pub created_by: String,
}

/// 截止时间的两种写法
///
/// - 带偏移的 RFC 3339，例如 `2025-03-05T18:29:00Z`
/// - 不带偏移的本地时间，例如 `2025-03-05T23:59:00` 或 `2025-03-05T23:59`，
///   按业务时区解释
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueDateInput {
    Zoned(DateTime<Utc>),
    Local(NaiveDateTime),
}

const LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

impl DueDateInput {
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Ok(zoned) = DateTime::parse_from_rfc3339(value) {
            return Some(Self::Zoned(zoned.with_timezone(&Utc)));
        }
        LOCAL_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
            .map(Self::Local)
    }

    /// 换算为 UTC，本地时间按 `offset` 解释
    pub fn resolve(self, offset: FixedOffset) -> DateTime<Utc> {
        match self {
            Self::Zoned(at) => at,
            Self::Local(local) => {
                (local - TimeDelta::seconds(offset.local_minus_utc().into())).and_utc()
            }
        }
    }
}

impl From<DateTime<Utc>> for DueDateInput {
    fn from(at: DateTime<Utc>) -> Self {
        Self::Zoned(at)
    }
}

impl<'de> Deserialize<'de> for DueDateInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "invalid dueDate '{raw}', expected YYYY-MM-DDTHH:MM[:SS] with an optional offset"
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ist() -> FixedOffset {
        FixedOffset::east_opt(330 * 60).unwrap()
    }

    #[test]
    fn test_local_due_date_uses_business_offset() {
        let expected = Utc.with_ymd_and_hms(2025, 3, 5, 18, 29, 0).unwrap();
        for raw in ["2025-03-05T23:59:00", "2025-03-05T23:59"] {
            let parsed = DueDateInput::parse(raw).unwrap();
            assert!(matches!(parsed, DueDateInput::Local(_)));
            assert_eq!(parsed.resolve(ist()), expected);
        }
    }

    #[test]
    fn test_offset_due_date_ignores_business_offset() {
        let parsed = DueDateInput::parse("2025-03-05T23:59:00+05:30").unwrap();
        assert_eq!(
            parsed.resolve(FixedOffset::east_opt(0).unwrap()),
            Utc.with_ymd_and_hms(2025, 3, 5, 18, 29, 0).unwrap()
        );
    }

    #[test]
    fn test_due_date_rejects_other_formats() {
        assert!(DueDateInput::parse("05-03-2025 23:59").is_none());
        assert!(DueDateInput::parse("2025-03-05").is_none());

        let body = r#"{"classId":"c1","dueDate":"tomorrow"}"#;
        assert!(serde_json::from_str::<CreateHomeworkRequest>(body).is_err());
    }
}
