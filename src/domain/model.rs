use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// 一個付款級距與其人數。`tier` 越大代表級距越高。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TierConfig {
    pub tier: u32,
    pub count: u32,
}

impl TierConfig {
    pub fn new(tier: u32, count: u32) -> Self {
        Self { tier, count }
    }
}

/// 級距加上每人應付金額，只由分攤計算產生。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierAllocation {
    pub tier: u32,
    pub count: u32,
    pub amount: i64,
}

impl TierAllocation {
    /// 此級距全體參加者合計金額
    pub fn subtotal(&self) -> i64 {
        self.amount.saturating_mul(i64::from(self.count))
    }
}

/// Event date at whole-second granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HeldAt {
    pub seconds: i64,
}

impl HeldAt {
    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        // timestamp() 向下取整，毫秒以下直接捨棄
        Self {
            seconds: datetime.timestamp(),
        }
    }

    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.seconds, 0)
    }

    /// Parses an RFC 3339 date-time or a bare `YYYY-MM-DD` date.
    ///
    /// Bare dates and date-times without an offset are read as UTC.
    pub fn parse_iso(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }

        if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
            return Some(Self::from_datetime(datetime.with_timezone(&Utc)));
        }

        for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(value, pattern) {
                return Some(Self::from_datetime(naive.and_utc()));
            }
        }

        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| Self::from_datetime(naive.and_utc()))
    }
}

/// Boundary shape of an event date: a JSON-served ISO string or a
/// protobuf-style `{ "seconds": n }` timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HeldAtInput {
    Timestamp { seconds: SecondsValue },
    Iso(String),
}

/// protobuf JSON 會把 int64 輸出成字串，兩種都收
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SecondsValue {
    Number(i64),
    Text(String),
}

impl HeldAtInput {
    pub fn iso(value: impl Into<String>) -> Self {
        HeldAtInput::Iso(value.into())
    }

    pub fn seconds(seconds: i64) -> Self {
        HeldAtInput::Timestamp {
            seconds: SecondsValue::Number(seconds),
        }
    }

    /// Collapses either representation into a [`HeldAt`]; `None` when the
    /// value is empty or cannot be read as a valid date.
    pub fn resolve(&self) -> Option<HeldAt> {
        let held_at = match self {
            HeldAtInput::Iso(value) => HeldAt::parse_iso(value)?,
            HeldAtInput::Timestamp { seconds } => {
                let seconds = match seconds {
                    SecondsValue::Number(n) => *n,
                    SecondsValue::Text(text) => text.trim().parse().ok()?,
                };
                HeldAt { seconds }
            }
        };

        // 超出 chrono 可表示範圍的時間視同無效日期
        held_at.to_datetime().map(|_| held_at)
    }
}

impl From<HeldAt> for HeldAtInput {
    fn from(held_at: HeldAt) -> Self {
        HeldAtInput::seconds(held_at.seconds)
    }
}

/// 從表單送出內容解析出的活動輸入，建立後不再修改。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFormInput {
    pub title: String,
    pub description: String,
    pub total_amount: i64,
    pub tier_count: i64,
    pub held_at: Option<HeldAt>,
    pub tiers: Vec<TierConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSummary {
    pub total_amount: i64,
    pub total_people: u64,
    pub allocations: Vec<TierAllocation>,
    /// Σ amount × count
    pub collected: i64,
    /// collected - total_amount; per-tier rounding is never reconciled
    pub drift: i64,
}
