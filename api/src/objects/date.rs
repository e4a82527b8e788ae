use async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType, Value};
use chrono::{DateTime, TimeZone, Utc};
use sea_orm::prelude::DateTimeWithTimeZone;

/// A point in time, serialized as milliseconds since the Unix epoch.
///
/// Input accepts an integer of epoch milliseconds, or a string holding either
/// an RFC 3339 timestamp or an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(pub DateTime<Utc>);

impl Date {
    fn from_millis(millis: i64) -> Option<Self> {
        Utc.timestamp_millis_opt(millis).single().map(Self)
    }
}

#[Scalar(name = "Date")]
impl ScalarType for Date {
    fn parse(value: Value) -> InputValueResult<Self> {
        match &value {
            Value::Number(n) => n
                .as_i64()
                .and_then(Self::from_millis)
                .ok_or_else(|| InputValueError::custom(format!("{n} is not a valid epoch time"))),
            Value::String(s) => DateTime::parse_from_rfc3339(s)
                .map(|d| Self(d.with_timezone(&Utc)))
                .ok()
                .or_else(|| s.parse().ok().and_then(Self::from_millis))
                .ok_or_else(|| InputValueError::custom(format!("{s:?} is not a valid date"))),
            _ => Err(InputValueError::expected_type(value)),
        }
    }

    fn to_value(&self) -> Value {
        Value::Number(self.0.timestamp_millis().into())
    }
}

impl From<DateTimeWithTimeZone> for Date {
    fn from(value: DateTimeWithTimeZone) -> Self {
        Self(value.with_timezone(&Utc))
    }
}

impl From<Date> for DateTimeWithTimeZone {
    fn from(Date(value): Date) -> Self {
        value.into()
    }
}
