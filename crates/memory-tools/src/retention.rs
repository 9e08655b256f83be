//! Retention tools: age-based and total deletion

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use memory_core::args::parse_non_negative;
use memory_core::tool::SchemaBuilder;
use memory_core::{MessageStore, Result, Tool, ToolResult};
use serde_json::Value;

/// Unit of a retention window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AgeUnit {
    Hours,
    Days,
}

impl AgeUnit {
    fn arg_name(self) -> &'static str {
        match self {
            Self::Hours => "hours",
            Self::Days => "days",
        }
    }

    fn delta(self, amount: u64) -> Option<TimeDelta> {
        let amount = i64::try_from(amount).ok()?;
        match self {
            Self::Hours => TimeDelta::try_hours(amount),
            Self::Days => TimeDelta::try_days(amount),
        }
    }
}

/// Instant `amount` units before `now`
///
/// Windows reaching past the representable range clamp to the earliest
/// instant, so nothing is older than the cutoff.
fn cutoff(now: DateTime<Utc>, amount: u64, unit: AgeUnit) -> DateTime<Utc> {
    unit.delta(amount)
        .and_then(|delta| now.checked_sub_signed(delta))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

fn age_schema(unit: AgeUnit) -> Value {
    let description = match unit {
        AgeUnit::Hours => "Number of hours",
        AgeUnit::Days => "Number of days",
    };
    SchemaBuilder::object_schema_with_descriptions(vec![(
        unit.arg_name(),
        "integer",
        description,
        true,
    )])
}

fn delete_older_than(store: &MessageStore, input: &Value, unit: AgeUnit) -> Result<ToolResult> {
    let amount = parse_non_negative(input, unit.arg_name())?;
    let deleted = store.delete_older_than(cutoff(Utc::now(), amount, unit))?;

    tracing::info!(
        "Deleted {} messages older than {} {}",
        deleted,
        amount,
        unit.arg_name()
    );
    Ok(ToolResult::success(format!(
        "Deleted {} messages older than {} {}",
        deleted,
        amount,
        unit.arg_name()
    )))
}

/// Deletes messages older than a number of hours
pub struct DeleteOlderThanHoursTool {
    store: Arc<MessageStore>,
}

impl DeleteOlderThanHoursTool {
    pub fn new(store: Arc<MessageStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for DeleteOlderThanHoursTool {
    fn name(&self) -> &str {
        "delete_older_than_hours"
    }

    fn description(&self) -> &str {
        "Delete messages older than N hours"
    }

    fn input_schema(&self) -> Value {
        age_schema(AgeUnit::Hours)
    }

    async fn execute(&self, input: Value) -> Result<ToolResult> {
        delete_older_than(&self.store, &input, AgeUnit::Hours)
    }
}

/// Deletes messages older than a number of days
pub struct DeleteOlderThanDaysTool {
    store: Arc<MessageStore>,
}

impl DeleteOlderThanDaysTool {
    pub fn new(store: Arc<MessageStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for DeleteOlderThanDaysTool {
    fn name(&self) -> &str {
        "delete_older_than_days"
    }

    fn description(&self) -> &str {
        "Delete messages older than N days"
    }

    fn input_schema(&self) -> Value {
        age_schema(AgeUnit::Days)
    }

    async fn execute(&self, input: Value) -> Result<ToolResult> {
        delete_older_than(&self.store, &input, AgeUnit::Days)
    }
}

/// Deletes every stored message
pub struct DeleteAllMessagesTool {
    store: Arc<MessageStore>,
}

impl DeleteAllMessagesTool {
    pub fn new(store: Arc<MessageStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for DeleteAllMessagesTool {
    fn name(&self) -> &str {
        "delete_all_messages"
    }

    fn description(&self) -> &str {
        "Delete all messages from memory"
    }

    fn input_schema(&self) -> Value {
        SchemaBuilder::empty_object()
    }

    async fn execute(&self, _input: Value) -> Result<ToolResult> {
        let deleted = self.store.delete_all()?;
        Ok(ToolResult::success(format!("Deleted all {} messages", deleted)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::store;
    use serde_json::json;

    #[test]
    fn test_cutoff_arithmetic() {
        let now = Utc::now();
        assert_eq!(cutoff(now, 2, AgeUnit::Hours), now - TimeDelta::hours(2));
        assert_eq!(cutoff(now, 3, AgeUnit::Days), now - TimeDelta::days(3));
        assert_eq!(cutoff(now, 0, AgeUnit::Days), now);
    }

    #[test]
    fn test_cutoff_clamps_huge_windows() {
        let now = Utc::now();
        assert_eq!(cutoff(now, u64::MAX, AgeUnit::Days), DateTime::<Utc>::MIN_UTC);
        assert_eq!(
            cutoff(now, 10_000_000_000, AgeUnit::Hours),
            DateTime::<Utc>::MIN_UTC
        );
    }

    #[tokio::test]
    async fn test_delete_older_than_hours_keeps_recent() -> Result<()> {
        let store = store();
        store.save("recent", None, None)?;
        store.save("also recent", None, None)?;

        let tool = DeleteOlderThanHoursTool::new(store.clone());
        let result = tool.execute(json!({"hours": 1})).await?;
        assert_eq!(result.output, "Deleted 0 messages older than 1 hours");
        assert_eq!(store.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_zero_window_deletes_everything_saved_before_now() -> Result<()> {
        let store = store();
        store.save("a", None, None)?;
        store.save("b", None, None)?;
        std::thread::sleep(std::time::Duration::from_millis(5));

        let tool = DeleteOlderThanDaysTool::new(store.clone());
        let result = tool.execute(json!({"days": "0"})).await?;
        assert_eq!(result.output, "Deleted 2 messages older than 0 days");
        assert!(store.is_empty());

        let again = tool.execute(json!({"days": 0})).await?;
        assert_eq!(again.output, "Deleted 0 messages older than 0 days");
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_duration() {
        let tool = DeleteOlderThanHoursTool::new(store());

        for input in [json!({}), json!({"hours": "soon"}), json!({"hours": -2})] {
            let err = tool.execute(input).await.unwrap_err();
            assert!(err.is_validation());
        }
    }

    #[tokio::test]
    async fn test_delete_all_is_idempotent() -> Result<()> {
        let store = store();
        store.save("a", None, None)?;
        let tool = DeleteAllMessagesTool::new(store);

        assert_eq!(
            tool.execute(json!({})).await?.output,
            "Deleted all 1 messages"
        );
        assert_eq!(
            tool.execute(json!({})).await?.output,
            "Deleted all 0 messages"
        );
        Ok(())
    }
}
