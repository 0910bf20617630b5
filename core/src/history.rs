//! Lifecycle state-change events and their per-response history.

use crate::state::LifecycleState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One recorded lifecycle transition, as reported by the platform.
///
/// The wire payload names the fields `oldStatus`, `newStatus` and `date`;
/// `date` is epoch milliseconds, sometimes encoded as a JSON number and
/// sometimes as a numeric string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateTransitionEvent {
    /// State before the transition
    #[serde(rename = "oldStatus")]
    pub old_state: LifecycleState,
    /// State after the transition
    #[serde(rename = "newStatus")]
    pub new_state: LifecycleState,
    /// Transition time, epoch milliseconds
    #[serde(rename = "date", deserialize_with = "epoch_millis")]
    pub timestamp_ms: i64,
}

impl StateTransitionEvent {
    /// The transition time as a UTC timestamp, `None` when the platform
    /// reported a value outside the representable range.
    #[must_use]
    pub fn occurred_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp_ms)
    }
}

/// Accept epoch millis as either a JSON integer or a numeric string.
fn epoch_millis<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.parse::<i64>().map_err(serde::de::Error::custom),
    }
}

/// The transition events returned in a single response payload.
///
/// The platform returns its *entire* change history on each lifecycle
/// query, in no guaranteed order, so callers must recompute the latest
/// event every time rather than trust array position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateChangeHistory {
    events: Vec<StateTransitionEvent>,
}

impl StateChangeHistory {
    /// Wrap a collection of events.
    #[must_use]
    pub const fn new(events: Vec<StateTransitionEvent>) -> Self {
        Self { events }
    }

    /// True when no transition has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of recorded transitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// The event with the maximal timestamp, or `None` when empty.
    ///
    /// Linear scan with a strict comparison: when several events share the
    /// maximal timestamp the first one encountered wins, which keeps the
    /// result deterministic for a given payload ordering.
    #[must_use]
    pub fn latest(&self) -> Option<&StateTransitionEvent> {
        let mut latest = self.events.first()?;
        for event in &self.events[1..] {
            if event.timestamp_ms > latest.timestamp_ms {
                latest = event;
            }
        }
        Some(latest)
    }

    /// Iterate over the recorded events in payload order.
    pub fn iter(&self) -> impl Iterator<Item = &StateTransitionEvent> {
        self.events.iter()
    }
}

impl From<Vec<StateTransitionEvent>> for StateChangeHistory {
    fn from(events: Vec<StateTransitionEvent>) -> Self {
        Self::new(events)
    }
}
