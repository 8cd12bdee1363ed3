//! Conversation history buckets
//!
//! Bucket boundaries are measured from midnight of `now` in `now`'s own
//! timezone, so "Today" means the calendar day, not the last 24 hours.

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};
use std::fmt;

/// A past conversation as listed in the sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    pub id: String,
    pub title: String,
    pub last_message: String,
    pub timestamp: DateTime<Utc>,
}

/// Sidebar buckets, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Recency {
    Today,
    Yesterday,
    LastWeek,
    LastMonth,
    Older,
}

impl Recency {
    pub const ALL: [Recency; 5] = [
        Recency::Today,
        Recency::Yesterday,
        Recency::LastWeek,
        Recency::LastMonth,
        Recency::Older,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Recency::Today => "Today",
            Recency::Yesterday => "Yesterday",
            Recency::LastWeek => "Last 7 days",
            Recency::LastMonth => "Last 30 days",
            Recency::Older => "Older",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationGroup<'a> {
    pub recency: Recency,
    pub conversations: Vec<&'a Conversation>,
}

fn start_of_day<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Utc> {
    let midnight = now.date_naive().and_time(NaiveTime::MIN);
    now.timezone()
        .from_local_datetime(&midnight)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        // midnight skipped by a DST jump
        .unwrap_or_else(|| now.with_timezone(&Utc))
}

/// Which bucket `timestamp` falls in relative to `now`
pub fn classify<Tz: TimeZone>(timestamp: DateTime<Utc>, now: &DateTime<Tz>) -> Recency {
    let today = start_of_day(now);

    if timestamp >= today {
        Recency::Today
    } else if timestamp >= today - Duration::days(1) {
        Recency::Yesterday
    } else if timestamp >= today - Duration::days(7) {
        Recency::LastWeek
    } else if timestamp >= today - Duration::days(30) {
        Recency::LastMonth
    } else {
        Recency::Older
    }
}

/// Groups conversations by recency.
///
/// Groups come back in display order with empty ones omitted; conversations
/// keep their input order within a group.
pub fn group_by_recency<'a, Tz: TimeZone>(
    conversations: &'a [Conversation],
    now: &DateTime<Tz>,
) -> Vec<ConversationGroup<'a>> {
    Recency::ALL
        .into_iter()
        .filter_map(|recency| {
            let members: Vec<&Conversation> = conversations
                .iter()
                .filter(|conv| classify(conv.timestamp, now) == recency)
                .collect();
            (!members.is_empty()).then_some(ConversationGroup {
                recency,
                conversations: members,
            })
        })
        .collect()
}

/// Short age label: "Just now", "5m ago", "3h ago", or the date.
///
/// The date is the calendar day in `now`'s timezone, matching the bucket
/// `classify` puts the timestamp in.
pub fn format_relative<Tz: TimeZone>(timestamp: DateTime<Utc>, now: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    let age = now.with_timezone(&Utc) - timestamp;
    let hours = age.num_hours();

    if hours < 1 {
        let minutes = age.num_minutes();
        if minutes < 1 {
            "Just now".to_string()
        } else {
            format!("{minutes}m ago")
        }
    } else if hours < 24 {
        format!("{hours}h ago")
    } else {
        timestamp
            .with_timezone(&now.timezone())
            .format("%Y-%m-%d")
            .to_string()
    }
}

/// Placeholder history shown until real conversations are stored
pub fn sample_conversations(now: DateTime<Utc>) -> Vec<Conversation> {
    let entry = |id: &str, title: &str, last: &str, age: Duration| Conversation {
        id: id.to_string(),
        title: title.to_string(),
        last_message: last.to_string(),
        timestamp: now - age,
    };

    vec![
        entry(
            "1",
            "Getting Started with CypherX",
            "Hello! I'm CypherX, your AI assistant...",
            Duration::zero(),
        ),
        entry(
            "2",
            "JavaScript Best Practices",
            "Can you explain modern JavaScript...",
            Duration::hours(2),
        ),
        entry(
            "3",
            "React Development Tips",
            "What are the best practices for...",
            Duration::days(1),
        ),
        entry(
            "4",
            "API Integration Help",
            "How do I integrate with external APIs...",
            Duration::days(2),
        ),
        entry(
            "5",
            "Database Design Questions",
            "What's the best approach for...",
            Duration::days(7),
        ),
        entry(
            "6",
            "Performance Optimization",
            "My application is running slowly...",
            Duration::days(15),
        ),
    ]
}
