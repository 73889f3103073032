//! Pure view-model functions: raw pipeline state in, renderable data out.
//!
//! Nothing in this module touches the network or the terminal, which keeps
//! the status/badge/action rules unit-testable on their own.

use crate::model::{ContentItem, FilterState};
use chrono::{DateTime, Utc};

/// Badge class for a content item's lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub kind: BadgeKind,
    pub text: String,
}

/// Maps a content item's raw status to its badge. Unknown statuses keep
/// their raw text so operators can see what the service actually said.
pub fn status_badge(status: Option<&str>) -> Badge {
    match status {
        Some("generated") => Badge {
            kind: BadgeKind::Success,
            text: "Generated".to_string(),
        },
        Some("uploaded") => Badge {
            kind: BadgeKind::Success,
            text: "Uploaded".to_string(),
        },
        Some("failed") => Badge {
            kind: BadgeKind::Error,
            text: "Failed".to_string(),
        },
        Some("queued") => Badge {
            kind: BadgeKind::Warning,
            text: "Queued".to_string(),
        },
        Some("processing") => Badge {
            kind: BadgeKind::Info,
            text: "Processing".to_string(),
        },
        Some(other) => Badge {
            kind: BadgeKind::Info,
            text: other.to_string(),
        },
        None => Badge {
            kind: BadgeKind::Info,
            text: "Unknown".to_string(),
        },
    }
}

/// Binary health classification for a pipeline agent: "ready" and
/// "connected" count as up, anything else (including absent) as down.
pub fn is_ready(status: Option<&str>) -> bool {
    matches!(status, Some("ready") | Some("connected"))
}

/// Four-way connection state for an upload platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformState {
    Connected,
    Pending,
    Error,
    Unknown,
}

impl PlatformState {
    pub fn label(self) -> &'static str {
        match self {
            PlatformState::Connected => "Connected",
            PlatformState::Pending => "Pending",
            PlatformState::Error => "Error",
            PlatformState::Unknown => "Unknown",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            PlatformState::Connected => "✓",
            PlatformState::Pending => "○",
            PlatformState::Error => "✗",
            PlatformState::Unknown => "·",
        }
    }
}

pub fn platform_state(status: Option<&str>) -> PlatformState {
    match status {
        Some("connected") => PlatformState::Connected,
        Some("pending") => PlatformState::Pending,
        Some("error") => PlatformState::Error,
        _ => PlatformState::Unknown,
    }
}

/// Which actions a content item currently offers. A pure function of the
/// lifecycle status and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemActions {
    pub upload: bool,
    pub retry: bool,
    pub view: bool,
}

pub fn item_actions(status: &str) -> ItemActions {
    ItemActions {
        upload: status == "generated",
        retry: status == "failed",
        view: true,
    }
}

fn field_matches(wanted: &str, actual: &str) -> bool {
    wanted.is_empty() || wanted.eq_ignore_ascii_case(actual)
}

/// Whether an item passes the local view filter. Filtering only affects
/// visibility; the underlying collection is never touched.
pub fn matches_filter(item: &ContentItem, filter: &FilterState) -> bool {
    field_matches(&filter.theme, &item.theme) && field_matches(&filter.status, &item.status)
}

pub fn visible_items<'a>(items: &'a [ContentItem], filter: &FilterState) -> Vec<&'a ContentItem> {
    items.iter().filter(|i| matches_filter(i, filter)).collect()
}

/// Relative age for a wire timestamp, e.g. "2m ago". Returns None when the
/// timestamp is absent or unparseable.
pub fn format_age(created_at: Option<&str>, now: DateTime<Utc>) -> Option<String> {
    let created = DateTime::parse_from_rfc3339(created_at?)
        .ok()?
        .with_timezone(&Utc);
    let duration = now.signed_duration_since(created);

    let formatted = if duration.num_seconds() < 60 {
        "just now".to_string()
    } else if duration.num_minutes() < 60 {
        format!("{}m ago", duration.num_minutes())
    } else if duration.num_hours() < 24 {
        format!("{}h ago", duration.num_hours())
    } else {
        format!("{}d ago", duration.num_days())
    };
    Some(formatted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(theme: &str, status: &str) -> ContentItem {
        ContentItem {
            id: format!("{theme}-{status}"),
            title: "A title".to_string(),
            theme: theme.to_string(),
            status: status.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_readiness_classification() {
        assert!(is_ready(Some("ready")));
        assert!(is_ready(Some("connected")));
        assert!(!is_ready(Some("anything-else")));
        assert!(!is_ready(Some("Ready")));
        assert!(!is_ready(None));
    }

    #[test]
    fn test_platform_state_four_way() {
        assert_eq!(platform_state(Some("connected")), PlatformState::Connected);
        assert_eq!(platform_state(Some("pending")), PlatformState::Pending);
        assert_eq!(platform_state(Some("error")), PlatformState::Error);
        assert_eq!(platform_state(Some("xyz")), PlatformState::Unknown);
        assert_eq!(platform_state(None), PlatformState::Unknown);

        assert_eq!(platform_state(Some("connected")).label(), "Connected");
        assert_eq!(platform_state(Some("pending")).label(), "Pending");
        assert_eq!(platform_state(Some("error")).label(), "Error");
        assert_eq!(platform_state(Some("xyz")).label(), "Unknown");
    }

    #[test]
    fn test_status_badge_known_values() {
        assert_eq!(status_badge(Some("generated")).kind, BadgeKind::Success);
        assert_eq!(status_badge(Some("uploaded")).kind, BadgeKind::Success);
        assert_eq!(status_badge(Some("failed")).kind, BadgeKind::Error);
        assert_eq!(status_badge(Some("queued")).kind, BadgeKind::Warning);
        assert_eq!(status_badge(Some("processing")).kind, BadgeKind::Info);
    }

    #[test]
    fn test_status_badge_unknown_keeps_raw_text() {
        let badge = status_badge(Some("weird"));
        assert_eq!(badge.kind, BadgeKind::Info);
        assert_eq!(badge.text, "weird");

        let missing = status_badge(None);
        assert_eq!(missing.kind, BadgeKind::Info);
        assert_eq!(missing.text, "Unknown");
    }

    #[test]
    fn test_item_actions_depend_only_on_status() {
        let generated = item_actions("generated");
        assert!(generated.upload && !generated.retry && generated.view);

        let failed = item_actions("failed");
        assert!(!failed.upload && failed.retry && failed.view);

        let queued = item_actions("queued");
        assert!(!queued.upload && !queued.retry && queued.view);
    }

    #[test]
    fn test_filter_by_theme() {
        let mut items = vec![
            item("cute_animals", "generated"),
            item("funny_pets", "generated"),
            item("CUTE_ANIMALS", "queued"),
            item("cute_animals", "failed"),
            item("educational_facts", "uploaded"),
        ];
        for n in 0..5 {
            items.push(item("seasonal_content", if n % 2 == 0 { "queued" } else { "failed" }));
        }
        assert_eq!(items.len(), 10);

        let filter = FilterState {
            theme: "cute_animals".to_string(),
            status: String::new(),
        };
        let visible = visible_items(&items, &filter);
        assert_eq!(visible.len(), 3);
        assert!(visible
            .iter()
            .all(|i| i.theme.eq_ignore_ascii_case("cute_animals")));
        // Source collection is untouched.
        assert_eq!(items.len(), 10);
    }

    #[test]
    fn test_filter_by_theme_and_status() {
        let items = vec![
            item("cute_animals", "generated"),
            item("cute_animals", "failed"),
            item("funny_pets", "failed"),
        ];
        let filter = FilterState {
            theme: "cute_animals".to_string(),
            status: "FAILED".to_string(),
        };
        let visible = visible_items(&items, &filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].status, "failed");
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let items = vec![item("a", "queued"), item("b", "weird")];
        assert_eq!(visible_items(&items, &FilterState::default()).len(), 2);
    }

    #[test]
    fn test_format_age() {
        let now = DateTime::parse_from_rfc3339("2025-06-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(
            format_age(Some("2025-06-01T11:58:00Z"), now),
            Some("2m ago".to_string())
        );
        assert_eq!(
            format_age(Some("2025-05-30T12:00:00Z"), now),
            Some("2d ago".to_string())
        );
        assert_eq!(format_age(Some("not a timestamp"), now), None);
        assert_eq!(format_age(None, now), None);
    }
}
