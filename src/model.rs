use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Raw readiness report for one pipeline agent, as served by `/api/status`.
/// The status string stays untyped here; classification happens in `view`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentHealth {
	#[serde(default)]
	pub status: Option<String>,
}

/// Connection state per upload platform. Missing platforms render as unknown.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformStates {
	#[serde(default)]
	pub youtube: Option<String>,
	#[serde(default)]
	pub instagram: Option<String>,
	#[serde(default)]
	pub tiktok: Option<String>,
}

/// Response body of `GET /api/status`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemStatus {
	#[serde(default)]
	pub content_agent: AgentHealth,
	#[serde(default)]
	pub video_agent: AgentHealth,
	#[serde(default)]
	pub audio_agent: AgentHealth,
	#[serde(default)]
	pub platforms: PlatformStates,
}

/// One entry from `GET /api/content`. Owned by the pipeline service; the
/// client only ever holds a point-in-time copy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentItem {
	pub id: String,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub theme: String,
	#[serde(default)]
	pub status: String,
	// RFC 3339 string; parsed lazily for display so one malformed
	// timestamp can't poison a whole poll.
	#[serde(default)]
	pub created_at: Option<String>,
}

/// Response body of `GET /api/stats`. Every field is optional on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsSummary {
	#[serde(default)]
	pub total_content: Option<u64>,
	#[serde(default)]
	pub completed_today: Option<u64>,
	#[serde(default)]
	pub queue_size: Option<u64>,
	/// Percentage, 0-100.
	#[serde(default)]
	pub success_rate: Option<f64>,
}

/// The unit of snapshot replacement: all three remote views, fetched in the
/// same poll cycle. Never merged field-by-field.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardData {
	pub system: SystemStatus,
	pub content: Vec<ContentItem>,
	pub stats: StatsSummary,
}

/// Local-only view filter. Empty fields match everything; non-empty fields
/// must match the item's field exactly, ignoring ASCII case. Never sent to
/// the pipeline service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
	pub theme: String,
	pub status: String,
}

impl FilterState {
	pub fn is_active(&self) -> bool {
		!self.theme.is_empty() || !self.status.is_empty()
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
	Info,
	Error,
}

/// A user-visible notification emitted by the sync client and drained by
/// whichever surface (CLI or dashboard) is active.
#[derive(Debug, Clone)]
pub struct Notice {
	pub level: NoticeLevel,
	pub message: String,
}

impl Notice {
	pub fn info(message: impl Into<String>) -> Self {
		Self {
			level: NoticeLevel::Info,
			message: message.into(),
		}
	}

	pub fn error(message: impl Into<String>) -> Self {
		Self {
			level: NoticeLevel::Error,
			message: message.into(),
		}
	}
}

/// Bounded notice queue; old entries are dropped once the surface falls
/// this far behind.
const NOTICE_BACKLOG: usize = 32;

#[derive(Debug, Default)]
pub struct NoticeQueue {
	entries: VecDeque<Notice>,
}

impl NoticeQueue {
	pub fn push(&mut self, notice: Notice) {
		if self.entries.len() == NOTICE_BACKLOG {
			self.entries.pop_front();
		}
		self.entries.push_back(notice);
	}

	pub fn drain(&mut self) -> Vec<Notice> {
		self.entries.drain(..).collect()
	}
}
