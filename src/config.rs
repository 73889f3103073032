use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = r#"
[server]
base_url = "http://127.0.0.1:8000"
request_timeout_secs = 10

[dashboard]
poll_interval_ms = 30000
default_theme = "cute_animals"
default_count = 3
themes = [
  "cute_animals",
  "funny_pets",
  "heartwarming_stories",
  "educational_facts",
  "seasonal_content",
]
"#;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
	pub server: Server,
	pub dashboard: Dashboard,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
	pub base_url: String,
	#[serde(default = "default_request_timeout_secs")]
	pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
	#[serde(default = "default_poll_interval_ms")]
	pub poll_interval_ms: u64,
	#[serde(default = "default_theme")]
	pub default_theme: String,
	#[serde(default = "default_count")]
	pub default_count: u32,
	/// Theme suggestions for the generate dialog. Any non-empty theme is
	/// accepted; these only seed the prompt.
	#[serde(default = "default_themes")]
	pub themes: Vec<String>,
}

fn default_request_timeout_secs() -> u64 {
	10
}

fn default_poll_interval_ms() -> u64 {
	30_000
}

fn default_theme() -> String {
	"cute_animals".to_string()
}

fn default_count() -> u32 {
	3
}

fn default_themes() -> Vec<String> {
	vec![
		"cute_animals".to_string(),
		"funny_pets".to_string(),
		"heartwarming_stories".to_string(),
		"educational_facts".to_string(),
		"seasonal_content".to_string(),
	]
}

pub fn base_dir() -> Result<PathBuf> {
	dirs::home_dir()
		.map(|p| p.join(".clipdeck"))
		.ok_or_else(|| anyhow::anyhow!("Failed to resolve home directory"))
}

pub fn load_or_init() -> Result<Config> {
	load_or_init_at(&base_dir()?)
}

pub fn load_or_init_at(dir: &Path) -> Result<Config> {
	if !dir.exists() {
		fs::create_dir_all(dir)?;
	}

	let config_path = dir.join("config.toml");
	if !config_path.exists() {
		fs::write(&config_path, DEFAULT_CONFIG.trim_start())?;
	}
	let content = fs::read_to_string(&config_path)?;
	let cfg: Config = toml::from_str(&content)?;
	Ok(cfg)
}

#[cfg(test)]
mod tests {
	use super::*;
	use tempfile::TempDir;

	#[test]
	fn test_first_run_writes_defaults() {
		let temp = TempDir::new().unwrap();
		let cfg = load_or_init_at(temp.path()).unwrap();

		assert!(temp.path().join("config.toml").exists());
		assert_eq!(cfg.server.base_url, "http://127.0.0.1:8000");
		assert_eq!(cfg.dashboard.poll_interval_ms, 30_000);
		assert_eq!(cfg.dashboard.default_theme, "cute_animals");
		assert_eq!(cfg.dashboard.themes.len(), 5);
	}

	#[test]
	fn test_partial_config_falls_back_to_defaults() {
		let temp = TempDir::new().unwrap();
		fs::write(
			temp.path().join("config.toml"),
			"[server]\nbase_url = \"http://pipeline.local:9000\"\n\n[dashboard]\n",
		)
		.unwrap();

		let cfg = load_or_init_at(temp.path()).unwrap();
		assert_eq!(cfg.server.base_url, "http://pipeline.local:9000");
		assert_eq!(cfg.server.request_timeout_secs, 10);
		assert_eq!(cfg.dashboard.default_count, 3);
	}

	#[test]
	fn test_existing_config_is_not_overwritten() {
		let temp = TempDir::new().unwrap();
		let path = temp.path().join("config.toml");
		fs::write(
			&path,
			"[server]\nbase_url = \"http://other:1234\"\n\n[dashboard]\npoll_interval_ms = 5000\n",
		)
		.unwrap();

		let cfg = load_or_init_at(temp.path()).unwrap();
		assert_eq!(cfg.dashboard.poll_interval_ms, 5_000);
		let on_disk = fs::read_to_string(&path).unwrap();
		assert!(on_disk.contains("http://other:1234"));
	}
}
