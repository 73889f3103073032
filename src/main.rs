mod api;
mod client;
mod config;
mod model;
mod view;

use anyhow::{Context, Result};
use api::HttpTransport;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use client::{RESYNC_DELAY, SyncClient};
use config::Config;
use crossterm::{
	event::{self, Event, KeyCode, KeyEventKind},
	execute,
	terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use model::{ContentItem, Notice, NoticeLevel};
use ratatui::{
	prelude::*,
	widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::io::stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};
use view::{BadgeKind, PlatformState};

#[derive(Parser)]
#[command(name = "clipdeck")]
#[command(about = "Terminal dashboard for an AI short-video pipeline")]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
	/// Print the current pipeline snapshot as JSON
	Status,
	/// List content items, optionally narrowed by theme and status
	List {
		/// Only show items with this theme (exact, case-insensitive)
		#[arg(long, default_value = "")]
		theme: String,
		/// Only show items with this status (exact, case-insensitive)
		#[arg(long, default_value = "")]
		status: String,
	},
	/// Ask the pipeline to generate new videos
	Generate {
		/// Number of videos to generate (defaults to config)
		#[arg(long)]
		count: Option<u32>,
		/// Content theme (defaults to config)
		#[arg(long)]
		theme: Option<String>,
	},
	/// Upload one item by id, or every queued item when no id is given
	Upload {
		id: Option<String>,
	},
	/// Retry a failed item
	Retry {
		id: String,
	},
}

#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();
	let cfg = config::load_or_init().context("failed to load config")?;

	let transport = HttpTransport::new(
		&cfg.server.base_url,
		Duration::from_secs(cfg.server.request_timeout_secs),
	)
	.context("failed to build HTTP client")?;
	let client = SyncClient::new(Arc::new(transport));

	match cli.command {
		Some(command) => {
			init_tracing();
			run_command(command, &cfg, &client).await
		}
		None => run_dashboard(&cfg, client),
	}
}

fn init_tracing() {
	use tracing_subscriber::EnvFilter;
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("clipdeck=info"));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.try_init();
}

async fn run_command(command: Commands, cfg: &Config, client: &SyncClient) -> Result<()> {
	match command {
		Commands::Status => {
			client.refresh().await?;
			let data = client
				.snapshot()
				.ok_or_else(|| anyhow::anyhow!("no snapshot available"))?;
			let payload = serde_json::json!({
				"last_updated": client.last_updated(),
				"system": data.system,
				"stats": data.stats,
				"content": data.content,
			});
			println!("{}", serde_json::to_string_pretty(&payload)?);
			Ok(())
		}
		Commands::List { theme, status } => {
			client.refresh().await?;
			client.set_filter(&theme, &status);
			let data = client.snapshot().unwrap_or_default();
			let filter = client.filter();
			let rows = view::visible_items(&data.content, &filter);

			if rows.is_empty() {
				println!("No matching content");
				return Ok(());
			}
			println!("Found {} content item(s):", rows.len());
			println!("{}", "-".repeat(60));
			let now = Utc::now();
			for item in rows {
				let badge = view::status_badge(Some(item.status.as_str()));
				println!("ID: {}", item.id);
				println!("Title: {}", item.title);
				println!("Theme: {}", item.theme);
				println!("Status: {}", badge.text);
				if let Some(age) = view::format_age(item.created_at.as_deref(), now) {
					println!("Created: {age}");
				}
				println!("{}", "-".repeat(30));
			}
			Ok(())
		}
		Commands::Generate { count, theme } => {
			let count = count.unwrap_or(cfg.dashboard.default_count);
			let theme = theme.unwrap_or_else(|| cfg.dashboard.default_theme.clone());
			let result = client.request_generation(count, &theme).await;
			finish_action(client, result).await
		}
		Commands::Upload { id } => {
			let result = match id {
				Some(id) => client.request_upload(&id).await,
				None => client.request_upload_all().await,
			};
			finish_action(client, result).await
		}
		Commands::Retry { id } => {
			let result = client.request_retry(&id).await;
			finish_action(client, result).await
		}
	}
}

/// One-shot commands wait out the deferred re-sync before exiting, so the
/// follow-up refresh still happens exactly once.
async fn finish_action(client: &SyncClient, result: Result<(), client::ClientError>) -> Result<()> {
	print_notices(client.take_notices());
	result?;

	tokio::time::sleep(RESYNC_DELAY + Duration::from_millis(250)).await;
	print_notices(client.take_notices());
	if let Some(data) = client.snapshot() {
		if let Some(queued) = data.stats.queue_size {
			println!("Queue size: {queued}");
		}
	}
	Ok(())
}

fn print_notices(notices: Vec<Notice>) {
	for notice in notices {
		match notice.level {
			NoticeLevel::Info => println!("{}", notice.message),
			NoticeLevel::Error => eprintln!("{}", notice.message),
		}
	}
}

fn run_dashboard(cfg: &Config, client: SyncClient) -> Result<()> {
	enable_raw_mode()?;
	let mut stdout_handle = stdout();
	execute!(stdout_handle, EnterAlternateScreen)?;
	let backend = ratatui::backend::CrosstermBackend::new(stdout_handle);
	let mut terminal = ratatui::Terminal::new(backend)?;

	client.start_auto_refresh(Duration::from_millis(cfg.dashboard.poll_interval_ms));
	spawn_refresh(&client);

	let mut selected: usize = 0;
	let mut list_state = ListState::default();
	let mut show_help = false;
	let mut show_detail = false;
	let mut status_message: Option<(String, Instant)> = None;
	// Generate dialog state
	let mut generate_mode = false;
	let mut gen_count_buf = String::new();
	let mut gen_theme_buf = String::new();
	let mut gen_field = 0; // 0 = count, 1 = theme
	// Filter dialog state
	let mut filter_mode = false;
	let mut filter_theme_buf = String::new();
	let mut filter_status_buf = String::new();
	let mut filter_field = 0; // 0 = theme, 1 = status

	loop {
		// Promote drained notices to the footer message slot.
		for notice in client.take_notices() {
			status_message = Some((format_notice(&notice), Instant::now()));
		}
		let active_status = status_message
			.as_ref()
			.and_then(|(msg, ts)| (ts.elapsed() < Duration::from_secs(5)).then(|| msg.clone()));
		if status_message
			.as_ref()
			.map(|(_, ts)| ts.elapsed() >= Duration::from_secs(5))
			.unwrap_or(false)
		{
			status_message = None;
		}

		let data = client.snapshot().unwrap_or_default();
		let filter = client.filter();
		let visible: Vec<ContentItem> = view::visible_items(&data.content, &filter)
			.into_iter()
			.cloned()
			.collect();
		if visible.is_empty() {
			selected = 0;
			list_state.select(None);
		} else {
			if selected >= visible.len() {
				selected = visible.len() - 1;
			}
			list_state.select(Some(selected));
		}
		let last_updated = client.last_updated();

		terminal.draw(|f| {
			let size = f.area();
			let vertical = Layout::default()
				.direction(Direction::Vertical)
				.constraints(
					[
						Constraint::Length(5),
						Constraint::Min(3),
						Constraint::Length(2),
					]
					.as_ref(),
				)
				.split(size);

			// Header: agent readiness, platform states, aggregate stats.
			let mut agent_spans = vec![Span::styled(
				"Agents    ",
				Style::default().fg(Color::DarkGray),
			)];
			for (name, health) in [
				("content", &data.system.content_agent),
				("video", &data.system.video_agent),
				("audio", &data.system.audio_agent),
			] {
				let style = if view::is_ready(health.status.as_deref()) {
					Style::default().fg(Color::Green)
				} else {
					Style::default().fg(Color::Red)
				};
				agent_spans.push(Span::styled("● ", style));
				agent_spans.push(Span::raw(format!("{name}   ")));
			}

			let mut platform_spans = vec![Span::styled(
				"Platforms ",
				Style::default().fg(Color::DarkGray),
			)];
			for (name, status) in [
				("youtube", &data.system.platforms.youtube),
				("instagram", &data.system.platforms.instagram),
				("tiktok", &data.system.platforms.tiktok),
			] {
				let state = view::platform_state(status.as_deref());
				platform_spans.push(Span::styled(
					format!("{} ", state.glyph()),
					platform_style(state),
				));
				platform_spans.push(Span::raw(format!("{name} ({})   ", state.label())));
			}

			let stats_line = format!(
				"Total {}   Today {}   Queued {}   Success {}   Updated {}",
				fmt_count(data.stats.total_content),
				fmt_count(data.stats.completed_today),
				fmt_count(data.stats.queue_size),
				fmt_rate(data.stats.success_rate),
				fmt_last_updated(last_updated),
			);

			let header = Paragraph::new(vec![
				Line::from(agent_spans),
				Line::from(platform_spans),
				Line::from(Span::styled(
					stats_line,
					Style::default().fg(Color::DarkGray),
				)),
			])
			.block(Block::default().borders(Borders::ALL).title("Pipeline"));
			f.render_widget(header, vertical[0]);

			let body = Layout::default()
				.direction(Direction::Horizontal)
				.constraints([Constraint::Percentage(55), Constraint::Percentage(45)].as_ref())
				.split(vertical[1]);

			// Content list
			let now = Utc::now();
			let items: Vec<ListItem> = visible
				.iter()
				.map(|item| {
					let badge = view::status_badge(Some(item.status.as_str()));
					let (glyph, style) = badge_indicator(badge.kind);
					let mut spans: Vec<Span> = Vec::new();
					spans.push(Span::styled(glyph, style));
					spans.push(Span::raw(" "));
					spans.push(Span::raw(item.title.clone()));
					spans.push(Span::styled(
						format!(" · {}", item.theme),
						Style::default().fg(Color::DarkGray),
					));
					if let Some(age) = view::format_age(item.created_at.as_deref(), now) {
						spans.push(Span::styled(
							format!(" · {age}"),
							Style::default().fg(Color::DarkGray),
						));
					}
					ListItem::new(Line::from(spans))
				})
				.collect();

			let list_title = if filter.is_active() {
				format!("Content ({}/{}, filtered)", visible.len(), data.content.len())
			} else {
				format!("Content ({})", data.content.len())
			};
			let list = List::new(items)
				.block(Block::default().borders(Borders::ALL).title(list_title))
				.highlight_symbol("▶ ")
				.highlight_style(
					Style::default()
						.add_modifier(Modifier::BOLD | Modifier::REVERSED)
						.fg(Color::White),
				);
			f.render_stateful_widget(list, body[0], &mut list_state);

			// Detail pane for the selected item
			let detail_text = if let Some(item) = visible.get(selected) {
				item_details(item)
			} else if data.content.is_empty() {
				String::from("No content yet.\n\nPress g to generate new videos.")
			} else {
				String::from("No item matches the current filter.\n\nPress c to clear it.")
			};
			let details = Paragraph::new(detail_text)
				.block(Block::default().borders(Borders::ALL).title("Details"))
				.wrap(Wrap { trim: true });
			f.render_widget(details, body[1]);

			// Footer
			let footer_height: u16 = if active_status.is_some() { 3 } else { 2 };
			let mut footer_lines = vec![footer_text(size.width)];
			if let Some(msg) = &active_status {
				footer_lines.push(format!("Status: {msg}"));
			}
			let footer_block = if active_status.is_some() {
				Block::default().borders(Borders::ALL)
			} else {
				Block::default()
			};
			let footer = Paragraph::new(footer_lines.join("  |  "))
				.block(footer_block)
				.wrap(Wrap { trim: true });
			let footer_area = Rect {
				x: vertical[2].x,
				y: vertical[2].y,
				width: vertical[2].width,
				height: footer_height.min(size.height.saturating_sub(vertical[2].y)),
			};
			f.render_widget(footer, footer_area);

			if show_help {
				let area = centered_rect(60, 70, size);
				f.render_widget(ratatui::widgets::Clear, area);
				let overlay = Paragraph::new(help_text())
					.block(Block::default().borders(Borders::ALL).title("Help"))
					.wrap(Wrap { trim: true });
				f.render_widget(overlay, area);
			}

			if show_detail {
				if let Some(item) = visible.get(selected) {
					let area = centered_rect(70, 60, size);
					f.render_widget(ratatui::widgets::Clear, area);
					let overlay = Paragraph::new(item_details(item))
						.block(Block::default().borders(Borders::ALL).title("Content Item"))
						.wrap(Wrap { trim: true });
					f.render_widget(overlay, area);
				}
			}

			if generate_mode {
				let area = centered_rect(60, 40, size);
				f.render_widget(ratatui::widgets::Clear, area);
				let cursors = [
					if gen_field == 0 { "█" } else { "" },
					if gen_field == 1 { "█" } else { "" },
				];
				let body_text = format!(
					"How many videos?\n> {}{}\n\nTheme (Up/Down cycles suggestions)\n> {}{}\n\nTab to switch fields, Enter to start, Esc to cancel",
					gen_count_buf, cursors[0], gen_theme_buf, cursors[1],
				);
				let overlay = Paragraph::new(body_text)
					.block(
						Block::default()
							.borders(Borders::ALL)
							.title("Generate Content")
							.border_style(Style::default().fg(Color::Cyan))
							.title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
					)
					.wrap(Wrap { trim: true });
				f.render_widget(overlay, area);
			}

			if filter_mode {
				let area = centered_rect(60, 35, size);
				f.render_widget(ratatui::widgets::Clear, area);
				let cursors = [
					if filter_field == 0 { "█" } else { "" },
					if filter_field == 1 { "█" } else { "" },
				];
				let body_text = format!(
					"Theme (exact match, blank = any)\n> {}{}\n\nStatus (exact match, blank = any)\n> {}{}\n\nTab to switch fields, Enter to apply, Esc to cancel",
					filter_theme_buf, cursors[0], filter_status_buf, cursors[1],
				);
				let overlay = Paragraph::new(body_text)
					.block(Block::default().borders(Borders::ALL).title("Filter"))
					.wrap(Wrap { trim: true });
				f.render_widget(overlay, area);
			}
		})?;

		if event::poll(Duration::from_millis(100))? {
			if let Event::Key(key) = event::read()? {
				if key.kind == KeyEventKind::Press {
					if show_help && key.code != KeyCode::Char('h') && key.code != KeyCode::Esc {
						continue;
					}
					if show_detail {
						match key.code {
							KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
								show_detail = false;
							}
							_ => {}
						}
						continue;
					}
					if generate_mode {
						match key.code {
							KeyCode::Char(c) if !c.is_control() => match gen_field {
								0 if c.is_ascii_digit() => gen_count_buf.push(c),
								1 => gen_theme_buf.push(c),
								_ => {}
							},
							KeyCode::Backspace => {
								match gen_field {
									0 => {
										gen_count_buf.pop();
									}
									_ => {
										gen_theme_buf.pop();
									}
								}
							}
							KeyCode::Tab | KeyCode::BackTab => {
								gen_field = (gen_field + 1) % 2;
							}
							KeyCode::Up | KeyCode::Down if gen_field == 1 => {
								gen_theme_buf = next_theme_suggestion(
									&cfg.dashboard.themes,
									&gen_theme_buf,
									key.code == KeyCode::Down,
								);
							}
							KeyCode::Enter => {
								match gen_count_buf.trim().parse::<u32>() {
									Ok(count) => {
										let theme = gen_theme_buf.clone();
										let action_client = client.clone();
										tokio::spawn(async move {
											let _ = action_client
												.request_generation(count, &theme)
												.await;
										});
										generate_mode = false;
									}
									Err(_) => {
										status_message = Some((
											"Count must be a positive number".to_string(),
											Instant::now(),
										));
									}
								}
							}
							KeyCode::Esc => {
								generate_mode = false;
							}
							_ => {}
						}
						continue;
					}
					if filter_mode {
						match key.code {
							KeyCode::Char(c) if !c.is_control() => match filter_field {
								0 => filter_theme_buf.push(c),
								_ => filter_status_buf.push(c),
							},
							KeyCode::Backspace => {
								match filter_field {
									0 => {
										filter_theme_buf.pop();
									}
									_ => {
										filter_status_buf.pop();
									}
								}
							}
							KeyCode::Tab | KeyCode::BackTab => {
								filter_field = (filter_field + 1) % 2;
							}
							KeyCode::Enter => {
								client.set_filter(&filter_theme_buf, &filter_status_buf);
								filter_mode = false;
								selected = 0;
							}
							KeyCode::Esc => {
								filter_mode = false;
							}
							_ => {}
						}
						continue;
					}

					match key.code {
						KeyCode::Char('q') => break,
						KeyCode::Char('h') | KeyCode::Char('?') => {
							show_help = !show_help;
						}
						KeyCode::Esc => {
							show_help = false;
						}
						KeyCode::Char('j') | KeyCode::Down => {
							if selected + 1 < visible.len() {
								selected += 1;
							}
						}
						KeyCode::Char('k') | KeyCode::Up => {
							if selected > 0 {
								selected -= 1;
							}
						}
						KeyCode::Char('r') => {
							spawn_refresh(&client);
							status_message = Some(("Refreshing…".to_string(), Instant::now()));
						}
						KeyCode::Char('g') => {
							generate_mode = true;
							gen_count_buf = cfg.dashboard.default_count.to_string();
							gen_theme_buf = cfg.dashboard.default_theme.clone();
							gen_field = 0;
						}
						KeyCode::Char('u') => {
							if let Some(item) = visible.get(selected) {
								if view::item_actions(&item.status).upload {
									let id = item.id.clone();
									let action_client = client.clone();
									tokio::spawn(async move {
										let _ = action_client.request_upload(&id).await;
									});
								} else {
									status_message = Some((
										"Only generated items can be uploaded".to_string(),
										Instant::now(),
									));
								}
							}
						}
						KeyCode::Char('U') => {
							let action_client = client.clone();
							tokio::spawn(async move {
								let _ = action_client.request_upload_all().await;
							});
						}
						KeyCode::Char('y') => {
							if let Some(item) = visible.get(selected) {
								if view::item_actions(&item.status).retry {
									let id = item.id.clone();
									let action_client = client.clone();
									tokio::spawn(async move {
										let _ = action_client.request_retry(&id).await;
									});
								} else {
									status_message = Some((
										"Only failed items can be retried".to_string(),
										Instant::now(),
									));
								}
							}
						}
						KeyCode::Char('/') => {
							filter_mode = true;
							let current = client.filter();
							filter_theme_buf = current.theme;
							filter_status_buf = current.status;
							filter_field = 0;
						}
						KeyCode::Char('c') => {
							client.set_filter("", "");
							status_message =
								Some(("Filter cleared".to_string(), Instant::now()));
						}
						KeyCode::Enter => {
							if visible.get(selected).is_some() {
								show_detail = true;
							}
						}
						_ => {}
					}
				}
			}
		}
	}

	client.stop_auto_refresh();
	teardown_terminal()?;
	Ok(())
}

fn spawn_refresh(client: &SyncClient) {
	let client = client.clone();
	tokio::spawn(async move {
		let _ = client.refresh().await;
	});
}

fn item_details(item: &ContentItem) -> String {
	let badge = view::status_badge(Some(item.status.as_str()));
	let actions = view::item_actions(&item.status);
	let mut offered = vec!["[enter] view"];
	if actions.upload {
		offered.push("[u] upload");
	}
	if actions.retry {
		offered.push("[y] retry");
	}
	format!(
		"Title: {}\nID: {}\nTheme: {}\nStatus: {}\nCreated: {}\n\n{}\n\nActions: {}",
		item.title,
		item.id,
		item.theme,
		badge.text,
		item.created_at.as_deref().unwrap_or("-"),
		item.description,
		offered.join("  "),
	)
}

fn next_theme_suggestion(themes: &[String], current: &str, forward: bool) -> String {
	if themes.is_empty() {
		return current.to_string();
	}
	let idx = themes.iter().position(|t| t == current);
	let next = match (idx, forward) {
		(Some(i), true) => (i + 1) % themes.len(),
		(Some(i), false) => (i + themes.len() - 1) % themes.len(),
		(None, _) => 0,
	};
	themes[next].clone()
}

fn badge_indicator(kind: BadgeKind) -> (&'static str, Style) {
	match kind {
		BadgeKind::Success => ("✓", Style::default().fg(Color::Green)),
		BadgeKind::Error => (
			"✗",
			Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
		),
		BadgeKind::Warning => ("○", Style::default().fg(Color::Yellow)),
		BadgeKind::Info => ("·", Style::default().fg(Color::Cyan)),
	}
}

fn platform_style(state: PlatformState) -> Style {
	match state {
		PlatformState::Connected => Style::default().fg(Color::Green),
		PlatformState::Pending => Style::default().fg(Color::Yellow),
		PlatformState::Error => Style::default().fg(Color::Red),
		PlatformState::Unknown => Style::default().fg(Color::DarkGray),
	}
}

fn format_notice(notice: &Notice) -> String {
	match notice.level {
		NoticeLevel::Info => notice.message.clone(),
		NoticeLevel::Error => format!("⚠ {}", notice.message),
	}
}

fn fmt_count(value: Option<u64>) -> String {
	value.map(|v| v.to_string()).unwrap_or_else(|| "–".to_string())
}

fn fmt_rate(value: Option<f64>) -> String {
	value
		.map(|v| format!("{v:.1}%"))
		.unwrap_or_else(|| "–".to_string())
}

fn fmt_last_updated(at: Option<DateTime<Utc>>) -> String {
	let Some(at) = at else {
		return "never".to_string();
	};
	let secs = Utc::now().signed_duration_since(at).num_seconds().max(0);
	if secs < 60 {
		format!("{secs}s ago")
	} else if secs < 3600 {
		format!("{}m ago", secs / 60)
	} else {
		format!("{}h ago", secs / 3600)
	}
}

fn footer_text(width: u16) -> String {
	if width < 100 {
		"r refresh | g gen | u/U upload | y retry | / filter | c clear | h | q".to_string()
	} else {
		"r refresh | g generate | u upload | U upload all | y retry | / filter | c clear filter | enter view | h help | q quit"
			.to_string()
	}
}

fn help_text() -> String {
	format!(
		r#"clipdeck v{} - pipeline control

Navigation:
  j/k or arrows  move selection
  enter          view item details

Actions:
  g         generate videos (count + theme)
  u         upload selected item (generated only)
  U         upload all queued items
  y         retry selected item (failed only)
  r         refresh now

View:
  /         filter by theme/status
  c         clear filter
  h or ?    toggle this help
  q         quit

The dashboard re-polls the pipeline every poll_interval_ms
(config: ~/.clipdeck/config.toml) and re-syncs two seconds
after every accepted action."#,
		env!("CARGO_PKG_VERSION")
	)
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
	let popup_layout = Layout::default()
		.direction(Direction::Vertical)
		.constraints(
			[
				Constraint::Percentage((100 - percent_y) / 2),
				Constraint::Percentage(percent_y),
				Constraint::Percentage((100 - percent_y) / 2),
			]
			.as_ref(),
		)
		.split(r);

	let horizontal = Layout::default()
		.direction(Direction::Horizontal)
		.constraints(
			[
				Constraint::Percentage((100 - percent_x) / 2),
				Constraint::Percentage(percent_x),
				Constraint::Percentage((100 - percent_x) / 2),
			]
			.as_ref(),
		)
		.split(popup_layout[1]);

	horizontal[1]
}

fn teardown_terminal() -> Result<()> {
	disable_raw_mode()?;
	execute!(stdout(), LeaveAlternateScreen)?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_next_theme_suggestion_cycles() {
		let themes = vec![
			"cute_animals".to_string(),
			"funny_pets".to_string(),
			"seasonal_content".to_string(),
		];
		assert_eq!(next_theme_suggestion(&themes, "cute_animals", true), "funny_pets");
		assert_eq!(next_theme_suggestion(&themes, "seasonal_content", true), "cute_animals");
		assert_eq!(next_theme_suggestion(&themes, "cute_animals", false), "seasonal_content");
		// Free-typed themes snap back to the first suggestion.
		assert_eq!(next_theme_suggestion(&themes, "space_cats", true), "cute_animals");
		assert_eq!(next_theme_suggestion(&[], "anything", true), "anything");
	}

	#[test]
	fn test_fmt_helpers_handle_missing_values() {
		assert_eq!(fmt_count(Some(42)), "42");
		assert_eq!(fmt_count(None), "–");
		assert_eq!(fmt_rate(Some(93.25)), "93.2%");
		assert_eq!(fmt_rate(None), "–");
		assert_eq!(fmt_last_updated(None), "never");
	}
}
