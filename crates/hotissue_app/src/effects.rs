use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use app_logging::{app_info, app_warn};
use chrono::Local;
use hotissue_core::{CrawlOutcome, Effect, LoadError, Msg, Post, StatsSummary};
use hotissue_engine::{
    parse_crawled_at, ApiCommand, ApiEvent, ApiHandle, ApiSettings, PostRecord, StaticPageWriter,
};

/// Executes effects against the IO worker and bridges its completion events
/// back into the message channel.
pub struct EffectRunner {
    commands: mpsc::Sender<ApiCommand>,
    writer: StaticPageWriter,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(settings: ApiSettings, export_dir: PathBuf, msg_tx: mpsc::Sender<Msg>) -> Self {
        let handle = ApiHandle::new(settings);
        let commands = handle.commands();
        spawn_event_bridge(handle, msg_tx.clone());
        Self {
            commands,
            writer: StaticPageWriter::new(export_dir),
            msg_tx,
        }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadPosts { limit } => {
                    app_info!("loading posts (limit {limit})");
                    let _ = self.commands.send(ApiCommand::FetchPosts { limit });
                }
                Effect::LoadStats => {
                    let _ = self.commands.send(ApiCommand::FetchStats);
                }
                Effect::TriggerCrawl => {
                    app_info!("triggering backend crawl");
                    let _ = self.commands.send(ApiCommand::TriggerCrawl);
                }
                Effect::WriteExport { html } => {
                    let result = match self.writer.write(&html) {
                        Ok(path) => {
                            app_info!("static page written to {}", path.display());
                            Ok(path.display().to_string())
                        }
                        Err(err) => {
                            app_warn!("static page export failed: {err}");
                            Err(LoadError::new(err.to_string()))
                        }
                    };
                    let _ = self.msg_tx.send(Msg::ExportFinished(result));
                }
                Effect::OpenUrl { url } => {
                    app_info!("opening {url}");
                    if let Err(err) = open::that(&url) {
                        app_warn!("could not open browser: {err}");
                    }
                }
            }
        }
    }
}

/// Polls the worker and forwards completions as messages; exits when the
/// main loop has dropped its receiver.
fn spawn_event_bridge(handle: ApiHandle, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || loop {
        if let Some(event) = handle.try_recv() {
            if msg_tx.send(map_event(event)).is_err() {
                break;
            }
        } else {
            thread::sleep(Duration::from_millis(20));
        }
    });
}

fn map_event(event: ApiEvent) -> Msg {
    match event {
        ApiEvent::PostsFetched(result) => {
            let fetched_at = Local::now().format("%Y-%m-%d %H:%M").to_string();
            let result = match result {
                Ok(records) => Ok(records.into_iter().map(map_post).collect()),
                Err(err) => {
                    app_warn!("posts fetch failed: {err}");
                    Err(LoadError::new(err.to_string()))
                }
            };
            Msg::PostsLoaded { result, fetched_at }
        }
        ApiEvent::StatsFetched(result) => Msg::StatsLoaded(match result {
            Ok(stats) => Ok(StatsSummary {
                total_posts: stats.total_posts,
                by_site: stats.by_site,
            }),
            Err(err) => {
                app_warn!("stats fetch failed: {err}");
                Err(LoadError::new(err.to_string()))
            }
        }),
        ApiEvent::CrawlCompleted(result) => Msg::CrawlFinished(match result {
            Ok(body) => Ok(CrawlOutcome {
                success: body.success,
                message: body.message,
            }),
            Err(err) => {
                app_warn!("crawl request failed: {err}");
                Err(LoadError::new(err.to_string()))
            }
        }),
    }
}

fn map_post(record: PostRecord) -> Post {
    let crawled_at = record.crawled_at.as_deref().and_then(parse_crawled_at);
    Post {
        site: record.site,
        title: record.title,
        url: record.url,
        category: record.category,
        author: record.author,
        views: record.views,
        likes: record.likes,
        comments: record.comments,
        crawled_at,
    }
}
