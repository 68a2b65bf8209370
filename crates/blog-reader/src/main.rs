//! Blog Reader - Headless Shell
//!
//! Loads the corpus, then reads commands from stdin and prints the page
//! state together with whatever the live regions announce. Lane clears are
//! driven by a timer task on the same executor as the input loop.

mod commands;

use std::io::{self, Write};

use anyhow::Context;
use blog_a11y::{A11yError, Announcer, LaneUpdate, LiveRegionConfig, LiveRegionSink, Politeness};
use blog_core::{BlogConfig, BlogSession, MockPostSource, PostStore};
use smol::io::{AsyncBufReadExt, BufReader};
use smol::stream::StreamExt;
use smol::{LocalExecutor, Task, Unblock};
use tracing_subscriber::EnvFilter;

use commands::{execute, render_list, Command, HELP};

/// Prints live-region text as a screen reader would speak it
struct ConsoleRegion {
    polite: LiveRegionConfig,
    assertive: LiveRegionConfig,
}

impl ConsoleRegion {
    fn new() -> Self {
        Self {
            polite: LiveRegionConfig::for_lane(Politeness::Polite),
            assertive: LiveRegionConfig::for_lane(Politeness::Assertive),
        }
    }

    fn region(&self, politeness: Politeness) -> &LiveRegionConfig {
        match politeness {
            Politeness::Polite => &self.polite,
            Politeness::Assertive => &self.assertive,
        }
    }
}

/// One console line for a spoken update, tagged with its region's ARIA attributes
fn render_update(region: &LiveRegionConfig, update: &LaneUpdate) -> String {
    let attrs: Vec<String> = region
        .attributes()
        .into_iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect();
    format!("  [{}] {}", attrs.join(" "), update.text)
}

impl LiveRegionSink for ConsoleRegion {
    fn update(&self, update: &LaneUpdate) -> Result<(), A11yError> {
        if update.is_clear() {
            return Ok(());
        }
        let line = render_update(self.region(update.politeness), update);
        writeln!(io::stdout().lock(), "{line}").map_err(|e| A11yError::SinkFailed(e.to_string()))
    }

    fn name(&self) -> &'static str {
        "console"
    }
}

fn spawn_timers<'a>(ex: &LocalExecutor<'a>, announcer: &Announcer) -> Task<()> {
    let announcer = announcer.clone();
    ex.spawn(async move { announcer.run_timers().await })
}

async fn shell(ex: &LocalExecutor<'_>, config: BlogConfig, announcer: Announcer) -> anyhow::Result<()> {
    let mut store = PostStore::new(config.excerpt_len);
    println!("Loading posts...");
    store.load(&MockPostSource::new(config.load_delay())).await?;

    let mut session = BlogSession::new(config, announcer.clone(), store)?;
    println!("{}", render_list(&session));

    let mut timers = spawn_timers(ex, &announcer);
    let mut lines = BufReader::new(Unblock::new(io::stdin())).lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next().await else {
            break;
        };
        let line = line?;

        let Some(command) = Command::parse(&line) else {
            if !line.trim().is_empty() {
                println!("Unknown command. {HELP}");
            }
            continue;
        };
        if command == Command::Quit {
            break;
        }

        match execute(&mut session, command) {
            Ok(out) => println!("{out}"),
            Err(e) => println!("Error: {e}"),
        }

        // The driver exits once no clear is pending
        if timers.is_finished() {
            timers = spawn_timers(ex, &announcer);
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path).with_context(|| format!("reading config {path}"))?;
            BlogConfig::from_json(&json)?
        }
        None => BlogConfig::default(),
    };

    tracing::info!("Starting blog reader...");

    let announcer = Announcer::new(config.announcer_config());
    announcer.subscribe(ConsoleRegion::new());

    let ex = LocalExecutor::new();
    smol::block_on(ex.run(shell(&ex, config, announcer)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_tagged_with_region_attributes() {
        let console = ConsoleRegion::new();
        let update = LaneUpdate {
            politeness: Politeness::Assertive,
            text: "Form has 1 error. Please correct and try again.".into(),
        };
        let line = render_update(console.region(update.politeness), &update);
        assert_eq!(
            line,
            "  [aria-live=assertive aria-atomic=true role=alert] Form has 1 error. Please correct and try again."
        );
    }

    #[test]
    fn test_polite_lane_uses_status_region() {
        let console = ConsoleRegion::new();
        let line = render_update(
            console.region(Politeness::Polite),
            &LaneUpdate { politeness: Politeness::Polite, text: "Moved to page 2".into() },
        );
        assert!(line.contains("role=status"));
        assert!(line.ends_with("Moved to page 2"));
    }

    #[test]
    fn test_timer_task_clears_lane_on_shell_executor() {
        use std::time::Duration;

        use blog_a11y::{AnnouncerConfig, RecordingSink};

        let announcer = Announcer::new(AnnouncerConfig {
            clear_after: Duration::from_millis(20),
            history_limit: 10,
        });
        let sink = RecordingSink::new();
        announcer.subscribe(sink.clone());

        let ex = LocalExecutor::new();
        smol::block_on(ex.run(async {
            announcer.polite("Viewing post: Focus order");
            spawn_timers(&ex, &announcer).await;
        }));

        assert_eq!(announcer.text(Politeness::Polite), "");
        assert_eq!(sink.lane(Politeness::Polite), vec!["Viewing post: Focus order".to_string(), String::new()]);
    }
}
