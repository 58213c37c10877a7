//! Terminal event loop
//!
//! Multiplexes terminal input with the refresh schedule: the loop waits for
//! input no longer than the time left until the next tick.

use std::time::Instant;

use anyhow::Context;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use super::refresh::{interval_for, RefreshTask, TimeSource};
use super::WorldClock;
use crate::config_io::ConfigStore;

/// Run the clock window until the user quits
pub fn run(
    terminal: &mut DefaultTerminal,
    app: &mut WorldClock,
    time: &dyn TimeSource,
    store: &mut ConfigStore,
) -> anyhow::Result<()> {
    let mut task = RefreshTask::new(interval_for(app.show_seconds()));

    loop {
        let now = Instant::now();
        if app.take_refresh_request() {
            task.trigger();
        }
        task.set_interval(interval_for(app.show_seconds()), now);
        if task.is_due(now) {
            let interval = app.tick(time, store);
            task.set_interval(interval, now);
            task.schedule_next(now);
        }

        terminal
            .draw(|frame| app.render(frame))
            .context("failed to draw the clock window")?;

        let timeout = task.time_until_due(Instant::now());
        if event::poll(timeout).context("failed to poll terminal events")? {
            match event::read().context("failed to read terminal event")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        if app.should_quit() {
            break;
        }
    }

    // Edits made since the last tick would otherwise be lost
    if let Err(e) = store.save(&app.to_config()) {
        tracing::warn!("Could not save configuration on exit: {:#}", anyhow::Error::new(e));
    }
    tracing::info!("Clock window closed");
    Ok(())
}
