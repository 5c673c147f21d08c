use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::app::{App, Message, Model, update};
use crate::tasks::TaskListController;

/// Idle poll interval; short enough for toasts to expire on time.
const IDLE_POLL_MS: u64 = 250;

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization or the event loop
    /// encounters an I/O failure.
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal - tasklist requires an interactive terminal")?;
        let size = terminal.size()?;

        let controller =
            TaskListController::new().with_tasks(std::mem::take(&mut self.initial_tasks));
        let mut model = Model::new(controller, (size.width, size.height));
        model.light_theme = self.light_theme;
        model
            .config_global_path
            .clone_from(&self.config_global_path);
        model.config_local_path.clone_from(&self.config_local_path);
        tracing::debug!(
            tasks = model.tasks.len(),
            width = size.width,
            height = size.height,
            "session started"
        );

        let result = self
            .enable_capture()
            .and_then(|()| Self::event_loop(&mut terminal, &mut model));

        // Restore terminal
        self.disable_capture();
        ratatui::restore();

        result
    }

    fn enable_capture(&self) -> Result<()> {
        execute!(stdout(), EnableBracketedPaste)?;
        if self.mouse_enabled {
            execute!(stdout(), EnableMouseCapture)?;
        }
        Ok(())
    }

    fn disable_capture(&self) {
        if self.mouse_enabled {
            let _ = execute!(stdout(), DisableMouseCapture);
        }
        let _ = execute!(stdout(), DisableBracketedPaste);
    }

    fn apply(model: &mut Model, msg: Message, frame_idx: u64) {
        crate::perf::log_event("event.message", format!("frame={frame_idx} msg={msg:?}"));
        let _timer = crate::perf::time_update(msg.kind());
        *model = update(std::mem::take(model), msg);
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut frame_idx: u64 = 0;
        let mut needs_render = true;

        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            let poll_ms = if needs_render { 0 } else { IDLE_POLL_MS };
            if event::poll(Duration::from_millis(poll_ms))? {
                if let Some(msg) = Self::handle_event(&event::read()?, model) {
                    Self::apply(model, msg, frame_idx);
                    needs_render = true;
                }

                // Coalesce key repeat bursts into a single render.
                let mut drained = 0_u32;
                while event::poll(Duration::from_millis(0))? {
                    if let Some(msg) = Self::handle_event(&event::read()?, model) {
                        drained += 1;
                        Self::apply(model, msg, frame_idx);
                        needs_render = true;
                    }
                }
                if drained > 0 {
                    crate::perf::log_event(
                        "event.drain",
                        format!("frame={frame_idx} drained={drained}"),
                    );
                }
            }

            if needs_render {
                frame_idx += 1;
                let draw_start = Instant::now();
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                crate::perf::log_event(
                    "frame.draw",
                    format!(
                        "frame={} draw_ms={:.3} tasks={} offset={}",
                        frame_idx,
                        draw_start.elapsed().as_secs_f64() * 1000.0,
                        model.tasks.len(),
                        model.list_scroll_offset
                    ),
                );
                needs_render = false;
            }

            if model.should_quit {
                tracing::debug!(tasks = model.tasks.len(), "session ended");
                break;
            }
        }
        Ok(())
    }
}
