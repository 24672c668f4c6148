//! Transfer progress on stderr, hidden when output is piped or `--quiet`.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::ui;

const SIZED: &str = "{msg} {wide_bar:.cyan/blue} {bytes}/{total_bytes} ({eta})";
const NARROW: &str = "{msg} {bar:20.cyan/blue} {percent}%";
const UNSIZED: &str = "{spinner:.cyan} {msg} {bytes} ({bytes_per_sec})";

pub struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    /// Byte bar when the server sent a length, otherwise a ticking counter.
    #[must_use]
    pub fn download(total: Option<u64>, message: &str) -> Self {
        let prefs = ui::prefs();
        if !prefs.progress {
            return Self { bar: None };
        }

        let bar = match total {
            Some(total) => {
                let template = match prefs.term_width {
                    Some(width) if width < 80 => NARROW,
                    _ => SIZED,
                };
                let bar = ProgressBar::new(total);
                bar.set_style(
                    ProgressStyle::with_template(template)
                        .unwrap_or_else(|_| ProgressStyle::default_bar()),
                );
                bar
            }
            None => {
                let bar = ProgressBar::new_spinner();
                bar.enable_steady_tick(Duration::from_millis(120));
                bar.set_style(
                    ProgressStyle::with_template(UNSIZED)
                        .unwrap_or_else(|_| ProgressStyle::default_spinner()),
                );
                bar
            }
        };
        bar.set_message(message.to_string());
        Self { bar: Some(bar) }
    }

    pub fn set_position(&self, position: u64) {
        if let Some(bar) = &self.bar {
            bar.set_position(position);
        }
    }

    pub fn finish_clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }

    /// Leave the bar on screen with a failure message.
    pub fn finish_err(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.abandon_with_message(message.to_string());
        }
    }
}
