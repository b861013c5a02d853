//! Builder for creating and configuring Tracker instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::Tracker;
use crate::{calendar::CalendarPolicy, error::Result};

/// File name looked up under the XDG config directory.
const CALENDAR_FILE: &str = "calendar.json";

/// Builder for creating and configuring Tracker instances.
#[derive(Debug, Clone, Default)]
pub struct TrackerBuilder {
    calendar_path: Option<PathBuf>,
    calendar: Option<CalendarPolicy>,
}

impl TrackerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a calendar configuration file.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_CONFIG_HOME/tally/calendar.json` or
    /// `~/.config/tally/calendar.json`, falling back to the built-in
    /// calendar when neither exists.
    pub fn with_calendar_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.calendar_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses an already built calendar policy, ignoring any calendar path.
    pub fn with_calendar(mut self, calendar: CalendarPolicy) -> Self {
        self.calendar = Some(calendar);
        self
    }

    /// Builds the configured tracker instance.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::FileSystem` if an explicit calendar file cannot
    /// be read, `TallyError::Serialization` if it is not valid JSON and
    /// `TallyError::InvalidInput` if its contents fail validation.
    pub fn build(self) -> Result<Tracker> {
        if let Some(calendar) = self.calendar {
            return Ok(Tracker::new(calendar));
        }

        let calendar = match self.calendar_path.or_else(Self::default_calendar_path) {
            Some(path) => CalendarPolicy::from_path(&path)?,
            None => {
                debug!("No calendar file found, using built-in calendar");
                CalendarPolicy::default()
            }
        };
        Ok(Tracker::new(calendar))
    }

    /// Returns the calendar file under the XDG config directory, if one
    /// exists.
    fn default_calendar_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("tally").find_config_file(CALENDAR_FILE)
    }
}
