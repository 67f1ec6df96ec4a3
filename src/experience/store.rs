use crate::error::{MatchmeterError, Result};
use crate::types::hope::{DailyHopeExperience, HopeEvent};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const EXPERIENCES_FILE: &str = "experiences.jsonl";
pub const EVENTS_FILE: &str = "events.jsonl";

/// Append-only persistence for hope observations.
pub trait ExperienceStore {
    fn append_experience(&mut self, experience: &DailyHopeExperience) -> Result<()>;
    fn append_event(&mut self, event: &HopeEvent) -> Result<()>;
    fn experiences_for_user(&self, user_id: &str) -> Result<Vec<DailyHopeExperience>>;
    fn events_for_user(&self, user_id: &str) -> Result<Vec<HopeEvent>>;
}

#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    experiences: Vec<DailyHopeExperience>,
    events: Vec<HopeEvent>,
}

#[cfg(test)]
impl ExperienceStore for MemoryStore {
    fn append_experience(&mut self, experience: &DailyHopeExperience) -> Result<()> {
        self.experiences.push(experience.clone());
        Ok(())
    }

    fn append_event(&mut self, event: &HopeEvent) -> Result<()> {
        self.events.push(event.clone());
        Ok(())
    }

    fn experiences_for_user(&self, user_id: &str) -> Result<Vec<DailyHopeExperience>> {
        Ok(self
            .experiences
            .iter()
            .filter(|experience| experience.user_id == user_id)
            .cloned()
            .collect())
    }

    fn events_for_user(&self, user_id: &str) -> Result<Vec<HopeEvent>> {
        Ok(self
            .events
            .iter()
            .filter(|event| event.user_id == user_id)
            .cloned()
            .collect())
    }
}

/// One JSON record per line, in `experiences.jsonl` and `events.jsonl`.
#[derive(Debug, Clone)]
pub struct JsonlStore {
    dir: PathBuf,
}

impl JsonlStore {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    fn append<T: Serialize>(&self, file_name: &str, record: &T) -> Result<()> {
        std::fs::create_dir_all(&self.dir).map_err(MatchmeterError::Io)?;
        let path = self.dir.join(file_name);
        let line = serde_json::to_string(record)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(MatchmeterError::Io)?;
        writeln!(file, "{line}").map_err(MatchmeterError::Io)?;
        file.flush().map_err(MatchmeterError::Io)?;
        debug!(path = %path.display(), "appended record");
        Ok(())
    }

    fn read_all<T: DeserializeOwned>(&self, file_name: &str) -> Result<Vec<T>> {
        let path = self.dir.join(file_name);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => return Err(MatchmeterError::Io(error)),
        };

        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                serde_json::from_str(line).map_err(|e| {
                    MatchmeterError::SnapshotParse(format!(
                        "{}:{}: {}",
                        path.display(),
                        index + 1,
                        e
                    ))
                })
            })
            .collect()
    }
}

impl ExperienceStore for JsonlStore {
    fn append_experience(&mut self, experience: &DailyHopeExperience) -> Result<()> {
        self.append(EXPERIENCES_FILE, experience)
    }

    fn append_event(&mut self, event: &HopeEvent) -> Result<()> {
        self.append(EVENTS_FILE, event)
    }

    fn experiences_for_user(&self, user_id: &str) -> Result<Vec<DailyHopeExperience>> {
        Ok(self
            .read_all::<DailyHopeExperience>(EXPERIENCES_FILE)?
            .into_iter()
            .filter(|experience| experience.user_id == user_id)
            .collect())
    }

    fn events_for_user(&self, user_id: &str) -> Result<Vec<HopeEvent>> {
        Ok(self
            .read_all::<HopeEvent>(EVENTS_FILE)?
            .into_iter()
            .filter(|event| event.user_id == user_id)
            .collect())
    }
}
