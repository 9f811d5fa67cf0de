use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use env_logger::Target;
use log::LevelFilter;

use crate::common::project_data_dir;

/// `env_logger` setup for the tool embedding the prompts.
#[derive(Default)]
pub struct Logging {
    file_name: Option<PathBuf>,
    debug_mode: bool,
}

impl Logging {
    #[must_use]
    pub fn new() -> Self {
        Self {
            file_name: None,
            debug_mode: false,
        }
    }

    /// Write to `file_name` in the project data directory instead of stderr.
    #[must_use]
    pub fn with_file<P>(mut self, file_name: P) -> Self
    where
        P: Into<PathBuf>,
    {
        self.file_name = Some(file_name.into());
        self
    }

    /// Log at debug level, which includes each prompt's resolved default.
    #[must_use]
    pub fn with_debug_mode(mut self, enable: bool) -> Self {
        self.debug_mode = enable;
        self
    }

    fn level(&self) -> LevelFilter {
        if self.debug_mode {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    pub fn start(&self) -> Result<()> {
        let mut b = env_logger::builder();
        b.filter_level(self.level());

        if let Some(file_name) = &self.file_name {
            let log_file = get_log_file_path(file_name)?;

            let fd = fs::OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&log_file)
                .with_context(|| format!("Unable to open {} for writing", log_file.display()))?;

            b.target(Target::Pipe(Box::new(fd)));
        }

        b.try_init().context("Logger already initialized")?;

        Ok(())
    }
}

fn get_log_file_path(file_name: &Path) -> Result<PathBuf> {
    Ok(project_data_dir()?.join(file_name))
}
