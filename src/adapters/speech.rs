//! Speech collaborator adapters.
//!
//! Probes for a local CLI speech engine once at startup with graceful
//! degradation:
//! - `TAGLINE_SPEECH_BIN` env override wins if it points at a binary
//! - otherwise espeak-ng, then espeak, then the macOS `say` command
//! - if none is present, a no-op adapter is selected and a warning logged

use crate::domain::ports::Speech;
use crate::utils::error::{Result, TaglineError};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::{info, warn};

/// Speaks through a local engine binary, one synchronous invocation per text.
pub struct CommandSpeech {
    bin: PathBuf,
    name: String,
}

impl CommandSpeech {
    pub fn detect() -> Option<Self> {
        let bin = get_from_env_or_path("TAGLINE_SPEECH_BIN", "espeak-ng")
            .or_else(|| get_from_path("espeak"))
            .or_else(|| get_from_path("say"))?;
        let name = bin
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| bin.display().to_string());
        Some(Self { bin, name })
    }
}

impl Speech for CommandSpeech {
    fn engine_name(&self) -> &str {
        &self.name
    }

    fn speak(&self, text: &str) -> Result<()> {
        let status = Command::new(&self.bin)
            .arg(text)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| TaglineError::SpeechError {
                reason: format!("failed to launch {}: {}", self.name, e),
            })?;

        if !status.success() {
            return Err(TaglineError::SpeechError {
                reason: format!("{} exited with status {}", self.name, status),
            });
        }
        Ok(())
    }
}

/// Selected when no engine is available; speaking does nothing.
pub struct NullSpeech;

impl Speech for NullSpeech {
    fn engine_name(&self) -> &str {
        "null"
    }

    fn speak(&self, _text: &str) -> Result<()> {
        Ok(())
    }
}

/// Probes for an engine once; falls back to the no-op adapter with a warning.
pub fn detect() -> Box<dyn Speech> {
    match CommandSpeech::detect() {
        Some(engine) => {
            info!("Speech engine found: {}", engine.engine_name());
            Box::new(engine)
        }
        None => {
            warn!("No speech engine found on PATH; skipping text-to-speech");
            Box::new(NullSpeech)
        }
    }
}

fn get_from_env_or_path(env_key: &str, bin_name: &str) -> Option<PathBuf> {
    if let Ok(value) = std::env::var(env_key) {
        let path = PathBuf::from(value);
        if path.is_file() {
            return Some(path);
        }
    }
    get_from_path(bin_name)
}

fn get_from_path(bin_name: &str) -> Option<PathBuf> {
    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths)
        .map(|dir| dir.join(bin_name))
        .find(|candidate| candidate.is_file())
}
