//! Transcoding and section splitting via ffmpeg

use super::command::ToolCommand;
use super::discard_partial;
use super::traits::Transcoder;
use crate::error::ToolError;
use std::ffi::OsString;
use std::path::Path;

/// Fixed quality parameters for the master audio file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioSettings {
    /// Output sample rate in Hz
    pub sample_rate: u32,
    /// Output channel count
    pub channels: u8,
    /// Target bitrate as understood by ffmpeg (e.g. "192k")
    pub bitrate: String,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            sample_rate: 44_100,
            channels: 2,
            bitrate: "192k".to_string(),
        }
    }
}

/// ffmpeg-backed transcoder and splitter
pub struct Ffmpeg {
    command: ToolCommand,
    settings: AudioSettings,
}

impl Ffmpeg {
    pub fn new(command: ToolCommand) -> Self {
        Self {
            command,
            settings: AudioSettings::default(),
        }
    }

    /// Find the binary on PATH
    pub fn locate(name: &str) -> Result<Self, ToolError> {
        ToolCommand::locate(name).map(Self::new)
    }

    /// Override the master audio quality
    pub fn with_settings(mut self, settings: AudioSettings) -> Self {
        self.settings = settings;
        self
    }

    fn run_into(&self, args: Vec<OsString>, dest: &Path) -> Result<(), ToolError> {
        if let Err(e) = self.command.run(args) {
            discard_partial(dest);
            return Err(e);
        }
        Ok(())
    }
}

pub(crate) fn transcode_args(settings: &AudioSettings, src: &Path, dest: &Path) -> Vec<OsString> {
    vec![
        "-i".into(),
        src.as_os_str().to_owned(),
        "-loglevel".into(),
        "panic".into(),
        "-y".into(),
        "-vn".into(),
        "-ar".into(),
        settings.sample_rate.to_string().into(),
        "-ac".into(),
        settings.channels.to_string().into(),
        "-ab".into(),
        settings.bitrate.as_str().into(),
        "-id3v2_version".into(),
        "4".into(),
        "-f".into(),
        "mp3".into(),
        dest.as_os_str().to_owned(),
    ]
}

pub(crate) fn split_args(src: &Path, start: &str, end: Option<&str>, dest: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "-i".into(),
        src.as_os_str().to_owned(),
        "-y".into(),
        "-acodec".into(),
        "copy".into(),
        "-id3v2_version".into(),
        "4".into(),
        "-ss".into(),
        start.into(),
    ];
    if let Some(end) = end {
        args.push("-to".into());
        args.push(end.into());
    }
    args.push(dest.as_os_str().to_owned());
    args
}

impl Transcoder for Ffmpeg {
    fn transcode(&self, src: &Path, dest: &Path) -> Result<(), ToolError> {
        self.run_into(transcode_args(&self.settings, src, dest), dest)
    }

    fn split(
        &self,
        src: &Path,
        start: &str,
        end: Option<&str>,
        dest: &Path,
    ) -> Result<(), ToolError> {
        self.run_into(split_args(src, start, end, dest), dest)
    }
}
