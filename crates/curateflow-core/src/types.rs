use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;

pub const MIN_DURATION_MINUTES: u32 = 10;
pub const MAX_DURATION_MINUTES: u32 = 180;
pub const DURATION_STEP_MINUTES: u32 = 5;
pub const DEFAULT_DURATION_MINUTES: u32 = 45;

/// Requested technical density of the curated content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DepthLevel {
    #[serde(rename = "Explain Like I'm 5")]
    Eli5,
    #[default]
    #[serde(rename = "Beginner")]
    Beginner,
    #[serde(rename = "Intermediate")]
    Intermediate,
    #[serde(rename = "Advanced")]
    Advanced,
    #[serde(rename = "Academic/Technical")]
    Academic,
}

impl DepthLevel {
    pub const ALL: [DepthLevel; 5] = [
        DepthLevel::Eli5,
        DepthLevel::Beginner,
        DepthLevel::Intermediate,
        DepthLevel::Advanced,
        DepthLevel::Academic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DepthLevel::Eli5 => "Explain Like I'm 5",
            DepthLevel::Beginner => "Beginner",
            DepthLevel::Intermediate => "Intermediate",
            DepthLevel::Advanced => "Advanced",
            DepthLevel::Academic => "Academic/Technical",
        }
    }
}

/// Requested tone and pacing of the curated content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VibeType {
    #[default]
    #[serde(rename = "Fast-Paced Educational")]
    Educational,
    #[serde(rename = "High Energy")]
    Energetic,
    #[serde(rename = "Relaxing/ASMR")]
    Relaxing,
    #[serde(rename = "Deep Dive")]
    DeepDive,
    #[serde(rename = "Workshop/Tutorial")]
    Workshop,
}

impl VibeType {
    pub const ALL: [VibeType; 5] = [
        VibeType::Educational,
        VibeType::Energetic,
        VibeType::Relaxing,
        VibeType::DeepDive,
        VibeType::Workshop,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VibeType::Educational => "Fast-Paced Educational",
            VibeType::Energetic => "High Energy",
            VibeType::Relaxing => "Relaxing/ASMR",
            VibeType::DeepDive => "Deep Dive",
            VibeType::Workshop => "Workshop/Tutorial",
        }
    }
}

impl fmt::Display for DepthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for VibeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DepthLevel {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DepthLevel::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| OptionsError::UnknownLabel {
                kind: "depth level",
                value: s.to_string(),
            })
    }
}

impl FromStr for VibeType {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VibeType::ALL
            .into_iter()
            .find(|v| v.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| OptionsError::UnknownLabel {
                kind: "vibe",
                value: s.to_string(),
            })
    }
}

/// Preference controls for a single curation request.
///
/// Fields are private so a value always holds a duration inside the
/// supported range; build one with [`CurateOptions::new`] or take the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurateOptions {
    duration_minutes: u32,
    depth: DepthLevel,
    vibe: VibeType,
    is_course_mode: bool,
}

impl CurateOptions {
    pub fn new(
        duration_minutes: u32,
        depth: DepthLevel,
        vibe: VibeType,
        is_course_mode: bool,
    ) -> Result<Self, OptionsError> {
        validate_duration(duration_minutes)?;
        Ok(Self {
            duration_minutes,
            depth,
            vibe,
            is_course_mode,
        })
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn depth(&self) -> DepthLevel {
        self.depth
    }

    pub fn vibe(&self) -> VibeType {
        self.vibe
    }

    pub fn is_course_mode(&self) -> bool {
        self.is_course_mode
    }
}

impl Default for CurateOptions {
    fn default() -> Self {
        Self {
            duration_minutes: DEFAULT_DURATION_MINUTES,
            depth: DepthLevel::default(),
            vibe: VibeType::default(),
            is_course_mode: false,
        }
    }
}

/// Check a duration against the slider bounds (10..=180, step 5)
pub fn validate_duration(minutes: u32) -> Result<(), OptionsError> {
    if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&minutes) {
        return Err(OptionsError::DurationOutOfRange {
            got: minutes,
            min: MIN_DURATION_MINUTES,
            max: MAX_DURATION_MINUTES,
        });
    }
    if minutes % DURATION_STEP_MINUTES != 0 {
        return Err(OptionsError::DurationStep {
            got: minutes,
            step: DURATION_STEP_MINUTES,
        });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistResponse {
    pub playlist_name: String,
    /// Advisory only, e.g. "45 mins"
    pub total_duration: String,
    pub description: String,
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    pub title: String,
    pub channel_name: String,
    /// Human readable, e.g. "12:30"
    pub duration: String,
    pub description: String,
    pub reasoning: String,
}
