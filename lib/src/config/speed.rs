//! Frame rates of the animation.

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
    time::Duration,
};

/// How fast the animation runs.
///
/// The named speeds are shortcuts for fixed frame rates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Speed {
    /// `slow`, 3 frames per second.
    Slow,
    /// `med`, 10 frames per second.
    Medium,
    /// `fast`, 30 frames per second.
    Fast,
    /// A positive number of frames per second.
    Fps(u32),
}

impl Speed {
    /// Frames per second.
    pub fn fps(self) -> u32 {
        match self {
            Speed::Slow => 3,
            Speed::Medium => 10,
            Speed::Fast => 30,
            Speed::Fps(fps) => fps,
        }
    }

    /// The delay between two frames, `1 / fps` seconds.
    ///
    /// A zero frame rate gives no delay.
    pub fn frame_duration(self) -> Duration {
        match self.fps() {
            0 => Duration::ZERO,
            fps => Duration::from_secs(1) / fps,
        }
    }
}

impl FromStr for Speed {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "slow" => Ok(Speed::Slow),
            "med" => Ok(Speed::Medium),
            "fast" => Ok(Speed::Fast),
            _ => match s.parse::<u32>() {
                Ok(fps) if fps > 0 => Ok(Speed::Fps(fps)),
                _ => Err(format!(
                    "'{}' is not a valid speed, expected slow, med, fast or a positive integer",
                    s
                )),
            },
        }
    }
}

impl Display for Speed {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            Speed::Slow => write!(f, "slow"),
            Speed::Medium => write!(f, "med"),
            Speed::Fast => write!(f, "fast"),
            Speed::Fps(fps) => write!(f, "{}", fps),
        }
    }
}
