use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Replay speed preset: one delay between explored cells, another between
/// path cells.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Speed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl Speed {
    pub const ALL: [Speed; 3] = [Speed::Slow, Speed::Medium, Speed::Fast];

    pub const fn id(self) -> &'static str {
        match self {
            Speed::Slow => "slow",
            Speed::Medium => "medium",
            Speed::Fast => "fast",
        }
    }

    /// `(exploration, path)` delays in milliseconds.
    pub const fn delays_ms(self) -> (u64, u64) {
        match self {
            Speed::Slow => (50, 100),
            Speed::Medium => (10, 50),
            Speed::Fast => (2, 10),
        }
    }

    pub const fn exploration_delay(self) -> Duration {
        Duration::from_millis(self.delays_ms().0)
    }

    pub const fn path_delay(self) -> Duration {
        Duration::from_millis(self.delays_ms().1)
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.id())
    }
}

/// Error returned when parsing an unknown speed name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown speed {0:?} (expected slow, medium or fast)")]
pub struct UnknownSpeed(pub String);

impl FromStr for Speed {
    type Err = UnknownSpeed;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "slow" => Ok(Speed::Slow),
            "medium" => Ok(Speed::Medium),
            "fast" => Ok(Speed::Fast),
            _ => Err(UnknownSpeed(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets() {
        assert_eq!(Speed::Slow.delays_ms(), (50, 100));
        assert_eq!(Speed::Medium.delays_ms(), (10, 50));
        assert_eq!(Speed::Fast.delays_ms(), (2, 10));
        assert_eq!(Speed::default(), Speed::Medium);
        assert_eq!(Speed::Fast.path_delay(), Duration::from_millis(10));
    }

    #[test]
    fn parse_and_display() {
        for s in Speed::ALL {
            assert_eq!(s.id().parse::<Speed>(), Ok(s));
            assert_eq!(s.to_string(), s.id());
        }
        assert_eq!("FAST".parse::<Speed>(), Ok(Speed::Fast));
        assert!("ludicrous".parse::<Speed>().is_err());
    }

    #[test]
    fn unknown_speed_is_a_std_error() {
        let err: Box<dyn std::error::Error> = Box::new("warp".parse::<Speed>().unwrap_err());
        assert_eq!(err.to_string(), r#"unknown speed "warp" (expected slow, medium or fast)"#);
    }
}
