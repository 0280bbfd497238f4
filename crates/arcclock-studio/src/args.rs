use std::str::FromStr;

use clap::{Parser, ValueEnum};

/// Analog clock drawn as three concentric progress rings.
#[derive(Debug, Parser)]
#[command(name = "arcclock", version)]
pub struct Args {
    /// Start from a synthetic time instead of the wall clock, e.g. `11:59:57` or
    /// `23:59:59.500`. Fields are not range-checked; `10:75:00` means 11:15.
    #[arg(long, value_name = "HH:MM:SS[.mmm]")]
    pub time: Option<ClockTime>,

    /// Log filter in env_logger syntax; overrides RUST_LOG.
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,

    /// Window title.
    #[arg(long, default_value = "arcclock")]
    pub title: String,

    /// How frames are paced to the display.
    #[arg(long, value_enum, default_value_t = Pacing::Vsync)]
    pub pacing: Pacing,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum Pacing {
    /// Wait for vertical blank (FIFO).
    Vsync,
    /// Present as soon as possible, falling back to vsync where unsupported.
    Immediate,
}

impl Pacing {
    pub fn present_mode(self) -> wgpu::PresentMode {
        match self {
            Pacing::Vsync => wgpu::PresentMode::AutoVsync,
            Pacing::Immediate => wgpu::PresentMode::AutoNoVsync,
        }
    }
}

/// Clock components as typed on the command line.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ClockTime {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub milliseconds: i64,
}

impl FromStr for ClockTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hms, millis) = match s.split_once('.') {
            Some((hms, ms)) => (hms, Some(ms)),
            None => (s, None),
        };

        let fields: Vec<&str> = hms.split(':').collect();
        let [h, m, sec] = fields.as_slice() else {
            return Err(format!("expected HH:MM:SS[.mmm], got {s:?}"));
        };

        let field = |name: &str, v: &str| {
            v.trim()
                .parse::<i64>()
                .map_err(|e| format!("invalid {name} {v:?}: {e}"))
        };

        Ok(Self {
            hours: field("hours", h)?,
            minutes: field("minutes", m)?,
            seconds: field("seconds", sec)?,
            milliseconds: millis.map(|ms| field("milliseconds", ms)).transpose()?.unwrap_or(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: i64, m: i64, s: i64, ms: i64) -> ClockTime {
        ClockTime { hours: h, minutes: m, seconds: s, milliseconds: ms }
    }

    #[test]
    fn parses_hms() {
        assert_eq!("11:59:57".parse::<ClockTime>(), Ok(t(11, 59, 57, 0)));
    }

    #[test]
    fn parses_millis() {
        assert_eq!("23:59:59.500".parse::<ClockTime>(), Ok(t(23, 59, 59, 500)));
    }

    #[test]
    fn keeps_out_of_range_fields() {
        assert_eq!("10:75:00".parse::<ClockTime>(), Ok(t(10, 75, 0, 0)));
    }

    #[test]
    fn rejects_wrong_shape() {
        assert!("11:59".parse::<ClockTime>().is_err());
        assert!("aa:bb:cc".parse::<ClockTime>().is_err());
    }

    #[test]
    fn cli_accepts_time_flag() {
        let args = Args::try_parse_from(["arcclock", "--time", "11:59:57", "--pacing", "immediate"])
            .expect("valid args");
        assert_eq!(args.time, Some(t(11, 59, 57, 0)));
        assert_eq!(args.pacing, Pacing::Immediate);
        assert_eq!(args.title, "arcclock");
    }
}
