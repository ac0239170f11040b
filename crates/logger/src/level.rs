//! Severity levels and their fixed presentation

use std::fmt;

use termcolor::Color;

/// Severity of a log call.
///
/// Levels are purely cosmetic: every enabled call emits regardless of level,
/// and levels are never compared against a threshold.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Level {
    /// Fine-grained tracing, such as constructor and destructor calls
    Trace,
    /// Developer diagnostics
    Debug,
    /// Normal operational messages
    Info,
    /// Something unexpected that the program recovered from
    Warning,
    /// An operation failed
    Error,
    /// The program cannot continue as intended
    Critical,
}

impl Level {
    /// Every level, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warning,
        Self::Error,
        Self::Critical,
    ];

    /// Foreground color the level's line is printed in.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Trace => Color::Cyan,
            Self::Debug => Color::Magenta,
            Self::Info => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error | Self::Critical => Color::Red,
        }
    }

    /// Raw ANSI escape written for [`color`](Self::color).
    #[must_use]
    pub const fn escape(self) -> &'static str {
        match self {
            Self::Trace => "\x1b[36m",
            Self::Debug => "\x1b[35m",
            Self::Info => "\x1b[32m",
            Self::Warning => "\x1b[33m",
            Self::Error | Self::Critical => "\x1b[31m",
        }
    }

    /// Bracketed label, e.g. `[INFO]`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Trace => "[TRACE]",
            Self::Debug => "[DEBUG]",
            Self::Info => "[INFO]",
            Self::Warning => "[WARNING]",
            Self::Error => "[ERROR]",
            Self::Critical => "[CRITICAL]",
        }
    }

    /// Icon glyph printed ahead of the label.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Trace => "🩺",
            Self::Debug => "🚧",
            Self::Info => "ℹ️",
            Self::Warning => "⚠️",
            Self::Error => "❗",
            Self::Critical => "🚨",
        }
    }

    /// Upper-case name without decoration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_wrap_names_in_brackets() {
        for level in Level::ALL {
            assert_eq!(level.label(), format!("[{}]", level.as_str()));
        }
    }

    #[test]
    fn error_and_critical_share_red() {
        assert_eq!(Level::Error.color(), Color::Red);
        assert_eq!(Level::Critical.color(), Color::Red);
        assert_eq!(Level::Error.escape(), Level::Critical.escape());
        assert_ne!(Level::Error.label(), Level::Critical.label());
    }

    #[test]
    fn display_uses_plain_name() {
        assert_eq!(Level::Warning.to_string(), "WARNING");
        assert_eq!(format!("{}", Level::Trace), "TRACE");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_variant_names() {
        let json = serde_json::to_string(&Level::Critical).unwrap();
        assert_eq!(json, "\"Critical\"");
        let back: Level = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Level::Critical);
    }
}
