use serde::Serialize;
use std::fmt;

/// The four rows of the paper logbook grid, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CanonicalRow {
    OffDuty,          // 1
    Sleeper,          // 2
    Driving,          // 3
    OnDutyNotDriving, // 4
}

/// Fixed display color of a row.
///
/// `name` is the CSS custom property used by the web front-end
/// (`hsl(var(--status-off))`), `hex`/`rgb` are the concrete values used by
/// the SVG and PDF renderers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorToken {
    pub name: &'static str,
    pub hex: &'static str,
    pub rgb: (f32, f32, f32),
}

const OFF_COLOR: ColorToken = ColorToken {
    name: "status-off",
    hex: "#6b7280",
    rgb: (0.42, 0.45, 0.50),
};
const SLEEPER_COLOR: ColorToken = ColorToken {
    name: "status-sleeper",
    hex: "#8b5cf6",
    rgb: (0.55, 0.36, 0.96),
};
const DRIVING_COLOR: ColorToken = ColorToken {
    name: "status-driving",
    hex: "#2563eb",
    rgb: (0.15, 0.39, 0.92),
};
const ON_DUTY_COLOR: ColorToken = ColorToken {
    name: "status-on-duty",
    hex: "#f59e0b",
    rgb: (0.96, 0.62, 0.04),
};

impl CanonicalRow {
    pub const ALL: [CanonicalRow; 4] = [
        CanonicalRow::OffDuty,
        CanonicalRow::Sleeper,
        CanonicalRow::Driving,
        CanonicalRow::OnDutyNotDriving,
    ];

    /// Visual row index, 0 = top.
    pub fn index(self) -> usize {
        match self {
            CanonicalRow::OffDuty => 0,
            CanonicalRow::Sleeper => 1,
            CanonicalRow::Driving => 2,
            CanonicalRow::OnDutyNotDriving => 3,
        }
    }

    /// Row number as printed on the logbook grid (1-based).
    pub fn number(self) -> usize {
        self.index() + 1
    }

    pub fn label(self) -> &'static str {
        match self {
            CanonicalRow::OffDuty => "OFF DUTY",
            CanonicalRow::Sleeper => "SLEEPER",
            CanonicalRow::Driving => "DRIVING",
            CanonicalRow::OnDutyNotDriving => "ON DUTY (NOT DRIVING)",
        }
    }

    /// Short key used in summaries and serialized hour maps.
    pub fn key(self) -> &'static str {
        match self {
            CanonicalRow::OffDuty => "OFF",
            CanonicalRow::Sleeper => "SLEEPER",
            CanonicalRow::Driving => "DRIVING",
            CanonicalRow::OnDutyNotDriving => "ON DUTY",
        }
    }

    pub fn color(self) -> ColorToken {
        match self {
            CanonicalRow::OffDuty => OFF_COLOR,
            CanonicalRow::Sleeper => SLEEPER_COLOR,
            CanonicalRow::Driving => DRIVING_COLOR,
            CanonicalRow::OnDutyNotDriving => ON_DUTY_COLOR,
        }
    }
}

impl fmt::Display for CanonicalRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
