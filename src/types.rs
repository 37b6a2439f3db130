/// Score snapshot types shared across the application
///
/// This module contains the data model of one score snapshot as it arrives
/// from the snapshot provider: games, their statuses and their goals. The
/// timeline pipeline reads these types but never mutates them.
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Length of a regulation period (and of a playoff overtime period)
pub const REGULATION_PERIOD_MINUTES: u32 = 20;

/// Length of a regular season overtime period
pub const OVERTIME_PERIOD_MINUTES: u32 = 5;

/// Number of regulation periods
pub const REGULATION_PERIODS: u32 = 3;

/// Period ordinal assigned to the first overtime
const OVERTIME_ORDINAL: u32 = 4;

/// Period ordinal assigned to the shootout
const SHOOTOUT_ORDINAL: u32 = 5;

/// A game period
///
/// Regulation periods and playoff overtimes are numbered; the regular season
/// overtime and the shootout are labelled "OT" and "SO" in the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Number(u32),
    Overtime,
    Shootout,
}

impl Period {
    /// Rank used to order periods: 1-3 as-is, OT = 4, SO = 5, playoff
    /// overtimes their own number
    pub fn ordinal(&self) -> u32 {
        match self {
            Period::Number(n) => *n,
            Period::Overtime => OVERTIME_ORDINAL,
            Period::Shootout => SHOOTOUT_ORDINAL,
        }
    }

    /// Length of the period in minutes (the shootout has no clock)
    pub fn length_minutes(&self) -> u32 {
        match self {
            Period::Number(_) => REGULATION_PERIOD_MINUTES,
            Period::Overtime => OVERTIME_PERIOD_MINUTES,
            Period::Shootout => 0,
        }
    }

    pub fn is_shootout(&self) -> bool {
        matches!(self, Period::Shootout)
    }

    /// True for the regular season overtime and for playoff overtimes
    pub fn is_overtime(&self) -> bool {
        match self {
            Period::Number(n) => *n > REGULATION_PERIODS,
            Period::Overtime => true,
            Period::Shootout => false,
        }
    }

    /// Parse a feed label ("1", "OT", "SO")
    pub fn from_label(label: &str) -> Option<Period> {
        match label.trim() {
            "OT" => Some(Period::Overtime),
            "SO" => Some(Period::Shootout),
            other => other.parse::<u32>().ok().map(Period::Number),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Number(n) => write!(f, "{}", n),
            Period::Overtime => write!(f, "OT"),
            Period::Shootout => write!(f, "SO"),
        }
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Period::Number(n) => serializer.serialize_u32(*n),
            Period::Overtime => serializer.serialize_str("OT"),
            Period::Shootout => serializer.serialize_str("SO"),
        }
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawPeriod {
            Number(u32),
            Label(String),
        }

        match RawPeriod::deserialize(deserializer)? {
            RawPeriod::Number(n) => Ok(Period::Number(n)),
            RawPeriod::Label(label) => Period::from_label(&label)
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid period: {}", label))),
        }
    }
}

/// Which side of the matchup scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

/// A player credited on a goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scorer {
    pub player: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season_total: Option<u32>,
}

/// A scoring occurrence, with elapsed time into the period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub period: Period,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sec: Option<u32>,
    pub team: String,
    pub scorer: Scorer,
    #[serde(default)]
    pub assists: Vec<Scorer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<String>,
    #[serde(default)]
    pub empty_net: bool,
}

impl Goal {
    /// Elapsed seconds into the period (zero when the feed has no clock)
    pub fn elapsed_seconds(&self) -> u32 {
        self.min.unwrap_or(0) * 60 + self.sec.unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub abbreviation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teams {
    pub away: Team,
    pub home: Team,
}

/// Game state as reported by the feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameState {
    Preview,
    Postponed,
    Live,
    Final,
}

impl GameState {
    pub fn has_started(&self) -> bool {
        matches!(self, GameState::Live | GameState::Final)
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, GameState::Final)
    }

    pub fn is_live(&self) -> bool {
        matches!(self, GameState::Live)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameState::Preview => "Preview",
            GameState::Postponed => "Postponed",
            GameState::Live => "Live",
            GameState::Final => "Final",
        };
        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRemaining {
    pub min: u32,
    pub sec: u32,
    #[serde(default)]
    pub pretty: String,
}

impl TimeRemaining {
    pub fn is_zero(&self) -> bool {
        self.min == 0 && self.sec == 0
    }
}

/// Live progress of a game in progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameProgress {
    pub current_period: u32,
    #[serde(default)]
    pub current_period_ordinal: String,
    pub current_period_time_remaining: TimeRemaining,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatus {
    pub state: GameState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<GameProgress>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameType {
    #[default]
    #[serde(rename = "R")]
    RegularSeason,
    #[serde(rename = "P")]
    Playoff,
}

/// One game of the snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub teams: Teams,
    pub status: GameStatus,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub game_type: GameType,
}

impl Game {
    pub fn is_playoff(&self) -> bool {
        self.game_type == GameType::Playoff
    }

    /// Side of the matchup for a scoring team abbreviation
    pub fn side_of(&self, team: &str) -> Side {
        if team == self.teams.away.abbreviation {
            Side::Away
        } else {
            Side::Home
        }
    }
}

/// One immutable score snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub games: Vec<Game>,
}
