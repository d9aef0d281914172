use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Team {
    #[serde(rename = "USA")]
    Usa,
    #[serde(rename = "EUR")]
    Eur,
}

impl Team {
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim() {
            "USA" => Some(Team::Usa),
            "EUR" => Some(Team::Eur),
            _ => None,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Team::Usa => "USA",
            Team::Eur => "EUR",
        };
        write!(f, "{s}")
    }
}

// The service stores "" for entries without a team.
fn team_or_blank<'de, D>(deserializer: D) -> Result<Option<Team>, D::Error>
where
    D: Deserializer<'de>,
{
    let tag: Option<String> = Option::deserialize(deserializer)?;
    Ok(match tag.as_deref() {
        None | Some("") => None,
        Some(other) => {
            let team = Team::from_tag(other);
            if team.is_none() {
                tracing::warn!(tag = other, "unknown team tag, treating entry as unaffiliated");
            }
            team
        }
    })
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct HoleStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fir: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gir: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub putts: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drive_distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commentary: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HoleResult {
    pub round_number: i32,
    pub hole_number: i32,
    pub strokes: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<HoleStats>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TournamentEntry {
    pub id: i64,
    pub display_name: String,
    #[serde(default)]
    pub is_human: bool,
    #[serde(default, deserialize_with = "team_or_blank")]
    pub team: Option<Team>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub handedness: Option<String>,
    #[serde(default)]
    pub avatar_color: Option<String>,
    #[serde(default)]
    pub thru_hole: i32,
    /// Missed the cut; shown as "CUT" in place of a position.
    #[serde(default)]
    pub cut: bool,
    #[serde(default)]
    pub position: Option<i32>,
    #[serde(default)]
    pub hole_results: Vec<HoleResult>,
}

impl TournamentEntry {
    #[must_use]
    pub fn new(id: i64, display_name: &str) -> Self {
        Self {
            id,
            display_name: display_name.to_string(),
            is_human: false,
            team: None,
            country: None,
            handedness: None,
            avatar_color: None,
            thru_hole: 0,
            cut: false,
            position: None,
            hole_results: Vec::new(),
        }
    }

    /// The recorded result for one hole of one round, if any.
    #[must_use]
    pub fn result_for(&self, round_number: i32, hole_number: i32) -> Option<&HoleResult> {
        self.hole_results
            .iter()
            .find(|r| r.round_number == round_number && r.hole_number == hole_number)
    }

    pub fn results_in(&self, round_filter: Option<i32>) -> impl Iterator<Item = &HoleResult> {
        self.hole_results
            .iter()
            .filter(move |r| round_filter.is_none_or(|round| r.round_number == round))
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        self.display_name.split_whitespace().last().unwrap_or("")
    }
}
