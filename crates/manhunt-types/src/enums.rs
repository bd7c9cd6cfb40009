//! Enumerated vocabularies for the simulation.
//!
//! [`LocationKind`] mirrors the category tags produced by the external
//! dataset ETL. [`Stage`], [`Winner`], and [`EndReason`] describe the
//! evader's objective staging and how a game ends.

use serde::{Deserialize, Serialize};

/// Category tag for a location vertex.
///
/// The first seven variants come from the manually curated vocabulary;
/// the remainder are the categories present in the source dataset. Only
/// dataset-sourced categories carry an entry in the loader's score table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocationKind {
    /// Retail store.
    Store,
    /// Restaurant or food vendor.
    Food,
    /// Bank, ATM, or similar.
    FinancialServices,
    /// Garage, gas station, or car dealership.
    AutomobileServices,
    /// Hospital emergency department or urgent care.
    EmergencyServices,
    /// Public park or green space.
    Park,
    /// Primary or secondary school.
    School,
    /// Cemetery or memorial ground.
    Cemetery,
    /// Clinic, hospital, or other health facility.
    Health,
    /// Fire station.
    FireStation,
    /// Police station or precinct.
    PoliceStation,
    /// Landmark or tourist attraction.
    TouristSpot,
}

impl LocationKind {
    /// Return the kebab-case tag used in dataset records.
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::Store => "store",
            Self::Food => "food",
            Self::FinancialServices => "financial-services",
            Self::AutomobileServices => "automobile-services",
            Self::EmergencyServices => "emergency-services",
            Self::Park => "park",
            Self::School => "school",
            Self::Cemetery => "cemetery",
            Self::Health => "health",
            Self::FireStation => "fire-station",
            Self::PoliceStation => "police-station",
            Self::TouristSpot => "tourist-spot",
        }
    }
}

impl core::fmt::Display for LocationKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

impl core::str::FromStr for LocationKind {
    type Err = UnknownKindTag;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "store" => Ok(Self::Store),
            "food" => Ok(Self::Food),
            "financial-services" => Ok(Self::FinancialServices),
            "automobile-services" => Ok(Self::AutomobileServices),
            "emergency-services" => Ok(Self::EmergencyServices),
            "park" => Ok(Self::Park),
            "school" => Ok(Self::School),
            "cemetery" => Ok(Self::Cemetery),
            "health" => Ok(Self::Health),
            "fire-station" => Ok(Self::FireStation),
            "police-station" => Ok(Self::PoliceStation),
            "tourist-spot" => Ok(Self::TouristSpot),
            _ => Err(UnknownKindTag {
                tag: tag.to_owned(),
            }),
        }
    }
}

/// Error returned when a category tag is not in the fixed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown location category tag: {tag}")]
pub struct UnknownKindTag {
    /// The unrecognized tag text.
    pub tag: String,
}

/// Stage of the evader's current objective.
///
/// The evader first heads for a `Mid` waypoint; reaching it promotes the
/// objective to a freshly drawn `End` target. Reaching an `End` target
/// wins the game for the evader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Intermediate waypoint; reaching it triggers retargeting.
    Mid,
    /// Final escape vertex; reaching it ends the game.
    End,
}

/// The winning side of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    /// The pursuer won (capture, timeout, or a boxed-in evader).
    Cop,
    /// The evader reached its end-stage target.
    Robber,
}

impl Winner {
    /// Numeric winner flag: 0 for the cop, 1 for the robber.
    ///
    /// This is the wire value consumed by the external visualization and
    /// statistics collaborators.
    pub const fn flag(self) -> u8 {
        match self {
            Self::Cop => 0,
            Self::Robber => 1,
        }
    }
}

/// The specific terminal condition that ended a game.
///
/// Every way a game can end is a named variant; there is no silent
/// fall-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// The evader reached its end-stage target.
    Escaped,
    /// The pursuer and evader occupied the same vertex.
    Captured,
    /// The evader exhausted its move limit.
    MoveLimit,
    /// The evader's planned path ran out before any other condition fired.
    PathExhausted,
    /// The evader had no safe, connected first hop to offer.
    Cornered,
}

impl EndReason {
    /// The winner implied by this terminal condition.
    pub const fn winner(self) -> Winner {
        match self {
            Self::Escaped => Winner::Robber,
            Self::Captured | Self::MoveLimit | Self::PathExhausted | Self::Cornered => Winner::Cop,
        }
    }
}
