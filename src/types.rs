//! Data model for the EcoAdvice API
//!
//! Mirrors the wire shapes of the backend: home profiles submitted for
//! analysis, recommendations returned over the advice stream, and the tagged
//! stream message union itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Primary heating system of a home
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatingType {
    Gas,
    Electric,
    HeatPump,
    Oil,
    Solar,
}

/// Current insulation quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsulationLevel {
    Minimal,
    Moderate,
    Good,
    Excellent,
}

/// Glazing of the installed windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowsType {
    Single,
    Double,
    Triple,
}

/// Roof construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoofType {
    Flat,
    Pitched,
    Metal,
    Tile,
}

/// A home's physical and energy profile.
///
/// `id`, `created_at` and `updated_at` are assigned by the server and absent
/// on creation requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HomeProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub size_sqft: u32,
    pub year_built: i32,
    pub heating_type: HeatingType,
    pub insulation_level: InsulationLevel,
    pub windows_type: WindowsType,
    pub roof_type: RoofType,
    pub num_occupants: u32,
    pub monthly_energy_bill: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// How urgent a recommendation is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

/// Which aspect of the home a recommendation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Heating,
    Insulation,
    Windows,
    Appliances,
    Habits,
    Renewable,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Heating => write!(f, "heating"),
            Category::Insulation => write!(f, "insulation"),
            Category::Windows => write!(f, "windows"),
            Category::Appliances => write!(f, "appliances"),
            Category::Habits => write!(f, "habits"),
            Category::Renewable => write!(f, "renewable"),
        }
    }
}

/// One energy-saving recommendation.
///
/// Cost and savings are display strings produced by the backend (e.g.
/// `"$200-500"`), not numbers.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Recommendation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub estimated_cost: String,
    pub estimated_savings: String,
    pub priority: Priority,
    pub category: Category,
}

/// A single message on the advice stream, tagged by its `type` field.
///
/// Unrecognized tags deserialize to [`StreamMessage::Unknown`] so a newer
/// server can add message kinds without breaking older clients.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamMessage {
    /// Stream opened; carries the id of the home being analyzed
    Connected {
        #[serde(default)]
        home_id: Option<String>,
    },
    /// One recommendation produced by the backend
    Recommendation {
        #[serde(default)]
        recommendation: Option<Recommendation>,
    },
    /// All recommendations have been sent
    Complete,
    /// The backend failed; carries a human-readable message
    Error {
        #[serde(default)]
        error: Option<String>,
    },
    #[serde(other)]
    Unknown,
}
