//! Entities exchanged between the backend core and the presentation layer.
//!
//! Every struct is `#[serde(default)]` so a record that lacks a required key
//! still materializes; whether that is acceptable is decided earlier, by the
//! hydration policy. Optional keys are `Option` and are omitted on output
//! when absent, matching what the backend emits.
//!
//! Counts (`baudRate`, shot counts) are `u32`; the backend sends them as
//! integers and a float-encoded count does not deserialize.

use serde::{Deserialize, Serialize};

/// Chronograph connection settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChronoConfig {
    pub enabled: bool,
    /// Serial port identifier, e.g. `/dev/ttyUSB0` or `COM3`.
    pub port: String,
    pub baud_rate: u32,
    pub auto_record: bool,
}

/// A single measured shot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Shot {
    #[serde(rename = "velocityMPS")]
    pub velocity_mps: f64,
    pub energy_joules: f64,
    /// RFC 3339 timestamp as produced by the backend.
    pub timestamp: String,
    pub valid: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Projectile {
    pub id: String,
    pub name: String,
    pub weight_grams: f64,
    /// Ballistic coefficient.
    pub bc: f64,
}

/// An optic mounted on a profile, embedded by value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Optic {
    /// Optic kind, e.g. `scope` or `red_dot`.
    #[serde(rename = "type")]
    pub optic_type: String,
    pub model_name: String,
    #[serde(rename = "weightG")]
    pub weight_g: f64,
    pub min_magnification: f64,
    pub max_magnification: f64,
}

/// A stored optic in the sight catalog. Same shape as [`Optic`] plus an id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Sight {
    pub id: String,
    #[serde(rename = "type")]
    pub sight_type: String,
    pub model_name: String,
    #[serde(rename = "weightG")]
    pub weight_g: f64,
    pub min_magnification: f64,
    pub max_magnification: f64,
}

/// A shooting configuration.
///
/// `optic` is owned by value. `optic_id` and `default_ammo_id` are weak
/// references into the sight and projectile catalogs and are never resolved
/// here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub name: String,
    /// Category key, e.g. `air_rifle` or `air_pistol`.
    pub category: String,
    #[serde(rename = "barrelLengthMM")]
    pub barrel_length_mm: f64,
    #[serde(rename = "triggerWeightG")]
    pub trigger_weight_g: f64,
    #[serde(rename = "sightHeightMM")]
    pub sight_height_mm: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optic: Option<Optic>,
    #[serde(rename = "opticID", skip_serializing_if = "Option::is_none")]
    pub optic_id: Option<String>,
    #[serde(rename = "twistRateMM", skip_serializing_if = "Option::is_none")]
    pub twist_rate_mm: Option<f64>,
    #[serde(rename = "defaultAmmoID", skip_serializing_if = "Option::is_none")]
    pub default_ammo_id: Option<String>,
    /// Computed by the backend from the barrel, trigger and optic weights.
    #[serde(rename = "totalWeightG")]
    pub total_weight_g: f64,
}

/// A recorded shooting session.
///
/// The profile and projectile are snapshots taken when the session was
/// created. They are owned copies and never track later edits to the live
/// profile or projectile with the same id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub profile_snapshot: Profile,
    pub projectile_snapshot: Projectile,
    pub shots: Vec<Shot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_celsius: Option<f64>,
    pub note: String,
    pub created_at: String,
}

impl Session {
    /// Shots flagged valid by the backend, in recorded order.
    pub fn valid_shots(&self) -> impl Iterator<Item = &Shot> {
        self.shots.iter().filter(|shot| shot.valid)
    }
}

/// List-view projection of a [`Session`]. Read-only; it carries names instead
/// of snapshots and cannot be turned back into a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionMeta {
    pub id: String,
    pub profile_name: String,
    pub projectile_name: String,
    pub shot_count: u32,
    pub valid_shot_count: u32,
    pub created_at: String,
    pub note: String,
    #[serde(rename = "avgVelocityMPS", skip_serializing_if = "Option::is_none")]
    pub avg_velocity_mps: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_energy_joules: Option<f64>,
}

/// Result of one chronograph poll. `session` is present only when the poll
/// recorded a shot and the backend returned the updated session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChronoPollResult {
    pub recorded: bool,
    #[serde(rename = "velocityMPS", skip_serializing_if = "Option::is_none")]
    pub velocity_mps: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Statistics {
    #[serde(rename = "avgVelocityMPS")]
    pub avg_velocity_mps: f64,
    pub standard_deviation: f64,
    #[serde(rename = "minVelocityMPS")]
    pub min_velocity_mps: f64,
    #[serde(rename = "maxVelocityMPS")]
    pub max_velocity_mps: f64,
    pub extreme_spread: f64,
    pub avg_energy_joules: f64,
    pub valid_shot_count: u32,
    pub total_shot_count: u32,
}
