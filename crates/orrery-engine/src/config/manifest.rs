use std::collections::HashSet;
use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported by configuration validation.
/// Every variant is a construction-time contract violation: the tick loop
/// must not start on a manifest that fails validation.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The central star has a non-positive visual radius.
    #[error("star {name:?}: radius must be positive, got {value}")]
    NonPositiveStarRadius { name: String, value: f32 },
    /// A body field that must be strictly positive is not.
    #[error("body {body:?}: {field} must be positive, got {value}")]
    NonPositive {
        body: String,
        field: &'static str,
        value: f32,
    },
    /// A body was declared without a name.
    #[error("body at index {0} has an empty name")]
    EmptyName(usize),
    /// Two bodies share a name, breaking named-body lookup.
    #[error("duplicate body name: {0:?}")]
    DuplicateName(String),
}

/// Static description of the star system, loaded once at startup.
/// Read-only thereafter; only spin/revolution rates of the live bodies may
/// change at runtime, via control messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemManifest {
    /// The central luminous body.
    pub star: StarDescriptor,
    /// Orbiting bodies, in display order.
    pub bodies: Vec<BodyDescriptor>,
}

/// The central body. It does not orbit and gets no label; its fields are
/// carried for presentation collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarDescriptor {
    pub name: String,
    /// Visual radius in world units.
    pub radius: f32,
    /// Relative path to a texture image, if any.
    #[serde(default)]
    pub texture: Option<String>,
    /// Fallback/tint color (r, g, b in [0, 1]).
    #[serde(default)]
    pub color: Option<[f32; 3]>,
}

/// One orbiting body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyDescriptor {
    /// Unique display name.
    pub name: String,
    /// Visual radius in world units. Must be > 0.
    pub radius: f32,
    /// Orbital radius in world units. Must be > 0.
    pub distance: f32,
    /// Initial revolution rate in radians per tick.
    pub revolution_rate: f32,
    /// Initial axial-spin rate in radians per tick.
    pub spin_rate: f32,
    /// Orbital-plane tilt in degrees.
    #[serde(default)]
    pub inclination_deg: f32,
    /// Fixed ascending-node angle in degrees. Absent → scattered from the
    /// per-body hash at load time (0 for the reference body).
    #[serde(default)]
    pub ascending_node_deg: Option<f32>,
    /// The reference body defines the zero direction of the reference
    /// plane: its ascending node is pinned to 0 unless overridden.
    #[serde(default)]
    pub reference: bool,
    /// Relative path to a texture image, if any.
    #[serde(default)]
    pub texture: Option<String>,
    /// Fallback color when no texture is given (r, g, b in [0, 1]).
    #[serde(default)]
    pub color: Option<[f32; 3]>,
}

/// Deterministic hash for per-body scatter (no external rand crate).
pub fn scatter_hash(seed: u32) -> u32 {
    let mut n = seed;
    n = n.wrapping_mul(2654435761);
    n ^= n >> 16;
    n = n.wrapping_mul(2246822519);
    n ^= n >> 13;
    n
}

impl BodyDescriptor {
    /// Orbital-plane tilt in radians.
    pub fn inclination(&self) -> f32 {
        self.inclination_deg.to_radians()
    }

    /// Ascending-node angle in radians for the body at `index`.
    /// Explicit override wins; the reference body gets 0; everything else
    /// is scattered deterministically over the full turn.
    pub fn ascending_node(&self, index: usize) -> f32 {
        if let Some(deg) = self.ascending_node_deg {
            return deg.to_radians();
        }
        if self.reference {
            return 0.0;
        }
        let h = scatter_hash(index as u32 * 7 + 31);
        (h as f32 / u32::MAX as f32) * TAU
    }
}

impl SystemManifest {
    /// Parse a manifest from a JSON string. Parsing does not validate;
    /// call `validate` before building a scene from the result.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Fail-fast validation of the construction-time contract:
    /// positive radii and distances, unique non-empty names.
    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.star.radius <= 0.0 {
            return Err(ManifestError::NonPositiveStarRadius {
                name: self.star.name.clone(),
                value: self.star.radius,
            });
        }

        let mut seen = HashSet::new();
        for (index, body) in self.bodies.iter().enumerate() {
            if body.name.is_empty() {
                return Err(ManifestError::EmptyName(index));
            }
            if body.radius <= 0.0 {
                return Err(ManifestError::NonPositive {
                    body: body.name.clone(),
                    field: "radius",
                    value: body.radius,
                });
            }
            if body.distance <= 0.0 {
                return Err(ManifestError::NonPositive {
                    body: body.name.clone(),
                    field: "distance",
                    value: body.distance,
                });
            }
            if !seen.insert(body.name.as_str()) {
                return Err(ManifestError::DuplicateName(body.name.clone()));
            }
        }
        Ok(())
    }
}
