pub mod api;
pub mod components;
pub mod config;
pub mod core;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::runner::SimRunner;
pub use api::sim::{EngineContext, SimConfig, Simulation};
pub use api::types::{BodyId, SimEvent};
pub use components::body::{Body, OrbitNodes};
pub use config::manifest::{
    scatter_hash, BodyDescriptor, ManifestError, StarDescriptor, SystemManifest,
};
pub use crate::core::scene::Scene;
pub use crate::core::time::{FixedTimestep, Playback};
pub use crate::core::transform::{LocalTransform, NodeId, TransformGraph};
pub use input::queue::{ControlEvent, ControlQueue};
pub use renderer::camera::{Camera3D, CameraUniform, Viewport};
pub use renderer::labels::{
    ndc_to_pixel, place_label, project_ndc, LabelBuffer, LabelInstance, LabelPlacement, Ndc,
};
pub use systems::labels::build_label_buffer;
pub use systems::orbit::{attach_orbit_chain, tick_orbits};
