// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Volume, VolumeInfo, VolumesResponse};
pub use requests::PreferenceRequest;
pub use responses::{ChatEnvelope, ErrorResponse, HealthResponse, TextCard};
