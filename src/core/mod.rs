pub mod config;
pub mod error;
pub mod types;

pub use config::RadarConfig;
pub use error::{RadarError, Result};
pub use types::{PlayerPose, TrackedId};
