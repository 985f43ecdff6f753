//! Port definitions: trait seams between the domain and its adapters.

mod synthesis;

pub use synthesis::{
    HealthReport, SynthesisClientPort, SynthesisPortError, SynthesisPortResult, VoiceProfile,
};
