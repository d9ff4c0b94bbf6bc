pub mod bodies;
pub mod clock;
pub mod config;
pub mod constants;
pub mod cta;
pub mod error;
pub mod force;
pub mod gesture;
pub mod landmarks;
pub mod onboarding;
pub mod persistence;
pub mod schedule;
pub mod state;

pub use bodies::*;
pub use clock::*;
pub use config::*;
pub use cta::{CtaController, CtaEvent, CtaPhase, CtaState, CtaTimings, CtaView};
pub use error::*;
pub use force::*;
pub use gesture::*;
pub use landmarks::*;
pub use onboarding::*;
pub use persistence::*;
pub use schedule::*;
pub use state::*;
