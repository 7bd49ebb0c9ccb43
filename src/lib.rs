//! EcoAdvice API client
//!
//! Typed client for a home-energy-advice service: submit a home's physical
//! and energy profile, then stream back AI-generated energy-saving
//! recommendations over SSE.
//!
//! ```no_run
//! use ecoadvice::{AdviceClient, AdviceConfig};
//!
//! # async fn example() -> Result<(), ecoadvice::AdviceError> {
//! let client = AdviceClient::new(AdviceConfig::default())?;
//! client
//!     .stream_advice(
//!         "3f61a4e2-7b1c-4a2e-9a38-0d6f2f1c9b55",
//!         |rec| println!("{}: {}", rec.title, rec.estimated_savings),
//!         || println!("done"),
//!         Some(|err: String| eprintln!("stream failed: {}", err)),
//!     )
//!     .await;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod sse;
pub mod types;

pub use client::AdviceClient;
pub use config::{load_config, AdviceConfig};
pub use error::AdviceError;
pub use sse::{SseLineBuffer, StreamEnd};
pub use types::{
    Category, HeatingType, HomeProfile, InsulationLevel, Priority, Recommendation, RoofType,
    StreamMessage, WindowsType,
};
