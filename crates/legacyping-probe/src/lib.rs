//! One-shot legacy server list ping.
//!
//! Connect, send the probe for the chosen variant, read one reply, close,
//! decode. The outcome is either a [`ParsedStatus`](legacyping_frame::ParsedStatus)
//! or a [`ProbeError`] that tells "unreachable" apart from "answered with
//! something unintelligible".

pub mod config;
pub mod error;
pub mod probe;

pub use config::{ProbeConfig, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TIMEOUT};
pub use error::{ProbeError, Result};
pub use probe::{probe, probe_stream};
