//! Check game servers with the legacy server list ping.
//!
//! legacyping speaks the three pre-1.7 revisions of the server list ping:
//! it builds the probe, sends it over TCP, and decodes the disconnect packet
//! the server answers with into MOTD, player counts and version.
//!
//! # Crate Structure
//!
//! - [`transport`]: Blocking TCP connect/send/receive/close
//! - [`frame`]: Protocol variants, probe encoder, reply decoder
//! - [`probe`]: One-shot probe orchestration (behind `probe` feature)

/// Re-export transport types.
pub mod transport {
    pub use legacyping_transport::*;
}

/// Re-export frame types.
pub mod frame {
    pub use legacyping_frame::*;
}

/// Re-export probe types (requires `probe` feature).
#[cfg(feature = "probe")]
pub mod probe {
    pub use legacyping_probe::*;
}
