use serde::Serialize;

/// Server status extracted from a legacy ping reply.
///
/// The shape depends on the protocol variant that produced it: Beta servers
/// only report the MOTD and player counts, 1.4+ servers add a protocol
/// number and version string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParsedStatus {
    /// Reply to a Beta 1.8 – 1.3 ping.
    Beta {
        motd: String,
        num_players: i64,
        max_players: i64,
    },
    /// Reply to a 1.4 – 1.6 ping.
    Extended {
        protocol_version: i64,
        version: String,
        motd: String,
        num_players: i64,
        max_players: i64,
    },
}

impl ParsedStatus {
    /// Message of the day.
    pub fn motd(&self) -> &str {
        match self {
            ParsedStatus::Beta { motd, .. } | ParsedStatus::Extended { motd, .. } => motd.as_str(),
        }
    }

    /// Players currently online.
    pub fn num_players(&self) -> i64 {
        match self {
            ParsedStatus::Beta { num_players, .. }
            | ParsedStatus::Extended { num_players, .. } => *num_players,
        }
    }

    /// Player slots.
    pub fn max_players(&self) -> i64 {
        match self {
            ParsedStatus::Beta { max_players, .. }
            | ParsedStatus::Extended { max_players, .. } => *max_players,
        }
    }

    /// Server version string, if the protocol reports one.
    pub fn version(&self) -> Option<&str> {
        match self {
            ParsedStatus::Beta { .. } => None,
            ParsedStatus::Extended { version, .. } => Some(version.as_str()),
        }
    }

    /// Server protocol number, if the protocol reports one.
    pub fn protocol_version(&self) -> Option<i64> {
        match self {
            ParsedStatus::Beta { .. } => None,
            ParsedStatus::Extended {
                protocol_version, ..
            } => Some(*protocol_version),
        }
    }
}
