
pub mod candidate_translator;

use shared::error::Result;
use std::fmt;

use crate::network::{AdapterType, SocketAddress};
use crate::rand::{IdGenerator, RandomIdGenerator};

/// Indicates that the candidate is used for RTP.
pub const COMPONENT_RTP: i32 = 1;
/// Indicates that the candidate is used for RTCP.
pub const COMPONENT_RTCP: i32 = 2;

/// Candidate type of a host candidate.
pub const LOCAL_PORT_TYPE: &str = "local";
/// Candidate type of a server reflexive candidate.
pub const STUN_PORT_TYPE: &str = "stun";
/// Candidate type of a peer reflexive candidate.
pub const PRFLX_PORT_TYPE: &str = "prflx";
/// Candidate type of a relayed candidate.
pub const RELAY_PORT_TYPE: &str = "relay";

pub const UDP_PROTOCOL_NAME: &str = "udp";
pub const TCP_PROTOCOL_NAME: &str = "tcp";
pub const SSLTCP_PROTOCOL_NAME: &str = "ssltcp";

pub const TCPTYPE_ACTIVE_STR: &str = "active";
pub const TCPTYPE_PASSIVE_STR: &str = "passive";
pub const TCPTYPE_SIMOPEN_STR: &str = "so";

/// 4.1.2.2.  Guidelines for Choosing Type and Local Preferences
/// The RECOMMENDED values are 126 for host candidates, 100
/// for server reflexive candidates, 110 for peer reflexive candidates,
/// and 0 for relayed candidates.
pub const ICE_TYPE_PREFERENCE_HOST: u32 = 126;
pub const ICE_TYPE_PREFERENCE_PRFLX: u32 = 110;
pub const ICE_TYPE_PREFERENCE_SRFLX: u32 = 100;
pub const ICE_TYPE_PREFERENCE_RELAY: u32 = 0;

/// The arguments of a fully specified `Candidate`.
///
/// The id is not part of the config, every new candidate gets a fresh one.
#[derive(Default, Debug, Clone)]
pub struct CandidateConfig {
    pub component: i32,
    pub protocol: String,
    pub address: SocketAddress,
    pub priority: u32,
    pub username: String,
    pub password: String,
    pub candidate_type: String,
    pub generation: u32,
    pub foundation: String,
}

impl CandidateConfig {
    /// Creates a new candidate with a random id.
    pub fn new_candidate(self) -> Candidate {
        self.new_candidate_with_id_generator(&RandomIdGenerator)
    }

    /// Creates a new candidate whose id comes from `id_generator`.
    pub fn new_candidate_with_id_generator(self, id_generator: &impl IdGenerator) -> Candidate {
        Candidate {
            component: self.component,
            protocol: self.protocol,
            address: self.address,
            priority: self.priority,
            username: self.username,
            password: self.password,
            candidate_type: self.candidate_type,
            generation: self.generation,
            foundation: self.foundation,
            ..Candidate::with_id_generator(id_generator)
        }
    }
}

/// Candidate for ICE based connection discovery.
///
/// A plain value: every field has an independent getter and setter and no
/// setter validates or updates any other field.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub(crate) id: String,
    pub(crate) component: i32,
    pub(crate) protocol: String,
    pub(crate) relay_protocol: String,
    pub(crate) address: SocketAddress,
    pub(crate) priority: u32,
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) candidate_type: String,
    pub(crate) network_name: String,
    pub(crate) network_type: AdapterType,
    pub(crate) generation: u32,
    pub(crate) foundation: String,
    pub(crate) related_address: SocketAddress,
    pub(crate) tcptype: String,
}

impl Default for Candidate {
    fn default() -> Self {
        Self::with_id_generator(&RandomIdGenerator)
    }
}

// String makes the Candidate printable
impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_internal(f, false)
    }
}

impl Candidate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id_generator(id_generator: &impl IdGenerator) -> Self {
        Self {
            id: id_generator.generate_id(),
            component: 0,
            protocol: String::new(),
            relay_protocol: String::new(),
            address: SocketAddress::default(),
            priority: 0,
            username: String::new(),
            password: String::new(),
            candidate_type: String::new(),
            network_name: String::new(),
            network_type: AdapterType::Unknown,
            generation: 0,
            foundation: String::new(),
            related_address: SocketAddress::default(),
            tcptype: String::new(),
        }
    }

    /// Returns Candidate ID.
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    pub fn set_id(&mut self, id: &str) {
        id.clone_into(&mut self.id);
    }

    /// Returns candidate component.
    pub fn component(&self) -> i32 {
        self.component
    }

    /// Sets candidate component.
    pub fn set_component(&mut self, component: i32) {
        self.component = component;
    }

    pub fn protocol(&self) -> &str {
        self.protocol.as_str()
    }

    pub fn set_protocol(&mut self, protocol: &str) {
        protocol.clone_into(&mut self.protocol);
    }

    /// Returns the protocol used to talk to the relay.
    pub fn relay_protocol(&self) -> &str {
        self.relay_protocol.as_str()
    }

    pub fn set_relay_protocol(&mut self, protocol: &str) {
        protocol.clone_into(&mut self.relay_protocol);
    }

    /// Returns Candidate Address.
    pub fn address(&self) -> &SocketAddress {
        &self.address
    }

    pub fn set_address(&mut self, address: SocketAddress) {
        self.address = address;
    }

    pub fn priority(&self) -> u32 {
        self.priority
    }

    pub fn set_priority(&mut self, priority: u32) {
        self.priority = priority;
    }

    /// Maps the priority back onto the legacy 0.0-1.0 preference scale.
    ///
    /// Only the type preference byte is used and the result is truncated to
    /// two decimal places, so this is not an inverse of `set_preference`.
    pub fn preference(&self) -> f32 {
        (f64::from((self.priority >> 24) * 100 / 127) / 100.0) as f32
    }

    /// Maps a legacy 0.0-1.0 preference onto the priority.
    ///
    /// The value is computed in 64 bits and clamped to `u32::MAX`, which a
    /// preference above ~2.01 (e.g. 3.0) would otherwise overflow.
    pub fn set_preference(&mut self, preference: f32) {
        let prio_val = ((preference * 127.0) as u64).saturating_mul(1 << 24);
        if prio_val > u64::from(u32::MAX) {
            log::trace!("preference {preference} exceeds priority range, clamping");
        }
        self.priority = prio_val.min(u64::from(u32::MAX)) as u32;
    }

    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    pub fn set_username(&mut self, username: &str) {
        username.clone_into(&mut self.username);
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    pub fn set_password(&mut self, password: &str) {
        password.clone_into(&mut self.password);
    }

    /// Returns candidate type, one of the `*_PORT_TYPE` values.
    pub fn candidate_type(&self) -> &str {
        self.candidate_type.as_str()
    }

    pub fn set_candidate_type(&mut self, candidate_type: &str) {
        candidate_type.clone_into(&mut self.candidate_type);
    }

    pub fn network_name(&self) -> &str {
        self.network_name.as_str()
    }

    pub fn set_network_name(&mut self, network_name: &str) {
        network_name.clone_into(&mut self.network_name);
    }

    pub fn network_type(&self) -> AdapterType {
        self.network_type
    }

    pub fn set_network_type(&mut self, network_type: AdapterType) {
        self.network_type = network_type;
    }

    /// Candidates in a new generation replace those in the old generation.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn set_generation(&mut self, generation: u32) {
        self.generation = generation;
    }

    pub fn generation_str(&self) -> String {
        self.generation.to_string()
    }

    /// Parses the generation from the leading decimal digits of `generation`.
    ///
    /// Leading whitespace and anything after the digits are ignored, so
    /// "12abc" sets 12. Input that does not start with a digit (including a
    /// sign) or overflows `u32` returns an error and leaves the generation
    /// unchanged rather than resetting it to 0.
    pub fn set_generation_str(&mut self, generation: &str) -> Result<()> {
        let generation = generation.trim_start();
        let end = generation
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(generation.len());
        self.generation = generation[..end].parse()?;
        Ok(())
    }

    pub fn foundation(&self) -> &str {
        self.foundation.as_str()
    }

    pub fn set_foundation(&mut self, foundation: &str) {
        foundation.clone_into(&mut self.foundation);
    }

    pub fn related_address(&self) -> &SocketAddress {
        &self.related_address
    }

    pub fn set_related_address(&mut self, related_address: SocketAddress) {
        self.related_address = related_address;
    }

    pub fn tcptype(&self) -> &str {
        self.tcptype.as_str()
    }

    pub fn set_tcptype(&mut self, tcptype: &str) {
        tcptype.clone_into(&mut self.tcptype);
    }

    /// Determines whether this candidate is equivalent to the given one.
    ///
    /// The id, network name and network type are debug information, and the
    /// priority may be recomputed for the same path, so none of them are
    /// compared. Neither are the relay protocol and tcptype.
    pub fn is_equivalent(&self, other: &Candidate) -> bool {
        self.component == other.component
            && self.protocol == other.protocol
            && self.address == other.address
            && self.username == other.username
            && self.password == other.password
            && self.candidate_type == other.candidate_type
            && self.generation == other.generation
            && self.foundation == other.foundation
            && self.related_address == other.related_address
    }

    /// Returns the same form as `to_string`, with the address redacted.
    ///
    /// Only the address is redacted. The related address, username and
    /// password are written in full, so the output must still be treated as
    /// sensitive.
    pub fn to_sensitive_string(&self) -> String {
        format!("{}", SensitiveCandidate(self))
    }

    /// Computes the RFC 5245 priority for this candidate.
    ///
    /// The inputs are not validated: `type_preference` must fit in 8 bits and
    /// the component must be within `0..=256`, otherwise the bands overlap or
    /// wrap around.
    pub fn get_priority(
        &self,
        type_preference: u32,
        network_adapter_preference: i32,
        relay_preference: i32,
    ) -> u32 {
        if type_preference > 0xff || !(0..=256).contains(&self.component) {
            log::warn!(
                "[{}]: priority inputs out of range, type_preference={} component={}",
                self.id,
                type_preference,
                self.component
            );
        }

        // RFC 5245 - 4.1.2.1.
        // priority = (2^24)*(type preference) +
        //            (2^8)*(local preference) +
        //            (2^0)*(256 - component ID)
        //
        // The two bytes of local preference are split into the network
        // adapter preference and the RFC 3484 address preference:
        //
        //              0                 1
        //       0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5
        //      +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
        //      |  NIC Pref     |    Addr Pref  |
        //      +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
        //
        // local preference = (NIC Pref << 8 | Addr Pref) + relay preference
        let addr_pref = self.address.ip_precedence();
        let local_preference =
            (network_adapter_preference.wrapping_shl(8) | addr_pref).wrapping_add(relay_preference);

        type_preference.wrapping_shl(24)
            | (local_preference as u32).wrapping_shl(8)
            | 256i32.wrapping_sub(self.component) as u32
    }

    fn fmt_internal(&self, f: &mut fmt::Formatter<'_>, sensitive: bool) -> fmt::Result {
        let address = if sensitive {
            self.address.to_sensitive_string()
        } else {
            self.address.to_string()
        };

        write!(
            f,
            "Cand[{}:{}:{}:{}:{}:{}:{}:{}:{}]",
            self.foundation,
            self.component,
            self.protocol,
            self.priority,
            address,
            self.candidate_type,
            self.related_address,
            self.username,
            self.password,
        )
    }
}

struct SensitiveCandidate<'a>(&'a Candidate);

impl fmt::Display for SensitiveCandidate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_internal(f, true)
    }
}
