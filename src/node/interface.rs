//! Management interface placement and name resolution
//!
//! Naming a management interface is a two-stage affair. Some VM types pin
//! management to the first interface, so the name is known up front. Types
//! that put management last cannot be named until the canvas has finished
//! wiring the node and knows how many ports it has. `StaticInterfaceSpec`
//! carries what can be said before wiring; `resolve` produces the final
//! name once the port count is known.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::trace;

/// Where the management interface sits relative to data interfaces.
///
/// Serialized as the integer sentinel used in saved topologies:
/// `0` = first, `-1` = last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MgmtPosition {
    First,
    Last,
}

impl MgmtPosition {
    pub fn index(self) -> i32 {
        match self {
            MgmtPosition::First => 0,
            MgmtPosition::Last => -1,
        }
    }

    pub fn from_index(index: i32) -> Self {
        if index == 0 {
            MgmtPosition::First
        } else {
            MgmtPosition::Last
        }
    }
}

impl Serialize for MgmtPosition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.index())
    }
}

impl<'de> Deserialize<'de> for MgmtPosition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(MgmtPosition::from_index(i32::deserialize(deserializer)?))
    }
}

/// Management interface spec as far as it can be determined before the
/// node is wired into the topology.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StaticInterfaceSpec {
    pub prefix: String,
    /// Driver hint for the hypervisor domain configuration (virtio, e1000, …)
    pub driver: String,
    pub position: MgmtPosition,
}

impl StaticInterfaceSpec {
    /// Interface name as exported in the saved topology.
    ///
    /// `First` placement is fully determined (`prefix + "0"`). `Last`
    /// placement returns the bare prefix; the numeric suffix is filled in
    /// by `resolve` once port enumeration is complete.
    pub fn provisional_name(&self) -> String {
        match self.position {
            MgmtPosition::First => format!("{}0", self.prefix),
            MgmtPosition::Last => self.prefix.clone(),
        }
    }

    /// Final interface name, given the wired port count from the layout layer.
    pub fn resolve(&self, port_count: usize) -> ResolvedInterfaceSpec {
        let index = match self.position {
            MgmtPosition::First => 0,
            MgmtPosition::Last => port_count.saturating_sub(1),
        };
        let name = format!("{}{}", self.prefix, index);
        trace!(%name, index, port_count, "resolved management interface");
        ResolvedInterfaceSpec {
            name,
            index,
            driver: self.driver.clone(),
        }
    }
}

/// Fully-named management interface, produced once wiring is known.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResolvedInterfaceSpec {
    pub name: String,
    pub index: usize,
    pub driver: String,
}
