//! Per-VM-type default parameters
//!
//! Everything needed to fully configure a VM of a given type lives here.
//! A new VM type is a new `VmNodeDefaults` value (see `presets`), supplied
//! to the node at construction; the base constants below cover a plain
//! Linux server.

use crate::node::interface::MgmtPosition;
use serde::{Deserialize, Serialize};

/// Default configuration for one VM type. Fixed per type, never mutated
/// at runtime.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VmNodeDefaults {
    /// Number of vCPUs
    pub vcpu_count: u32,
    /// RAM in MB
    pub ram_mb: u32,
    /// How data interfaces are named, in the UI and in configuration data
    /// sent to the VM
    pub interface_prefix: String,
    /// Interface driver in the hypervisor domain configuration (virtio, e1000, …)
    pub interface_type: String,
    /// Management interface prefix where it differs from data interfaces
    /// (fxp vs ge-0/0/ on routing engines)
    pub mgmt_interface_prefix: String,
    /// Some VM types require management on the first interface, others on
    /// the last
    pub mgmt_interface_position: MgmtPosition,
    pub mgmt_interface_type: String,
    /// Hypervisor domain configuration template; existence is the backend's
    /// concern, not validated here
    pub domain_config_file: String,
    pub icon_width: u32,
    pub icon_height: u32,
    /// On-canvas icon asset, served by the web frontend
    pub icon_file: String,
    /// Child VM type to instantiate alongside this one, empty for none
    pub companion_type: String,
    /// Interfaces bridged to the companion
    pub companion_interface_list: Vec<String>,
    /// Connect all data interfaces to both companions
    pub companion_interface_mirror: bool,
    /// PCI slot offset applied to mirrored companion interfaces so slots in
    /// the domain definition stay unique; most VMs top out under 20
    /// interfaces
    pub companion_interface_mirror_offset: u32,
    /// PCI slot of the first interface; subsequent interfaces increment by 1
    pub pci_slot_offset: u32,
    /// Interfaces that must exist but stay unused, wired to a dummy bridge
    pub dummy_interface_list: Vec<String>,
    /// Bus type for an attached secondary disk (ide, usb, …), empty for none
    pub secondary_disk_type: String,
    pub tertiary_disk_type: String,
    pub smbios_product_prefix: String,
    pub smbios_product_suffix: String,
    pub smbios_manufacturer: String,
    pub smbios_version: String,
    /// Whether the UI may offer a cloud-init config script for this type
    pub cloud_init_support: bool,
}

impl Default for VmNodeDefaults {
    fn default() -> Self {
        Self {
            vcpu_count: 1,
            ram_mb: 1024,
            interface_prefix: "eth".to_string(),
            interface_type: "virtio".to_string(),
            mgmt_interface_prefix: "eth".to_string(),
            mgmt_interface_position: MgmtPosition::Last,
            mgmt_interface_type: "virtio".to_string(),
            domain_config_file: "domain.xml".to_string(),
            icon_width: 50,
            icon_height: 50,
            icon_file: "/static/images/server.png".to_string(),
            companion_type: String::new(),
            companion_interface_list: Vec::new(),
            companion_interface_mirror: false,
            companion_interface_mirror_offset: 19,
            pci_slot_offset: 3,
            dummy_interface_list: Vec::new(),
            secondary_disk_type: String::new(),
            tertiary_disk_type: String::new(),
            smbios_product_prefix: "Wistar-".to_string(),
            smbios_product_suffix: "-VM".to_string(),
            smbios_manufacturer: "Wistar".to_string(),
            smbios_version: "2.0".to_string(),
            cloud_init_support: false,
        }
    }
}
