//! Named per-type presets
//!
//! Each VM type the palette offers is a preset built on the base defaults.

use crate::node::defaults::VmNodeDefaults;
use crate::node::interface::MgmtPosition;

/// Plain Linux server, the base defaults unchanged.
pub fn linux_server() -> VmNodeDefaults {
    VmNodeDefaults::default()
}

/// Ubuntu cloud image: cloud-init enabled so the UI can push management IP
/// and hostname into the guest.
pub fn ubuntu_cloud() -> VmNodeDefaults {
    VmNodeDefaults {
        ram_mb: 2048,
        icon_file: "/static/images/ubuntu.png".to_string(),
        cloud_init_support: true,
        ..VmNodeDefaults::default()
    }
}

/// Routing engine: management pinned to the first interface (fxp0),
/// Junos-style data interface naming, ide + usb auxiliary disks, and a
/// forwarding-plane child bridged over interface "1".
pub fn route_engine() -> VmNodeDefaults {
    VmNodeDefaults {
        vcpu_count: 2,
        ram_mb: 2048,
        interface_prefix: "ge-0/0/".to_string(),
        mgmt_interface_prefix: "fxp".to_string(),
        mgmt_interface_position: MgmtPosition::First,
        domain_config_file: "vmx_domain.xml".to_string(),
        icon_file: "/static/images/router.png".to_string(),
        companion_type: "forwarding-plane".to_string(),
        companion_interface_list: vec!["1".to_string()],
        secondary_disk_type: "ide".to_string(),
        tertiary_disk_type: "usb".to_string(),
        ..VmNodeDefaults::default()
    }
}

/// Cosim-style switch: every data interface is mirrored onto the companion
/// (slots offset to stay unique), and em2 must exist but stays on a dummy
/// bridge.
pub fn cosim_switch() -> VmNodeDefaults {
    VmNodeDefaults {
        ram_mb: 2048,
        interface_prefix: "em".to_string(),
        mgmt_interface_prefix: "em".to_string(),
        mgmt_interface_position: MgmtPosition::First,
        icon_file: "/static/images/switch.png".to_string(),
        companion_type: "cosim".to_string(),
        companion_interface_mirror: true,
        dummy_interface_list: vec!["em2".to_string()],
        ..VmNodeDefaults::default()
    }
}

/// Palette lookup by preset name.
pub fn by_name(name: &str) -> Option<VmNodeDefaults> {
    match name {
        "linux" => Some(linux_server()),
        "ubuntu-cloud" => Some(ubuntu_cloud()),
        "route-engine" => Some(route_engine()),
        "cosim-switch" => Some(cosim_switch()),
        _ => None,
    }
}
