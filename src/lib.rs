//! vmnode - VM node model for a network-topology editor
//!
//! Defaults, per-instance state, and save/restore for the virtual machine
//! nodes a user drags onto the topology canvas. The drawing toolkit,
//! edit dialogs, and the backend that renders hypervisor domain
//! configurations are external; this crate only owns the node data
//! contract.

pub mod error;
pub mod node;
pub mod persist;

// Re-export commonly used types
pub use error::MalformedStateError;
pub use node::defaults::VmNodeDefaults;
pub use node::state::VmNode;
pub use persist::{export_state, restore_state, StateMap};

/// Library error type
pub type Result<T, E = anyhow::Error> = anyhow::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use node::interface::MgmtPosition;
    use node::presets;
    use node::state::{DEFAULT_IMAGE_ID, DEFAULT_NAME, DEFAULT_PASSWORD, DEFAULT_VM_TYPE};

    #[test]
    fn test_fallbacks_on_empty_state() {
        let node = VmNode::new(VmNodeDefaults::default());
        assert_eq!(node.vm_type(), DEFAULT_VM_TYPE);
        assert_eq!(node.password(), DEFAULT_PASSWORD);
        assert_eq!(node.image(), DEFAULT_IMAGE_ID);
        assert_eq!(node.ip(), "");
        assert_eq!(node.name(), DEFAULT_NAME);
        assert_eq!(node.label(), DEFAULT_NAME);
        assert_eq!(node.cpu(), node.defaults.vcpu_count);
        assert_eq!(node.ram(), node.defaults.ram_mb);
        assert_eq!(node.secondary_disk(), "");
        assert_eq!(node.tertiary_disk(), "");
    }

    #[test]
    fn test_setters_override_fallbacks() {
        let mut node = VmNode::new(VmNodeDefaults::default());
        node.set_cpu(4);
        node.set_ram(8192);
        node.set_ip("10.0.0.5");
        node.set_password("secret");
        node.set_image("17");
        node.set_secondary_disk("disk-a");
        node.set_tertiary_disk("disk-b");
        assert_eq!(node.cpu(), 4);
        assert_eq!(node.ram(), 8192);
        assert_eq!(node.ip(), "10.0.0.5");
        assert_eq!(node.password(), "secret");
        assert_eq!(node.image(), "17");
        assert_eq!(node.secondary_disk(), "disk-a");
        assert_eq!(node.tertiary_disk(), "disk-b");
    }

    #[test]
    fn test_name_and_label_read_shared_field() {
        let mut node = VmNode::new(VmNodeDefaults::default());
        node.set_name("x");
        assert_eq!(node.name(), "x");
        assert_eq!(node.label(), "x");
    }

    #[test]
    fn test_set_label_does_not_touch_name() {
        let mut node = VmNode::new(VmNodeDefaults::default());
        node.set_name("x");
        node.set_label("y");
        assert_eq!(node.name(), "x");
        assert_eq!(node.label(), "x");
        assert_eq!(node.state.label.as_deref(), Some("y"));
    }

    #[test]
    fn test_setup_populates_state() {
        let mut node = VmNode::new(VmNodeDefaults::default());
        node.setup("linux", "web-1", "10.0.0.9", "pw", "3");
        assert_eq!(node.vm_type(), "linux");
        assert_eq!(node.ip(), "10.0.0.9");
        assert_eq!(node.password(), "pw");
        assert_eq!(node.image(), "3");
        // setup writes the caption only; name keeps its fallback
        assert_eq!(node.name(), DEFAULT_NAME);
    }

    #[test]
    fn test_smbios_replaces_first_hyphen_only() {
        let mut node = VmNode::new(VmNodeDefaults::default());
        node.set_name("vm-re-0");
        assert_eq!(node.smbios_product_string(), "Wistar-vm_re-0-VM");
    }

    #[test]
    fn test_smbios_name_without_hyphen() {
        let mut node = VmNode::new(VmNodeDefaults::default());
        node.set_name("vm0");
        assert_eq!(node.smbios_product_string(), "Wistar-vm0-VM");
    }

    #[test]
    fn test_mgmt_interface_first_is_fully_named() {
        let defaults = VmNodeDefaults {
            mgmt_interface_position: MgmtPosition::First,
            ..VmNodeDefaults::default()
        };
        let node = VmNode::new(defaults);
        assert_eq!(node.mgmt_interface(), "eth0");
    }

    #[test]
    fn test_mgmt_interface_last_stays_bare_prefix() {
        let node = VmNode::new(VmNodeDefaults::default());
        assert_eq!(node.mgmt_interface(), "eth");
    }

    #[test]
    fn test_resolve_mgmt_interface_with_port_count() {
        let node = VmNode::new(VmNodeDefaults::default());
        let resolved = node.mgmt_interface_spec().resolve(6);
        assert_eq!(resolved.name, "eth5");
        assert_eq!(resolved.index, 5);
        assert_eq!(resolved.driver, "virtio");

        let node = VmNode::new(presets::route_engine());
        let resolved = node.mgmt_interface_spec().resolve(6);
        assert_eq!(resolved.name, "fxp0");
        assert_eq!(resolved.index, 0);
    }

    #[test]
    fn test_mgmt_position_index_mapping() {
        assert_eq!(MgmtPosition::First.index(), 0);
        assert_eq!(MgmtPosition::Last.index(), -1);
        assert_eq!(MgmtPosition::from_index(0), MgmtPosition::First);
        assert_eq!(MgmtPosition::from_index(-1), MgmtPosition::Last);
    }

    #[test]
    fn test_export_resolves_untouched_node() {
        let node = VmNode::new(VmNodeDefaults::default());
        let map = export_state(&node);
        assert_eq!(map["vmNode"], true);
        assert_eq!(map["type"], "linux");
        assert_eq!(map["password"], "NA");
        assert_eq!(map["image"], "0");
        assert_eq!(map["name"], "unnamed_vm");
        assert_eq!(map["cpu"], 1);
        assert_eq!(map["ram"], 1024);
        assert_eq!(map["mgmtInterfaceIndex"], -1);
        assert_eq!(map["mgmtInterface"], "eth");
        assert_eq!(map["configurationFile"], "domain.xml");
        assert_eq!(map["cloud_init_support"], false);
    }

    #[test]
    fn test_export_restore_round_trip() {
        let mut node = VmNode::new(VmNodeDefaults::default());
        node.setup("ubuntu", "web", "192.168.1.10", "admin", "42");
        node.set_name("web-frontend-1");
        node.set_cpu(2);
        node.set_ram(4096);
        node.set_secondary_disk("cfg-disk");
        node.shape.x = 120.0;
        node.shape.y = 45.5;
        let map = export_state(&node);

        let mut restored = VmNode::new(VmNodeDefaults::default());
        restore_state(&mut restored, &map).unwrap();
        assert_eq!(restored.cpu(), node.cpu());
        assert_eq!(restored.ram(), node.ram());
        assert_eq!(restored.ip(), node.ip());
        assert_eq!(restored.password(), node.password());
        assert_eq!(restored.image(), node.image());
        assert_eq!(restored.name(), node.name());
        assert_eq!(restored.label(), node.label());
        assert_eq!(restored.secondary_disk(), node.secondary_disk());
        assert_eq!(restored.tertiary_disk(), node.tertiary_disk());
        assert_eq!(restored.shape, node.shape);
    }

    #[test]
    fn test_restore_missing_key_fails() {
        let node = VmNode::new(VmNodeDefaults::default());
        let mut map = export_state(&node);
        map.remove("cpu");

        let mut target = VmNode::new(VmNodeDefaults::default());
        let err = restore_state(&mut target, &map).unwrap_err();
        assert_eq!(err, MalformedStateError::MissingKey("cpu".to_string()));
        // node untouched on failure
        assert_eq!(target.state, node.state);
    }

    #[test]
    fn test_restore_wrong_type_fails() {
        let node = VmNode::new(VmNodeDefaults::default());
        let mut map = export_state(&node);
        map.insert("ram".to_string(), serde_json::json!("lots"));

        let mut target = VmNode::new(VmNodeDefaults::default());
        let err = restore_state(&mut target, &map).unwrap_err();
        assert!(matches!(
            err,
            MalformedStateError::InvalidValue { ref key, .. } if key == "ram"
        ));
    }

    #[test]
    fn test_preset_lookup_by_name() {
        assert_eq!(presets::by_name("linux"), Some(presets::linux_server()));
        assert_eq!(
            presets::by_name("route-engine"),
            Some(presets::route_engine())
        );
        assert_eq!(presets::by_name("no-such-type"), None);
    }

    #[test]
    fn test_route_engine_preset_wiring() {
        let d = presets::route_engine();
        assert_eq!(d.mgmt_interface_position, MgmtPosition::First);
        assert_eq!(d.mgmt_interface_prefix, "fxp");
        assert_eq!(d.companion_type, "forwarding-plane");
        assert_eq!(d.companion_interface_list, vec!["1".to_string()]);
        assert_eq!(d.secondary_disk_type, "ide");
        assert_eq!(d.tertiary_disk_type, "usb");
    }

    #[test]
    fn test_export_reflects_preset_defaults() {
        let node = VmNode::new(presets::cosim_switch());
        let map = export_state(&node);
        assert_eq!(map["companionInterfaceMirror"], true);
        assert_eq!(map["companionInterfaceMirrorOffset"], 19);
        assert_eq!(map["dummyInterfaceList"], serde_json::json!(["em2"]));
        assert_eq!(map["mgmtInterface"], "em0");
    }
}
