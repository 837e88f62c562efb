//! Per-instance node state and accessors
//!
//! A node's state starts empty when it is dropped on the canvas and is
//! filled in by edit dialogs or by restoring a saved topology. Every
//! accessor is total: an unset field falls back to a fixed sentinel or to
//! the matching `VmNodeDefaults` field, never to a missing value.

use crate::node::defaults::VmNodeDefaults;
use crate::node::interface::StaticInterfaceSpec;
use crate::node::shape::ShapeAttributes;
use serde::{Deserialize, Serialize};

pub const DEFAULT_VM_TYPE: &str = "linux";
pub const DEFAULT_PASSWORD: &str = "NA";
pub const DEFAULT_IMAGE_ID: &str = "0";
pub const DEFAULT_NAME: &str = "unnamed_vm";

/// Mutable per-instance fields. `None` means "use the default".
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct VmNodeState {
    pub vm_type: Option<String>,
    pub cpu: Option<u32>,
    pub ram: Option<u32>,
    pub ip: Option<String>,
    pub password: Option<String>,
    pub image: Option<String>,
    pub name: Option<String>,
    pub label: Option<String>,
    pub secondary_disk: Option<String>,
    pub tertiary_disk: Option<String>,
}

/// One VM node on the canvas: type defaults, instance state, and the
/// generic shape attributes the drawing layer persists alongside them.
#[derive(Debug, Clone, PartialEq)]
pub struct VmNode {
    pub defaults: VmNodeDefaults,
    pub state: VmNodeState,
    pub shape: ShapeAttributes,
}

impl VmNode {
    pub fn new(defaults: VmNodeDefaults) -> Self {
        let shape = ShapeAttributes::new(defaults.icon_width, defaults.icon_height);
        Self {
            defaults,
            state: VmNodeState::default(),
            shape,
        }
    }

    /// One-shot initializer used when the UI instantiates a node.
    pub fn setup(&mut self, vm_type: &str, label: &str, ip: &str, password: &str, image: &str) {
        self.set_ip(ip);
        self.set_image(image);
        self.set_password(password);
        self.set_vm_type(vm_type);
        self.set_label(label);
    }

    pub fn vm_type(&self) -> &str {
        self.state.vm_type.as_deref().unwrap_or(DEFAULT_VM_TYPE)
    }

    pub fn set_vm_type(&mut self, vm_type: &str) {
        self.state.vm_type = Some(vm_type.to_string());
    }

    pub fn cpu(&self) -> u32 {
        self.state.cpu.unwrap_or(self.defaults.vcpu_count)
    }

    pub fn set_cpu(&mut self, cpu: u32) {
        self.state.cpu = Some(cpu);
    }

    pub fn ram(&self) -> u32 {
        self.state.ram.unwrap_or(self.defaults.ram_mb)
    }

    pub fn set_ram(&mut self, ram: u32) {
        self.state.ram = Some(ram);
    }

    pub fn ip(&self) -> &str {
        self.state.ip.as_deref().unwrap_or("")
    }

    pub fn set_ip(&mut self, ip: &str) {
        self.state.ip = Some(ip.to_string());
    }

    pub fn password(&self) -> &str {
        self.state.password.as_deref().unwrap_or(DEFAULT_PASSWORD)
    }

    pub fn set_password(&mut self, password: &str) {
        self.state.password = Some(password.to_string());
    }

    pub fn image(&self) -> &str {
        self.state.image.as_deref().unwrap_or(DEFAULT_IMAGE_ID)
    }

    pub fn set_image(&mut self, image: &str) {
        self.state.image = Some(image.to_string());
    }

    // Reads of name and label are unified on the `name` field; writes are
    // split. Saved topologies and the domain configuration backend both key
    // on `name`, while `label` only feeds the canvas caption.
    pub fn name(&self) -> &str {
        self.state.name.as_deref().unwrap_or(DEFAULT_NAME)
    }

    pub fn set_name(&mut self, name: &str) {
        self.state.name = Some(name.to_string());
    }

    pub fn label(&self) -> &str {
        self.state.name.as_deref().unwrap_or(DEFAULT_NAME)
    }

    pub fn set_label(&mut self, label: &str) {
        self.state.label = Some(label.to_string());
    }

    pub fn secondary_disk(&self) -> &str {
        self.state.secondary_disk.as_deref().unwrap_or("")
    }

    pub fn set_secondary_disk(&mut self, disk_id: &str) {
        self.state.secondary_disk = Some(disk_id.to_string());
    }

    pub fn tertiary_disk(&self) -> &str {
        self.state.tertiary_disk.as_deref().unwrap_or("")
    }

    pub fn set_tertiary_disk(&mut self, disk_id: &str) {
        self.state.tertiary_disk = Some(disk_id.to_string());
    }

    pub fn secondary_disk_type(&self) -> &str {
        &self.defaults.secondary_disk_type
    }

    pub fn tertiary_disk_type(&self) -> &str {
        &self.defaults.tertiary_disk_type
    }

    pub fn companion_type(&self) -> &str {
        &self.defaults.companion_type
    }

    pub fn interface_prefix(&self) -> &str {
        &self.defaults.interface_prefix
    }

    /// Management interface spec before wiring is known.
    pub fn mgmt_interface_spec(&self) -> StaticInterfaceSpec {
        StaticInterfaceSpec {
            prefix: self.defaults.mgmt_interface_prefix.clone(),
            driver: self.defaults.mgmt_interface_type.clone(),
            position: self.defaults.mgmt_interface_position,
        }
    }

    /// Management interface name as stored in the saved topology. Fully
    /// qualified only for first-interface placement; last-interface
    /// placement stays a bare prefix until the layout layer resolves it.
    pub fn mgmt_interface(&self) -> String {
        self.mgmt_interface_spec().provisional_name()
    }

    /// SMBIOS product entry for the domain definition. Only the first `-`
    /// in the name becomes `_`; later hyphens are kept.
    pub fn smbios_product_string(&self) -> String {
        let instance_name = self.name().replacen('-', "_", 1);
        format!(
            "{}{}{}",
            self.defaults.smbios_product_prefix, instance_name, self.defaults.smbios_product_suffix
        )
    }
}
