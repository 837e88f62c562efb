//! Saving and restoring node state
//!
//! A node is persisted as one flat JSON mapping holding the type defaults,
//! every state value resolved through the accessors, and the generic shape
//! attributes. The exported mapping is a strict superset of what restore
//! needs, so a saved topology can always reconstruct the node.

use crate::error::MalformedStateError;
use crate::node::state::VmNode;
use crate::Result;
use serde_json::{json, Map, Value};
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Flat exported mapping, as written into a saved-topology document.
pub type StateMap = Map<String, Value>;

/// Build the exported mapping for one node.
///
/// State values go through the accessors, so a node the user never edited
/// still exports its full fallback table. `label` is exported from the
/// shared `name` field, matching what the canvas shows after a reload.
pub fn export_state(node: &VmNode) -> StateMap {
    let mut map = StateMap::new();

    // marker so loaders can tell VM nodes from other shapes
    map.insert("vmNode".to_string(), json!(true));

    map.insert("id".to_string(), json!(node.shape.id));
    map.insert("x".to_string(), json!(node.shape.x));
    map.insert("y".to_string(), json!(node.shape.y));
    map.insert("width".to_string(), json!(node.shape.width));
    map.insert("height".to_string(), json!(node.shape.height));

    map.insert("type".to_string(), json!(node.vm_type()));
    map.insert("cpu".to_string(), json!(node.cpu()));
    map.insert("ram".to_string(), json!(node.ram()));
    map.insert("ip".to_string(), json!(node.ip()));
    map.insert("password".to_string(), json!(node.password()));
    map.insert("image".to_string(), json!(node.image()));
    map.insert("name".to_string(), json!(node.name()));
    map.insert("label".to_string(), json!(node.label()));
    map.insert("secondaryDisk".to_string(), json!(node.secondary_disk()));
    map.insert("tertiaryDisk".to_string(), json!(node.tertiary_disk()));

    map.insert("mgmtInterface".to_string(), json!(node.mgmt_interface()));

    let d = &node.defaults;
    map.insert("interfacePrefix".to_string(), json!(d.interface_prefix));
    map.insert("interfaceType".to_string(), json!(d.interface_type));
    map.insert("configurationFile".to_string(), json!(d.domain_config_file));
    map.insert("pciSlotOffset".to_string(), json!(d.pci_slot_offset));
    map.insert(
        "mgmtInterfaceIndex".to_string(),
        json!(d.mgmt_interface_position.index()),
    );
    map.insert(
        "mgmtInterfacePrefix".to_string(),
        json!(d.mgmt_interface_prefix),
    );
    map.insert("mgmtInterfaceType".to_string(), json!(d.mgmt_interface_type));
    map.insert(
        "dummyInterfaceList".to_string(),
        json!(d.dummy_interface_list),
    );
    map.insert(
        "companionInterfaceList".to_string(),
        json!(d.companion_interface_list),
    );
    map.insert(
        "companionInterfaceMirror".to_string(),
        json!(d.companion_interface_mirror),
    );
    map.insert(
        "companionInterfaceMirrorOffset".to_string(),
        json!(d.companion_interface_mirror_offset),
    );
    map.insert("companionType".to_string(), json!(d.companion_type));
    map.insert(
        "secondary_disk_type".to_string(),
        json!(d.secondary_disk_type),
    );
    map.insert("tertiary_disk_type".to_string(), json!(d.tertiary_disk_type));
    map.insert(
        "smbios_product_string".to_string(),
        json!(node.smbios_product_string()),
    );
    map.insert("smbios_version".to_string(), json!(d.smbios_version));
    map.insert(
        "smbios_manufacturer".to_string(),
        json!(d.smbios_manufacturer),
    );
    map.insert("cloud_init_support".to_string(), json!(d.cloud_init_support));

    debug!(name = node.name(), keys = map.len(), "exported node state");
    map
}

/// Apply a previously exported mapping to a node.
///
/// Strict: every state key and shape key must be present with the right
/// type, or the restore fails without touching the node. Both `name` and
/// `label` are restored from the `name` key.
pub fn restore_state(node: &mut VmNode, exported: &StateMap) -> Result<(), MalformedStateError> {
    let image = require_str(exported, "image")?;
    let vm_type = require_str(exported, "type")?;
    let password = require_str(exported, "password")?;
    let cpu = require_u32(exported, "cpu")?;
    let ram = require_u32(exported, "ram")?;
    let ip = require_str(exported, "ip")?;
    let name = require_str(exported, "name")?;
    let secondary_disk = require_str(exported, "secondaryDisk")?;
    let tertiary_disk = require_str(exported, "tertiaryDisk")?;

    let id = require_str(exported, "id")?;
    let x = require_f64(exported, "x")?;
    let y = require_f64(exported, "y")?;
    let width = require_u32(exported, "width")?;
    let height = require_u32(exported, "height")?;

    node.set_image(image);
    node.set_vm_type(vm_type);
    node.set_password(password);
    node.set_cpu(cpu);
    node.set_ram(ram);
    node.set_ip(ip);
    node.set_label(name);
    node.set_name(name);
    node.set_secondary_disk(secondary_disk);
    node.set_tertiary_disk(tertiary_disk);

    node.shape.id = id.to_string();
    node.shape.x = x;
    node.shape.y = y;
    node.shape.width = width;
    node.shape.height = height;

    debug!(name = node.name(), "restored node state");
    Ok(())
}

/// Write an exported mapping to a file as pretty-printed JSON.
pub fn save_state(map: &StateMap, path: &Path) -> Result<()> {
    let f = File::create(path)?;
    serde_json::to_writer_pretty(f, map)?;
    debug!(path = %path.display(), "saved node state");
    Ok(())
}

/// Read an exported mapping back from a file.
pub fn load_state(path: &Path) -> Result<StateMap> {
    let f = File::open(path)?;
    let map: StateMap = serde_json::from_reader(f)?;
    debug!(path = %path.display(), keys = map.len(), "loaded node state");
    Ok(map)
}

fn require<'a>(map: &'a StateMap, key: &str) -> Result<&'a Value, MalformedStateError> {
    map.get(key)
        .ok_or_else(|| MalformedStateError::MissingKey(key.to_string()))
}

fn require_str<'a>(map: &'a StateMap, key: &str) -> Result<&'a str, MalformedStateError> {
    require(map, key)?
        .as_str()
        .ok_or_else(|| MalformedStateError::InvalidValue {
            key: key.to_string(),
            expected: "a string",
        })
}

fn require_u32(map: &StateMap, key: &str) -> Result<u32, MalformedStateError> {
    require(map, key)?
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| MalformedStateError::InvalidValue {
            key: key.to_string(),
            expected: "an unsigned integer",
        })
}

fn require_f64(map: &StateMap, key: &str) -> Result<f64, MalformedStateError> {
    require(map, key)?
        .as_f64()
        .ok_or_else(|| MalformedStateError::InvalidValue {
            key: key.to_string(),
            expected: "a number",
        })
}
