//! VM node model: per-type defaults, per-instance state, interface specs

pub mod defaults;
pub mod interface;
pub mod presets;
pub mod shape;
pub mod state;

pub use defaults::VmNodeDefaults;
pub use interface::{MgmtPosition, ResolvedInterfaceSpec, StaticInterfaceSpec};
pub use shape::ShapeAttributes;
pub use state::{VmNode, VmNodeState};
