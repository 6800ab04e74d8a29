pub mod controls;
pub mod enablement;

pub use controls::{ControlSpec, control_row, skill_row};
pub use enablement::EnabledIds;
