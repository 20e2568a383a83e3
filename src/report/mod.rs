//! Human-readable reports built on the registry query API
//!
//! - overview: full catalog overview, tool/workflow detail, validation summary
//! - guide: welcome banner, quick-start guide, tool chooser
//! - inventory: data files available on disk

mod guide;
mod inventory;
mod overview;

pub use guide::{render_quick_start, render_tool_chooser, render_welcome};
pub use inventory::{DataInventory, DirectoryScan};
pub use overview::{
    DataOrganization, render_overview, render_tool_detail, render_tool_list, render_validation,
    render_workflow_detail, render_workflows, tools_json, workflows_json,
};
