pub mod config;
pub mod desktop;
pub mod log;
pub mod pass;
pub mod planner;
pub mod rect;
pub mod schedule;

pub use config::Config;
pub use desktop::{Desktop, Monitor, Placement, WindowResult};
pub use pass::{PassError, PassOptions, PassReport, run_pass};
pub use planner::{MovementLimits, TaskbarState};
pub use rect::{Point, Rect};
pub use schedule::Scheduler;
