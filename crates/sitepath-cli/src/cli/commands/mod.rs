//! CLI command handlers. Each command is in its own file.

mod build;
mod change_locale;
mod get_param;
mod is_external;
mod locale;
mod normalize;
mod remove_locale;
mod segments;
mod set_param;
mod sync;

pub use build::{run_build, BuildArgs};
pub use change_locale::run_change_locale;
pub use get_param::run_get_param;
pub use is_external::run_is_external;
pub use locale::run_locale;
pub use normalize::run_normalize;
pub use remove_locale::run_remove_locale;
pub use segments::run_segments;
pub use set_param::run_set_param;
pub use sync::{run_sync, SyncArgs};
