pub mod args;
pub mod status;

pub use args::{parse_runtime_args, OutputFormat, RuntimeArgs, USAGE};
pub use status::emit_fixture_status;
