//! Miscellaneous

/// Directive used when `RUST_LOG` is absent and no fallback is given.
#[cfg(feature = "_tracing-tree")]
pub const DEFAULT_DIRECTIVE: &str = "etl_chrono=debug";

/// Registers a global `tracing` subscriber that prints the events of this crate to `stderr`,
/// time stamped by [`crate::calendar::TracingTreeTimer`].
///
/// Directives are read from `RUST_LOG`. `fallback_opt`, or [`DEFAULT_DIRECTIVE`], is used when
/// the variable is absent or invalid.
#[cfg(feature = "_tracing-tree")]
pub fn tracing_tree_init(
  fallback_opt: Option<&str>,
) -> Result<(), tracing_subscriber::util::TryInitError> {
  use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
  let env_filter = match EnvFilter::try_from_default_env() {
    Ok(elem) => elem,
    Err(_) => EnvFilter::new(fallback_opt.unwrap_or(DEFAULT_DIRECTIVE)),
  };
  let layer = tracing_tree::HierarchicalLayer::new(2)
    .with_targets(true)
    .with_thread_ids(true)
    .with_timer(crate::calendar::TracingTreeTimer)
    .with_writer(std::io::stderr);
  tracing_subscriber::registry().with(env_filter).with(layer).try_init()
}
