//! Debug logging to stderr, enabled with QUIJY_DEBUG=1.
use std::sync::OnceLock;

static ENABLED: OnceLock<bool> = OnceLock::new();

pub fn is_enabled() -> bool {
    *ENABLED.get_or_init(|| std::env::var("QUIJY_DEBUG").ok().as_deref() == Some("1"))
}

/// Short tag for a log line: `quijy::core::kron` logs as `[quijy:kron]`.
pub fn tag(module: &str) -> String {
    let leaf = module.rsplit("::").next().unwrap_or(module);
    if leaf == "quijy" {
        "[quijy]".to_string()
    } else {
        format!("[quijy:{leaf}]")
    }
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        if $crate::core::debug::is_enabled() {
            eprintln!("{} {}", $crate::core::debug::tag(module_path!()), format_args!($($arg)*));
        }
    }};
}
