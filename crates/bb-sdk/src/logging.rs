//! 日志初始化
//!
//! 库内部只通过 `tracing` 宏记录日志；应用在启动时调用一次 [`init_logger`]。
//! `log` crate 的记录经 `tracing_log::LogTracer` 转入同一个订阅者。
//!
//! ```rust
//! // RUST_LOG=bb_motor=debug 查看单位重建
//! bb_sdk::init_logger();
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::EnvFilter;

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// 默认过滤级别（`RUST_LOG` 未设置时）
pub const DEFAULT_FILTER: &str = "info";

/// 以 `RUST_LOG`（缺省 `info`）初始化日志
///
/// 第一次成功安装订阅者时返回 `true`；之后的调用不做任何事并返回 `false`。
pub fn init_logger() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter)
}

/// 以给定过滤表达式初始化日志（忽略 `RUST_LOG`）
///
/// 表达式非法时回退到 [`DEFAULT_FILTER`]。
pub fn init_logger_with(filter: &str) -> bool {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter)
}

fn install(filter: EnvFilter) -> bool {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return false;
    }
    // 其他组件可能已经安装了 log 桥接或全局订阅者，此时沿用已有的
    let _ = tracing_log::LogTracer::init();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .finish();
    let installed = tracing::subscriber::set_global_default(subscriber).is_ok();
    if installed {
        log::debug!("bb-sdk logger initialized");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let _first = init_logger_with("debug");
        assert!(!init_logger());
        assert!(!init_logger_with("trace"));
    }
}
