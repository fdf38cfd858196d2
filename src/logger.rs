use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// 初始化日志，默认 info 级别，可通过 RUST_LOG 覆盖
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_target(false)
        .try_init();
}

/// 初始化日志，同时输出到终端和运行日志文件
///
/// # 参数
/// - `log_file_path`: 运行日志文件路径，以追加方式打开
///
/// # 返回
/// 日志文件无法打开时返回 IO 错误；全局日志已初始化过时静默忽略
pub fn init_with_log_file(log_file_path: &str) -> std::io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    let _ = tracing_subscriber::registry()
        .with(default_filter())
        .with(fmt::layer().with_target(false))
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init();

    Ok(())
}
