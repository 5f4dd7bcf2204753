//! UTAU Voicebank - 读取音源目录并输出 JSON
//!
//! 用法: `utau-voicebank [音源根目录]`
//! 未提供参数时使用配置中的 `voicebank.root`

use std::io::Write;

use utau_voicebank::config::{load_config, print_config};
use utau_voicebank::read_voicebank;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志（输出到 stderr，stdout 留给 JSON）
    let log_filter = format!("{},utau_voicebank={}", config.log.level, config.log.level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    print_config(&config);

    let root = std::env::args_os()
        .nth(1)
        .map(Into::into)
        .or_else(|| config.voicebank.root.clone())
        .ok_or_else(|| anyhow::anyhow!("No voicebank root given (argument or UTAU_VOICEBANK__ROOT)"))?;

    let voicebank = read_voicebank(root).await?;

    let json = if config.output.pretty {
        serde_json::to_string_pretty(&voicebank)?
    } else {
        serde_json::to_string(&voicebank)?
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", json)?;

    Ok(())
}
