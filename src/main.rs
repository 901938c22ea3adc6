use anyhow::Context;
use clap::Parser;
use demo_kit::app::{execute, exit_code_for, load_config};
use demo_kit::utils::{logger, validation::Validate};
use demo_kit::{CliConfig, Command, DemoError};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if let Err(e) = run(cli).await {
        // 記錄詳細錯誤信息
        match e.downcast_ref::<DemoError>() {
            Some(err) => {
                tracing::error!("❌ {:#} (Category: {:?})", e, err.category());
                eprintln!("❌ {}", err.user_friendly_message());
            }
            None => {
                tracing::error!("❌ {:#}", e);
                eprintln!("❌ {:#}", e);
            }
        }
        std::process::exit(exit_code_for(&e));
    }

    Ok(())
}

async fn run(cli: CliConfig) -> anyhow::Result<()> {
    let CliConfig {
        verbose,
        format,
        command,
    } = cli;

    match command {
        Command::Serve { config, host, port } => serve(verbose, config, host, port).await,
        command => {
            logger::init_cli_logger(verbose);
            tracing::debug!("Command: {:?}", command);
            let output = execute(command, format)?;
            println!("{}", output);
            Ok(())
        }
    }
}

async fn serve(
    verbose: bool,
    config_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    let mut config = load_config(config_path.as_deref())?;

    // 應用命令列覆蓋設定
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    // 驗證配置
    config.validate().context("invalid server configuration")?;

    if config.logging.json {
        logger::init_json_logger(&config.logging.level);
    } else {
        let verbose = verbose || matches!(config.logging.level.as_str(), "debug" | "trace");
        logger::init_cli_logger(verbose);
    }
    tracing::debug!("Server config: {:?}", config);

    demo_kit::server::serve(&config.server)
        .await
        .with_context(|| format!("server on {} failed", config.bind_address()))?;
    Ok(())
}
