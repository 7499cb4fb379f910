//! sumi - AI 署名生成のコマンドラインドライバ
//!
//! バックエンドプロキシとローカルの JSON ストアを AppController に
//! 配線するだけの薄い入口です。判断はすべて sumi-core 側にあります。

use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sumi_core::app::{AppController, JobRunner};
use sumi_core::config::AppConfig;
use sumi_core::domain::{ArtifactId, SignatureStyle};
use sumi_core::impls::{FileArtifactStore, HttpJobGateway};
use sumi_core::ports::{SystemClock, UlidGenerator};

const USAGE: &str = "usage: sumi <command>

commands:
  generate <name> [style]   generate a signature and save it locally
  list                      list saved signatures, newest first
  styles                    list the available style tags
  remove <id>               delete one saved signature
  clear                     delete all saved signatures
  health                    probe the backend health endpoint";

#[tokio::main]
async fn main() -> ExitCode {
    // .env は任意（無ければ環境変数だけで動く）
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = AppConfig::from_env();

    match run(&config, &args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn build_controller(config: &AppConfig) -> AppController {
    let gateway = Arc::new(HttpJobGateway::with_timeout(
        config.api_base_url.clone(),
        config.request_timeout,
    ));
    let store = Arc::new(FileArtifactStore::new(&config.storage_path));
    let runner = JobRunner::new(gateway, config.poll.clone());
    AppController::new(
        store,
        runner,
        Arc::new(UlidGenerator::new(SystemClock)),
        Arc::new(SystemClock),
    )
}

async fn run(config: &AppConfig, args: &[String]) -> Result<(), String> {
    let Some(command) = args.first() else {
        println!("{USAGE}");
        return Ok(());
    };

    match command.as_str() {
        "generate" => {
            let name = args
                .get(1)
                .ok_or("usage: sumi generate <name> [style]")?;
            let style = match args.get(2) {
                Some(tag) => Some(tag.parse::<SignatureStyle>().map_err(|e| e.to_string())?),
                None => None,
            };

            let controller = build_controller(config);
            controller.load_history().await;

            println!("generating signature for \"{name}\"...");
            let url = controller
                .generate_and_store(name, style)
                .await
                .map_err(|e| e.to_string())?;
            println!("{url}");
            Ok(())
        }
        "list" => {
            let controller = build_controller(config);
            controller.load_history().await;

            let state = controller.state().await;
            if state.signatures.is_empty() {
                println!("no saved signatures");
                return Ok(());
            }
            for sig in &state.signatures {
                let style = sig.style.map(|s| s.as_str()).unwrap_or("-");
                println!(
                    "{}  {}  {:<12}  {}  {}",
                    sig.id,
                    sig.created_at.format("%Y-%m-%d %H:%M"),
                    style,
                    sig.prompt,
                    sig.image_url,
                );
            }
            Ok(())
        }
        "styles" => {
            for style in SignatureStyle::ALL {
                println!("{:<13} {}", style.as_str(), style.description());
            }
            Ok(())
        }
        "remove" => {
            let id: ArtifactId = args
                .get(1)
                .ok_or("usage: sumi remove <id>")?
                .parse()
                .map_err(|e: sumi_core::domain::ids::ParseIdError| e.to_string())?;

            let controller = build_controller(config);
            controller.load_history().await;
            controller.remove(id).await.map_err(|e| e.to_string())?;
            println!("removed {id}");
            Ok(())
        }
        "clear" => {
            let controller = build_controller(config);
            controller.clear().await.map_err(|e| e.to_string())?;
            println!("cleared all saved signatures");
            Ok(())
        }
        "health" => {
            let gateway =
                HttpJobGateway::with_timeout(config.api_base_url.clone(), config.request_timeout);
            gateway.health().await.map_err(|e| e.to_string())?;
            println!("backend OK at {}", config.api_base_url);
            Ok(())
        }
        unknown => Err(format!("unknown command: {unknown}\n\n{USAGE}")),
    }
}
