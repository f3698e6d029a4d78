use clap::Parser;
use tracing_subscriber::EnvFilter;
use vectorizer::{cli, config, convert, error};
use cli::{Cli, Commands};
use config::Config;
use convert::ConvertOptions;
use error::Result;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Convert { input, output, force, no_progress } => {
            println!("⚡ vectorizer - PNG → SVG\n");

            let options = ConvertOptions {
                output,
                force: force || config.overwrite,
                schedule: config.schedule(),
                show_progress: !no_progress,
            };
            let outcome = convert::convert_file(&input, &options).await?;

            println!(
                "\n✔ 元画像: {}x{}px ({} bytes)",
                outcome.dimensions.0, outcome.dimensions.1, outcome.source_len
            );
            println!("✔ SVGを保存: {} ({} bytes)", outcome.output.display(), outcome.svg_len);
            println!("\n✅ 変換完了");
        }

        Commands::Config { set_progress_interval, reset, show } => {
            let mut config = if reset { Config::default() } else { config };

            if let Some(interval_ms) = set_progress_interval {
                config.set_progress_interval(interval_ms)?;
            }

            if reset || set_progress_interval.is_some() {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || (!reset && set_progress_interval.is_none()) {
                let schedule = config.schedule();
                println!("設定:");
                println!("  ティック間隔: {}ms", schedule.interval_ms);
                println!("  増分: {}%", schedule.step);
                println!("  上限: {}%", schedule.hold_at);
                println!("  常に上書き: {}", if config.overwrite { "はい" } else { "いいえ" });
            }
        }
    }

    Ok(())
}
