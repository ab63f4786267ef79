use clap::Parser;
use dialoguer::Confirm;
use print_shop::{checkout, cli, config, error, quote, scanner};
use print_shop_common::PrintSize;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use std::path::PathBuf;
use std::time::Duration;

fn load_order(
    config: &Config,
    paths: &[PathBuf],
    sizes: &[PrintSize],
    verbose: bool,
) -> Result<print_shop_common::Order<quote::FilePreview>> {
    println!("[1/2] 写真を確認中...");
    let photos = scanner::collect_order_photos(paths)?;

    if verbose {
        for photo in &photos {
            println!(
                "  - {} ({}, {} bytes)",
                photo.meta.name, photo.meta.mime_type, photo.meta.byte_len
            );
        }
    }

    let order = quote::build_order(&config.shop, photos, sizes)?;
    println!("✔ {}枚の写真を受付\n", order.len());
    Ok(order)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = match cli.command {
        // 設定コマンドは壊れた設定ファイルでも実行できるようにする
        Commands::Config { .. } => {
            let (config, load_error) = Config::load_or_default();
            if let Some(e) = load_error {
                eprintln!("⚠️ 設定を読み込めないためデフォルト値を使用します: {}", e);
            }
            config
        }
        _ => Config::load()?,
    };

    match cli.command {
        Commands::Quote { paths, size, json } => {
            if json {
                let photos = scanner::collect_order_photos(&paths)?;
                let order = quote::build_order(&config.shop, photos, &size)?;
                println!("{}", serde_json::to_string_pretty(&order.summary())?);
                return Ok(());
            }

            println!("📸 print-shop - 見積もり\n");
            let order = load_order(&config, &paths, &size, cli.verbose)?;

            println!("[2/2] 見積もり");
            print!("{}", quote::render_summary(&order.summary()));
        }

        Commands::Checkout { paths, size, yes } => {
            println!("💳 print-shop - 注文\n");
            let order = load_order(&config, &paths, &size, cli.verbose)?;
            print!("{}", quote::render_summary(&order.summary()));
            println!();

            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Place order for {}?", order.total()))
                    .default(true)
                    .interact()?;
                if !confirmed {
                    println!("注文を中止しました");
                    return Ok(());
                }
            }

            println!("[2/2] 決済処理中...");
            let delay = Duration::from_millis(config.shop.checkout_delay_ms);
            match checkout::run_checkout(&order, delay).await? {
                Some(receipt) => {
                    println!("\n{}\n", receipt);
                    println!("注文日時: {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
                    println!("* This is a demo. No actual payment was processed.");
                }
                None => println!("⚠️ 決済をキャンセルしました"),
            }
        }

        Commands::Config { show, max_items, max_file_mb, notice_timeout_ms, checkout_delay_ms } => {
            let mut changed = false;

            if let Some(value) = max_items {
                config.shop.max_items = value;
                changed = true;
            }
            if let Some(value) = max_file_mb {
                config.shop.set_max_file_mb(value)?;
                changed = true;
            }
            if let Some(value) = notice_timeout_ms {
                config.shop.notice_timeout_ms = value;
                changed = true;
            }
            if let Some(value) = checkout_delay_ms {
                config.shop.checkout_delay_ms = value;
                changed = true;
            }

            if changed {
                let path = config.save()?;
                println!("✔ 設定を保存: {}", path.display());
            }

            if show || !changed {
                println!("{}", serde_json::to_string_pretty(&config.shop)?);
            }
        }
    }

    Ok(())
}
