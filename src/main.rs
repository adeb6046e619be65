use aquasense::cache::LookupCache;
use aquasense::history::SearchHistory;
use aquasense::lookup::LookupChain;
use aquasense::notify::{LogNotifier, Notification, Notifier, StoreNotifier};
use aquasense::store::{JsonFileStore, PlantStore};
use aquasense::{cli, config, error, PlantManager, PlantQuery};
use aquasense_common::{
    advise, is_high_temperature, is_valid_moisture, search_local, suggested_names, Category, ContainerType,
};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use std::sync::Arc;
use std::time::Duration;

/// ログ出力とストアの両方へ送る通知先
struct CliNotifier {
    log: LogNotifier,
    store: StoreNotifier<JsonFileStore>,
}

#[async_trait::async_trait]
impl Notifier for CliNotifier {
    async fn send(&self, notification: Notification) -> bool {
        self.log.send(notification.clone()).await;
        self.store.send(notification).await
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();
}

fn spinner(message: String) -> indicatif::ProgressBar {
    let pb = indicatif::ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("✘ {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let data_dir = match cli.data_dir.clone() {
        Some(dir) => dir,
        None => config.data_dir()?,
    };

    let store = Arc::new(JsonFileStore::open(&data_dir)?);
    let notifier = CliNotifier {
        log: LogNotifier,
        store: StoreNotifier::new(store.clone()),
    };
    let lookup = LookupChain::from_config(&config)?;
    let mut manager = PlantManager::new(lookup, store.clone(), notifier).with_data_dir(data_dir.clone());

    match cli.command {
        Commands::Add { name, pot, ground } => {
            println!("🌱 aquasense - เพิ่มต้นไม้\n");

            let container = if pot {
                ContainerType::Pot
            } else if ground {
                ContainerType::Ground
            } else {
                config.default_container
            };

            let pb = spinner(format!("กำลังค้นหาข้อมูล \"{}\"...", name.trim()));
            let result = manager.add_plant(&PlantQuery::new(name, container)).await;
            pb.finish_and_clear();
            let record = result?;

            println!("✔ เพิ่ม \"{}\" สำเร็จ!", record.display_name);
            println!("  หมวด: {}", record.category);
            println!("  ดิน: {}", record.soil);
            println!("  แสง: {}", record.light);
            println!("  น้ำ: {} ({}ml/วัน, {})", record.water_level, record.water_ml, record.container_type);
        }

        Commands::List { category, json } => {
            let filter = category.as_deref().map(str::parse::<Category>).transpose()?;
            let plants: Vec<_> = manager
                .list_plants()
                .await?
                .into_iter()
                .filter(|p| filter.map_or(true, |c| p.record.category == c))
                .collect();

            if json {
                let records: Vec<_> = plants.iter().map(|p| &p.record).collect();
                println!("{}", serde_json::to_string_pretty(&records)?);
                return Ok(());
            }

            if plants.is_empty() {
                println!("ยังไม่มีต้นไม้");
            }
            for p in &plants {
                println!(
                    "  [{}] {} - {} / {} / {}ml ({})",
                    p.id, p.record.display_name, p.record.category, p.record.light, p.record.water_ml, p.record.container_type
                );
            }

            let summary = manager.summary().await?;
            println!("\n合計: {}件, 水量合計: {}ml/วัน", summary.total, summary.water_sum_ml);
            if let Some(selected) = manager.selected_plant().await? {
                println!("自動水やり: {}", selected);
            }
        }

        Commands::Remove { id, yes } => {
            if !yes {
                let confirmed = dialoguer::Confirm::new()
                    .with_prompt(format!("ยืนยันการลบ \"{}\"?", id))
                    .default(false)
                    .interact()
                    .unwrap_or(false);
                if !confirmed {
                    println!("キャンセルしました");
                    return Ok(());
                }
            }
            let removed = manager.remove_plant(&id).await?;
            println!("✔ ลบ \"{}\" สำเร็จ", removed.record.display_name);
        }

        Commands::Select { name } => {
            manager.select_for_auto_watering(&name).await?;
            println!("✔ ตั้งค่ารดน้ำอัตโนมัติสำหรับ \"{}\"", name.trim());
        }

        Commands::Stop => {
            manager.stop_auto_watering().await?;
            println!("✔ ยกเลิกการเลือกรดน้ำอัตโนมัติแล้ว");
        }

        Commands::Advise { soil, temp } => {
            if !is_valid_moisture(soil) {
                println!("✘ ค่าความชื้นดินไม่ถูกต้อง: {}%", soil);
                manager
                    .notify(Notification::system_error("SENSOR", &format!("soil={}%", soil)))
                    .await;
                return Ok(());
            }

            let advice = advise(soil);
            println!("{}", advice.status());
            println!("  {}", advice.message(soil));

            if let Some(selected) = store.selected_plant().await? {
                manager.notify_moisture(&selected, soil).await;
            }
            if let Some(t) = temp {
                println!("  อุณหภูมิ: {}°C", t);
                if is_high_temperature(t) {
                    manager.notify(Notification::high_temperature(t)).await;
                }
            }
        }

        Commands::Suggest { name } => match name {
            Some(name) => match search_local(&name) {
                Some(plant) => {
                    println!("{} ({:?})", plant.name, plant.source);
                    println!("  {}", plant.description);
                    println!("  ดิน: {} / แสง: {} / น้ำ: {} ({}ml/วัน)", plant.soil, plant.sunlight, plant.watering, plant.water_per_day);
                }
                None => println!("ไม่พบ \"{}\" ในรายการแนะนำ", name.trim()),
            },
            None => {
                for n in suggested_names() {
                    println!("  {}", n);
                }
            }
        },

        Commands::History => {
            let history = SearchHistory::load(&data_dir);
            for (i, item) in history.items().iter().enumerate() {
                println!("  {}) {}", i + 1, item);
            }
        }

        Commands::Cache { clear, info } => {
            let cache_path = LookupCache::cache_path(&data_dir);

            if info || !clear {
                if cache_path.exists() {
                    let cache = LookupCache::load(&data_dir);
                    println!("キャッシュ情報:");
                    println!("  パス: {}", cache_path.display());
                    println!("  件数: {}", cache.len());
                    if let Ok(meta) = std::fs::metadata(&cache_path) {
                        println!("  サイズ: {} bytes", meta.len());
                    }
                } else {
                    println!("キャッシュファイルが存在しません: {}", cache_path.display());
                }
            }

            if clear {
                match LookupCache::clear(&data_dir) {
                    Ok(true) => println!("✔ キャッシュを削除しました: {}", cache_path.display()),
                    Ok(false) => println!("キャッシュファイルが存在しません"),
                    Err(e) => println!("キャッシュ削除エラー: {}", e),
                }
            }
        }

        Commands::Config { set_api_key, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ APIキーを設定しました");
            }

            if show {
                println!("設定:");
                println!("  Perenual: {}", config.perenual_base_url);
                println!("  Wikipedia: {}", config.wikipedia_domain);
                println!("  タイムアウト: {}秒", config.request_timeout_seconds);
                println!("  データ: {}", data_dir.display());
                println!("  既定の植え付け: {}", config.default_container);
                println!("  APIキー: {}", if config.perenual_api_key().is_some() { "設定済み" } else { "未設定" });
            }
        }
    }

    Ok(())
}
