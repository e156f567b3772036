//! Administrative CLI for the data pool.
//!
//! Run with:
//! ```
//! cargo run -p data-pool -- populate --names 5000
//! cargo run -p data-pool -- stats --detailed
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use data_pool::prelude::*;
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "data-pool", version, about = "Manage pooled synthetic identity records")]
struct Cli {
    /// Pool database file. Overrides the config file and DATA_POOL_DB.
    #[arg(long, global = true, value_name = "PATH")]
    db_path: Option<PathBuf>,

    /// TOML configuration file.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fill the pools up to their target sizes.
    Populate(PopulateArgs),
    /// Report total, used and available rows per pool.
    Stats(StatsArgs),
    /// Clear every usage flag.
    Reset,
    /// Draw one unused record.
    Draw(DrawArgs),
    /// Mark a record as used.
    Mark {
        kind: PoolKind,
        id: i64,
    },
}

#[derive(Args, Debug)]
struct PopulateArgs {
    /// Target name count. When no target is given every pool is populated.
    #[arg(long)]
    names: Option<u64>,
    #[arg(long)]
    cities: Option<u64>,
    #[arg(long)]
    answers: Option<u64>,
    /// Rows per insert transaction.
    #[arg(long)]
    batch_size: Option<usize>,
}

#[derive(Args, Debug)]
struct StatsArgs {
    /// Include per-locale, per-category and per-gender counts.
    #[arg(long, default_value_t = false)]
    detailed: bool,
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct DrawArgs {
    kind: PoolKind,
    #[arg(long, conflicts_with = "category")]
    locale: Option<Locale>,
    #[arg(long)]
    category: Option<Category>,
    /// Mark the drawn record as used.
    #[arg(long, default_value_t = false)]
    mark: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = PoolConfig::load(cli.config.as_deref())?;
    if let Some(db_path) = cli.db_path {
        config.db_path = db_path;
    }
    if let Command::Populate(PopulateArgs {
        batch_size: Some(batch_size),
        ..
    }) = &cli.command
    {
        config.batch_size = *batch_size;
    }
    config.validate()?;

    let manager = PoolManager::open(&config).await?;
    let result = run(&manager, cli.command).await;
    manager.close().await;
    result
}

async fn run(manager: &PoolManager, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Populate(args) => populate(manager, args).await,
        Command::Stats(args) => stats(manager, args).await,
        Command::Reset => {
            manager.reset_all().await?;
            tracing::info!("All usage flags cleared");
            print_stats(&manager.stats().await?);
            Ok(())
        }
        Command::Draw(args) => {
            let filter = args
                .locale
                .map(DrawFilter::Locale)
                .or(args.category.map(DrawFilter::Category));
            match manager.draw(args.kind, args.mark, filter).await? {
                Some(record) => println!("{record}"),
                None => println!("No unused {} rows left", args.kind),
            }
            Ok(())
        }
        Command::Mark { kind, id } => {
            manager.mark_used(kind, id).await?;
            println!("Marked {kind} #{id} as used");
            Ok(())
        }
    }
}

async fn populate(manager: &PoolManager, args: PopulateArgs) -> anyhow::Result<()> {
    let requested = [
        (PoolKind::Names, args.names),
        (PoolKind::Cities, args.cities),
        (PoolKind::SecurityAnswers, args.answers),
    ];
    let defaults = manager.config().targets;

    let plan: Vec<(PoolKind, u64)> = if requested.iter().all(|(_, target)| target.is_none()) {
        PoolKind::ALL
            .into_iter()
            .map(|kind| (kind, defaults.get(kind)))
            .collect()
    } else {
        requested
            .into_iter()
            .filter_map(|(kind, target)| target.map(|t| (kind, t)))
            .collect()
    };

    for (kind, target) in plan {
        let report = manager.populate(kind, target).await?;
        if report.target_met {
            tracing::info!("{}: {} rows (+{})", kind, report.total, report.inserted);
        } else {
            tracing::warn!(
                "{}: {} of {} rows, vocabulary exhausted for {}",
                kind,
                report.total,
                report.target,
                report.exhausted_lanes.join(", ")
            );
        }
    }

    tracing::info!("Population completed!");
    print_stats(&manager.stats().await?);
    Ok(())
}

async fn stats(manager: &PoolManager, args: StatsArgs) -> anyhow::Result<()> {
    let stats = manager.stats().await?;

    if !args.detailed {
        if args.json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        } else {
            print_stats(&stats);
        }
        return Ok(());
    }

    let mut breakdowns = Vec::with_capacity(PoolKind::ALL.len());
    for kind in PoolKind::ALL {
        breakdowns.push((kind, manager.breakdown(kind).await?));
    }
    let genders = manager.gender_counts().await?;

    if args.json {
        let detail: serde_json::Map<String, serde_json::Value> = breakdowns
            .iter()
            .map(|(kind, groups)| {
                let groups: serde_json::Map<String, serde_json::Value> = groups
                    .iter()
                    .map(|(label, count)| (label.clone(), json!(count)))
                    .collect();
                (kind.to_string(), serde_json::Value::Object(groups))
            })
            .collect();
        let genders: serde_json::Map<String, serde_json::Value> = genders
            .iter()
            .map(|(gender, total)| (gender_label(*gender).to_string(), json!(total)))
            .collect();

        let report = json!({
            "totals": stats,
            "breakdown": detail,
            "genders": genders,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_stats(&stats);
    for (kind, groups) in &breakdowns {
        println!();
        let grouping = if *kind == PoolKind::SecurityAnswers {
            "category"
        } else {
            "locale"
        };
        println!("{kind} by {grouping}:");
        for (label, count) in groups {
            println!(
                "  {:<20} {:>8} total {:>8} used {:>8} available",
                label, count.total, count.used, count.available
            );
        }
    }
    println!();
    println!("names by gender:");
    for (gender, total) in &genders {
        println!("  {:<20} {:>8}", gender_label(*gender), total);
    }
    Ok(())
}

fn gender_label(gender: Option<Gender>) -> &'static str {
    gender.map(|g| g.as_str()).unwrap_or("untagged")
}

fn print_stats(stats: &PoolStats) {
    println!("{:<18} {:>8} {:>8} {:>10}", "pool", "total", "used", "available");
    for kind in PoolKind::ALL {
        let count = stats.get(kind);
        println!(
            "{:<18} {:>8} {:>8} {:>10}",
            kind.as_str(),
            count.total,
            count.used,
            count.available
        );
    }
}
