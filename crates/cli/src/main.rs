use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use env_logger::Env;
use photo_sorter_core::{
    app_paths, apply_plan, generate_plan, load_config, save_config, AppConfig, RenamePlan,
    SortOptions,
};

#[derive(Debug, Parser)]
#[command(name = "photo-sorter-cli", version)]
#[command(about = "カメラ写真を撮影日時ベースのフォルダ構成へ整理します")]
struct Cli {
    #[arg(long, global = true, default_value_t = false)]
    debug: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Sort(SortArgs),
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Debug, Subcommand)]
enum ConfigAction {
    Show,
    Init,
}

#[derive(Debug, Args)]
struct SortArgs {
    #[arg(long, default_value = ".")]
    source: String,
    #[arg(long, default_value_t = false)]
    apply: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Sort(args) => cmd_sort(args),
        Commands::Config(config) => match config.action {
            ConfigAction::Show => cmd_config_show(),
            ConfigAction::Init => cmd_config_init(),
        },
    }
}

fn cmd_sort(args: SortArgs) -> Result<()> {
    let config = load_config()?;
    let options = SortOptions {
        source: args.source.into(),
        extensions: config.extensions,
        prefixes: config.prefixes,
    };

    let plan = generate_plan(&options)?;

    match args.output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        OutputFormat::Table => {
            print_table(&plan);
        }
    }

    if !args.apply {
        eprintln!(
            "dry-runモード: 実ファイルは変更していません。移動するには --apply を指定してください。"
        );
        return Ok(());
    }

    let outcome = apply_plan(&plan)?;
    eprintln!("移動完了: {}件", outcome.moved);
    if !outcome.empty_dirs.is_empty() {
        eprintln!("空になったフォルダ {}件:", outcome.empty_dirs.len());
        for dir in &outcome.empty_dirs {
            eprintln!("  {}", dir.display());
        }
    }

    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config = load_config()?;
    let paths = app_paths()?;
    println!("設定ファイル: {}", paths.config_path.display());
    println!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

fn cmd_config_init() -> Result<()> {
    save_config(&AppConfig::default())?;
    let paths = app_paths()?;
    println!("設定ファイルを作成しました: {}", paths.config_path.display());
    Ok(())
}

fn print_table(plan: &RenamePlan) {
    println!("元ファイル -> 移動先");
    for entry in &plan.entries {
        println!("{} -> {}", entry.source.display(), entry.target.display());
    }

    println!(
        "\n集計: scanned={} candidates={} unsupported_skip={} name_skip={} entries={}",
        plan.stats.scanned_files,
        plan.stats.candidates,
        plan.stats.skipped_unsupported,
        plan.stats.skipped_named,
        plan.entries.len()
    );
}
