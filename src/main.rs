use anyhow::Result;
use clap::{Parser, Subcommand};

use horizon::cli::{
    handle_account_command, handle_behavior_command, handle_category_command, handle_goal_command,
    handle_project_command, handle_scenario_command, handle_transaction_command,
};
use horizon::config::{paths::HorizonPaths, settings::Settings};
use horizon::services::PlanningService;
use horizon::storage::Storage;

#[derive(Parser)]
#[command(
    name = "horizon",
    author = "Kaylee Beyene",
    version,
    about = "Scenario-based personal finance projections",
    long_about = "Horizon projects your finances forward from the way you actually \
                  spend. It averages recent history into a baseline, lets you describe \
                  what-if scenarios on top of it, and checks savings goals against the \
                  projected net worth."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize data storage and the base scenario
    Init,

    /// Show current configuration and paths
    Config,

    /// Account management commands
    #[command(subcommand)]
    Account(horizon::cli::AccountCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(horizon::cli::CategoryCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(horizon::cli::TransactionCommands),

    /// Scenario management commands
    #[command(subcommand)]
    Scenario(horizon::cli::ScenarioCommands),

    /// Behavior changes applied by a scenario
    #[command(subcommand)]
    Behavior(horizon::cli::BehaviorCommands),

    /// Net worth goals of a scenario
    #[command(subcommand)]
    Goal(horizon::cli::GoalCommands),

    /// Baselines, projections and comparisons
    #[command(subcommand)]
    Project(horizon::cli::ProjectCommands),
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = HorizonPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    settings.validate()?;

    // Initialize storage
    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing Horizon at: {}", paths.data_dir().display());
            horizon::storage::init::initialize_storage(&paths)?;
            storage.load_all()?;
            let base = PlanningService::new(&storage).ensure_base_scenario(settings.default_horizon_years)?;
            settings.setup_completed = true;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!(
                "Base scenario '{}' projects {} year(s) of your current behavior.",
                base.name, base.horizon_years
            );
            println!("Starter income and expense categories have been created.");
            println!();
            println!("Run 'horizon account create' to add an account.");
        }
        Some(Commands::Config) => {
            println!("Horizon Configuration");
            println!("=====================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Baseline months:  {}", settings.baseline_months);
            println!("  Default horizon:  {} year(s)", settings.default_horizon_years);
            println!("  Setup completed:  {}", settings.setup_completed);
        }
        Some(Commands::Account(cmd)) => handle_account_command(&storage, cmd)?,
        Some(Commands::Category(cmd)) => handle_category_command(&storage, cmd)?,
        Some(Commands::Transaction(cmd)) => handle_transaction_command(&storage, cmd)?,
        Some(Commands::Scenario(cmd)) => handle_scenario_command(&storage, &settings, cmd)?,
        Some(Commands::Behavior(cmd)) => handle_behavior_command(&storage, cmd)?,
        Some(Commands::Goal(cmd)) => handle_goal_command(&storage, cmd)?,
        Some(Commands::Project(cmd)) => handle_project_command(&storage, &settings, cmd)?,
        None => {
            println!("Horizon - Scenario-based personal finance projections");
            println!();
            println!("Run 'horizon --help' for usage information.");
            println!("Run 'horizon init' to get started.");
        }
    }

    Ok(())
}
