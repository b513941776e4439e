use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fintrack::api::ApiClient;
use fintrack::cli::{
    handle_account_command, handle_automation_command, handle_budget_command,
    handle_category_command, handle_commitment_command, handle_credit_card_command,
    handle_dashboard, handle_debit_card_command, handle_delete_account, handle_export,
    handle_investment_command, handle_options_command, handle_secrets, handle_setup,
    handle_sip_command, handle_transaction_command, handle_vault_command, handle_wipe,
};
use fintrack::config::{paths::FintrackPaths, session::Session, settings::Settings};
use fintrack::context::FinanceContext;
use fintrack::notify::ConsoleNotifier;
use fintrack::query::QueryClient;

#[derive(Parser)]
#[command(
    name = "fintrack",
    author = "Kaylee Beyene",
    version,
    about = "Terminal client for a personal finance tracking backend",
    long_about = "fintrack talks to a personal finance backend: bank accounts, \
                  cards, transactions, budgets, commitments, a savings vault and \
                  investments, plus the analytics dashboard built on top of them."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Bank account management commands
    #[command(subcommand)]
    Account(fintrack::cli::AccountCommands),

    /// Credit card management commands
    #[command(subcommand)]
    CreditCard(fintrack::cli::CreditCardCommands),

    /// Debit card management commands
    #[command(subcommand)]
    DebitCard(fintrack::cli::DebitCardCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(fintrack::cli::TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(fintrack::cli::BudgetCommands),

    /// Recurring commitment commands
    #[command(subcommand)]
    Commitment(fintrack::cli::CommitmentCommands),

    /// Savings vault commands
    #[command(subcommand)]
    Vault(fintrack::cli::VaultCommands),

    /// Investment holding commands
    #[command(subcommand)]
    Investment(fintrack::cli::InvestmentCommands),

    /// Systematic investment plan commands
    #[command(subcommand)]
    Sip(fintrack::cli::SipCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(fintrack::cli::CategoryCommands),

    /// Edit the option lists offered by the forms
    #[command(subcommand)]
    Options(fintrack::cli::OptionsCommands),

    /// Automation rules
    #[command(subcommand)]
    Automation(fintrack::cli::AutomationCommands),

    /// Analytics dashboard
    Dashboard(fintrack::cli::DashboardArgs),

    /// First-run setup: starter account and categories
    Setup(fintrack::cli::SetupArgs),

    /// Export your records
    Export(fintrack::cli::ExportArgs),

    /// Permanently delete your account
    DeleteAccount {
        /// Skip the confirmation question (the password is still asked)
        #[arg(long)]
        yes: bool,
    },

    /// Generate backend deployment secrets
    Secrets,

    /// Delete every record in your account
    Wipe {
        /// Skip the confirmation question
        #[arg(long)]
        yes: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let command = match cli.command {
        Some(Commands::Secrets) => {
            handle_secrets()?;
            return Ok(());
        }
        Some(command) => command,
        None => {
            println!("fintrack - personal finance from the terminal");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack dashboard' for an overview.");
            return Ok(());
        }
    };

    // Initialize paths and settings
    let paths = FintrackPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    if let Commands::Config = command {
        let session = Session::load(&paths)?;
        println!("fintrack Configuration");
        println!("======================");
        println!("Config directory: {}", paths.base_dir().display());
        println!("Settings file:    {}", paths.settings_file().display());
        println!("Session file:     {}", paths.session_file().display());
        println!("Export directory: {}", paths.export_dir().display());
        println!();
        println!("Settings:");
        println!("  API base URL:    {}", settings.api.base_url);
        println!("  Request timeout: {}s", settings.api.timeout_secs);
        println!("  Currency:        {}", settings.currency_symbol);
        println!(
            "  Signed in:       {}",
            if session.is_authenticated() { "yes" } else { "no" }
        );
        return Ok(());
    }

    // Initialize the backend client and shared state
    let session = Arc::new(Session::load(&paths)?);
    let api = ApiClient::from_settings(&settings.api, session)?;
    let notifier = Arc::new(ConsoleNotifier::new().without_problems());
    let ctx = FinanceContext::new(api, Arc::new(QueryClient::new()), notifier, settings);

    match command {
        Commands::Account(cmd) => handle_account_command(&ctx, cmd).await?,
        Commands::CreditCard(cmd) => handle_credit_card_command(&ctx, cmd).await?,
        Commands::DebitCard(cmd) => handle_debit_card_command(&ctx, cmd).await?,
        Commands::Transaction(cmd) => handle_transaction_command(&ctx, cmd).await?,
        Commands::Budget(cmd) => handle_budget_command(&ctx, cmd).await?,
        Commands::Commitment(cmd) => handle_commitment_command(&ctx, cmd).await?,
        Commands::Vault(cmd) => handle_vault_command(&ctx, cmd).await?,
        Commands::Investment(cmd) => handle_investment_command(&ctx, cmd).await?,
        Commands::Sip(cmd) => handle_sip_command(&ctx, cmd).await?,
        Commands::Category(cmd) => handle_category_command(&ctx, cmd).await?,
        Commands::Options(cmd) => handle_options_command(&ctx, cmd).await?,
        Commands::Automation(cmd) => handle_automation_command(&ctx, cmd).await?,
        Commands::Dashboard(args) => handle_dashboard(&ctx, args).await?,
        Commands::Setup(args) => handle_setup(&ctx, args).await?,
        Commands::Export(args) => handle_export(&ctx, args).await?,
        Commands::DeleteAccount { yes } => handle_delete_account(&ctx, &paths, yes).await?,
        Commands::Wipe { yes } => handle_wipe(&ctx, yes).await?,
        Commands::Secrets | Commands::Config => {}
    }

    Ok(())
}
