use cartsync_app_core::SyncOptions;
use cartsync_cli::{commands, CliResolution};
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    #[arg(long, global = true, default_value = cartsync_config::DEFAULT_CART_ENDPOINT)]
    endpoint: String,
    #[arg(long, global = true, value_enum, default_value_t = CliResolution::Latest)]
    resolution: CliResolution,
    #[arg(long, global = true, help = "Leave the cart marked changed after a successful sync")]
    keep_changed: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and print the remote cart
    Show,
    /// Add units of a product and sync the cart
    Add {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: f64,
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove one unit of a product and sync the cart
    Remove {
        #[arg(long)]
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let options = SyncOptions {
        resolution: cli.resolution.into(),
        reset_changed_on_success: !cli.keep_changed,
    };
    let endpoint = cli.endpoint.as_str();

    let vm = match cli.command {
        Commands::Show => commands::cmd_show(endpoint, options).await?,
        Commands::Add {
            id,
            name,
            price,
            quantity,
        } => commands::cmd_add(endpoint, options, id, name, price, quantity).await?,
        Commands::Remove { id } => commands::cmd_remove(endpoint, options, id).await?,
    };

    print!("{}", commands::render(&vm));
    Ok(())
}
