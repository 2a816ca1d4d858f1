use clap::{Parser, Subcommand};
use colored::*;
use roster_client::{new_user_from_input, ClientError, RosterClient};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "List and register users on a roster server", long_about = None)]
struct Cli {
    /// Server base URL
    #[arg(short, long, env = "ROSTER_SERVER_URL", default_value = "http://localhost:3000")]
    server: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show every registered user
    List,
    /// Register a new user
    Add {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        email: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Only warnings and errors unless RUST_LOG says otherwise
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let client = RosterClient::new(cli.server);

    match cli.command {
        Command::List => list(&client).await?,
        Command::Add { name, email } => add(&client, name, email).await?,
    }

    Ok(())
}

async fn list(client: &RosterClient) -> Result<(), ClientError> {
    let users = client.list_users().await?;

    println!("{}", "📋 Registered users".bold().cyan());
    if users.is_empty() {
        println!("{}", "📭 No users registered yet".dimmed());
        return Ok(());
    }

    for user in users {
        println!(
            "{} {} <{}>",
            format!("#{}", user.id).yellow(),
            user.name.bold(),
            user.email
        );
    }
    Ok(())
}

async fn add(
    client: &RosterClient,
    name: String,
    email: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let new_user = new_user_from_input(name, email)?;

    match client.create_user(&new_user).await {
        Ok(user) => {
            println!("{} {}", "✅ Registered".green(), format!("#{}", user.id).yellow());
            println!("   {} <{}>", user.name.bold(), user.email);
            Ok(())
        }
        Err(ClientError::Validation(errors)) => {
            for error in &errors.detail {
                eprintln!("{} {}", "❌".red(), error);
            }
            Err(ClientError::Validation(errors).into())
        }
        Err(e) => Err(e.into()),
    }
}
