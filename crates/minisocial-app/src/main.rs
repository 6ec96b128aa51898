//! CLI entry point for the minisocial client.
//!
//! Without a subcommand this runs the interactive menu; each subcommand runs
//! one operation and exits.

use std::io::{self, Write};

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use minisocial_app::config::AppConfig;
use minisocial_app::menu::Menu;
use minisocial_app::{render, SocialNetwork};
use minisocial_core::Attribute;
use minisocial_graph::{GraphClient, MemoryStore, SocialStore};

#[derive(Parser)]
#[command(name = "minisocial")]
#[command(about = "Manage a small social graph of people and friendships in Neo4j")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Config file prefix (default: minisocial).
    #[arg(short, long, default_value = "minisocial", global = true)]
    config: String,

    /// Use a throwaway in-memory graph instead of Neo4j.
    #[arg(long, global = true)]
    in_memory: bool,

    /// Print subcommand results as JSON.
    #[arg(long, global = true)]
    json: bool,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Clone, Subcommand)]
enum Command {
    /// Run the interactive menu (the default).
    Menu,
    /// Add a person.
    AddPerson { name: String, city: String, hobby: String },
    /// List everyone, ordered by name.
    List,
    /// Look up a person by exact name.
    Search { name: String },
    /// Create a friendship between two people.
    Befriend { first: String, second: String },
    /// List a person's friends.
    Friends { name: String },
    /// Delete a friendship between two people.
    Unfriend { first: String, second: String },
    /// Suggest people sharing a city or hobby who are not yet friends.
    Recommend {
        name: String,
        /// Attribute to match on: city or hobby.
        #[arg(long, default_value = "city", value_parser = parse_attribute)]
        by: Attribute,
    },
    /// Count people and friendships.
    Stats,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if cli.json_logs {
        fmt().with_env_filter(filter).with_writer(io::stderr).json().init();
    } else {
        fmt().with_env_filter(filter).with_writer(io::stderr).init();
    }

    if cli.in_memory {
        tracing::info!("Using in-memory graph");
        return run(&cli, SocialNetwork::new(MemoryStore::new())).await;
    }

    let app_config = AppConfig::load(&cli.config)?;
    let graph = GraphClient::connect(&app_config.graph_config()).await?;
    run(&cli, SocialNetwork::new(graph)).await
}

async fn run<S: SocialStore>(cli: &Cli, network: SocialNetwork<S>) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.clone().unwrap_or(Command::Menu) {
        Command::Menu => {
            let stdin = io::stdin();
            Menu::new(&network, stdin.lock(), &mut out).run().await?;
        }
        Command::AddPerson { name, city, hobby } => {
            let person = network.add_person(&name, &city, &hobby).await?;
            if cli.json {
                print_json(&mut out, &person)?;
            } else {
                writeln!(out, "Person '{}' added successfully!", person.name)?;
            }
        }
        Command::List => {
            let people = network.list_people().await?;
            if cli.json {
                print_json(&mut out, &people)?;
            } else {
                render::people(&mut out, "All People", &people, "No people found in the network.")?;
            }
        }
        Command::Search { name } => {
            let found = network.search_person(&name).await?;
            if cli.json {
                print_json(&mut out, &found)?;
            } else {
                render::search_result(&mut out, &name, found.as_ref())?;
            }
        }
        Command::Befriend { first, second } => {
            network.add_friendship(&first, &second).await?;
            if cli.json {
                print_json(&mut out, &render::FriendshipChange::created(&first, &second))?;
            } else {
                writeln!(out, "Friendship created between '{first}' and '{second}'!")?;
            }
        }
        Command::Friends { name } => {
            let friends = network.friends_of(&name).await?;
            if cli.json {
                print_json(&mut out, &friends)?;
            } else {
                render::people(
                    &mut out,
                    &format!("Friends of {name}"),
                    &friends,
                    &format!("{name} has no friends yet."),
                )?;
            }
        }
        Command::Unfriend { first, second } => {
            network.remove_friendship(&first, &second).await?;
            if cli.json {
                print_json(&mut out, &render::FriendshipChange::deleted(&first, &second))?;
            } else {
                writeln!(out, "Friendship deleted between '{first}' and '{second}'!")?;
            }
        }
        Command::Recommend { name, by } => {
            let people = network.recommend(&name, by).await?;
            if cli.json {
                print_json(&mut out, &people)?;
            } else {
                render::people(
                    &mut out,
                    &format!("Recommendations by {by} for {name}"),
                    &people,
                    &format!("No {by} recommendations for {name}."),
                )?;
            }
        }
        Command::Stats => {
            let stats = network.statistics().await?;
            if cli.json {
                print_json(&mut out, &stats)?;
            } else {
                render::statistics(&mut out, &stats)?;
            }
        }
    }

    Ok(())
}

fn parse_attribute(s: &str) -> Result<Attribute, String> {
    s.parse().map_err(|e: minisocial_core::SocialError| e.to_string())
}

fn print_json<T: serde::Serialize>(out: &mut impl Write, value: &T) -> anyhow::Result<()> {
    writeln!(out, "{}", serde_json::to_string(value)?)?;
    Ok(())
}
