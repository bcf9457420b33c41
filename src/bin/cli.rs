use clap::{Args, Parser, Subcommand};
use freelance_profiles::{
    cli::{
        schema::{graphql_schema, openapi_schema},
        seed::list_seed_profiles,
    },
    settings::get_config,
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Seed data related command
    Seed(SeedArgs),
    /// Schema export related command
    Schema(SchemaArgs),
}

#[derive(Debug, Args)]
struct SeedArgs {
    #[command(subcommand)]
    command: SeedCommands,
}

#[derive(Debug, Subcommand)]
enum SeedCommands {
    /// List demo profiles and the test data pool
    List,
}

#[derive(Debug, Args)]
struct SchemaArgs {
    #[command(subcommand)]
    command: SchemaCommands,
}

#[derive(Debug, Subcommand)]
enum SchemaCommands {
    /// Print GraphQL SDL
    Graphql,
    /// Print OpenAPI document as JSON
    Openapi,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Seed(seed_args) => match &seed_args.command {
            SeedCommands::List => {
                for line in list_seed_profiles() {
                    println!("{line}");
                }
            }
        },
        Commands::Schema(schema_args) => match &schema_args.command {
            SchemaCommands::Graphql => {
                println!("{}", graphql_schema());
            }
            SchemaCommands::Openapi => {
                let config = get_config()?;
                println!("{}", openapi_schema(&config));
            }
        },
    }
    Ok(())
}
