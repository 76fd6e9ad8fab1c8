mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "stackexchange")]
#[command(about = "Query questions, answers and comments from the Stack Exchange API")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Print each request URL before it is sent
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Application key (overrides STACKEXCHANGE_KEY)
    #[arg(long, global = true)]
    key: Option<String>,

    /// OAuth access token (overrides STACKEXCHANGE_ACCESS_TOKEN)
    #[arg(long, global = true)]
    access_token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List questions
    Questions(commands::questions::QuestionsArgs),
    /// List answers
    Answers(commands::answers::AnswersArgs),
    /// List comments on questions or answers
    Comments(commands::comments::CommentsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("stackexchange=info".parse()?)
                .add_directive("stackexchange_api=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let config = Config::from_env()
        .with_key(cli.key.as_deref())
        .with_access_token(cli.access_token.as_deref());
    let client = config.client(cli.verbose);

    match &cli.command {
        Commands::Questions(args) => commands::questions::run(args, &client, &format).await?,
        Commands::Answers(args) => commands::answers::run(args, &client, &format).await?,
        Commands::Comments(args) => commands::comments::run(args, &client, &format).await?,
    }

    Ok(())
}
