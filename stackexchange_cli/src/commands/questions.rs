use anyhow::Result;
use clap::Args;
use stackexchange_api::Client;

use crate::output::{print_json, print_questions_table, OutputFormat};

use super::{finish, CommonArgs};

#[derive(Args)]
pub struct QuestionsArgs {
    /// Question IDs to fetch (comma-separated). Lists the whole site if omitted.
    #[arg(long, value_delimiter = ',')]
    pub ids: Vec<i64>,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub async fn run(args: &QuestionsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let params = args.common.to_params()?;
    let resp = if args.ids.is_empty() {
        client.questions(&params).await?
    } else {
        client.questions_by_ids(&args.ids, &params).await?
    };
    let questions = finish(resp)?;

    match format {
        OutputFormat::Table => print_questions_table(&questions),
        OutputFormat::Json => print_json(&questions),
    }

    Ok(())
}
