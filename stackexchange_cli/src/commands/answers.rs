use anyhow::{bail, Result};
use clap::Args;
use stackexchange_api::Client;

use crate::output::{print_answers_table, print_json, OutputFormat};

use super::{finish, CommonArgs};

#[derive(Args)]
pub struct AnswersArgs {
    /// Answer IDs to fetch (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub ids: Vec<i64>,

    /// List the answers to these questions instead (comma-separated IDs)
    #[arg(long, value_delimiter = ',')]
    pub question: Vec<i64>,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub async fn run(args: &AnswersArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let params = args.common.to_params()?;
    let resp = match (args.ids.is_empty(), args.question.is_empty()) {
        (false, false) => bail!("--ids and --question cannot be combined"),
        (false, true) => client.answers_by_ids(&args.ids, &params).await?,
        (true, false) => client.question_answers(&args.question, &params).await?,
        (true, true) => client.answers(&params).await?,
    };
    let answers = finish(resp)?;

    match format {
        OutputFormat::Table => print_answers_table(&answers),
        OutputFormat::Json => print_json(&answers),
    }

    Ok(())
}
