use anyhow::{bail, Result};
use clap::Args;
use stackexchange_api::Client;

use crate::output::{print_comments_table, print_json, OutputFormat};

use super::{finish, CommonArgs};

#[derive(Args)]
pub struct CommentsArgs {
    /// Comments on these questions (comma-separated IDs)
    #[arg(long, value_delimiter = ',')]
    pub question: Vec<i64>,

    /// Comments on these answers (comma-separated IDs)
    #[arg(long, value_delimiter = ',')]
    pub answer: Vec<i64>,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub async fn run(args: &CommentsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let params = args.common.to_params()?;
    let resp = match (args.question.is_empty(), args.answer.is_empty()) {
        (false, true) => client.question_comments(&args.question, &params).await?,
        (true, false) => client.answer_comments(&args.answer, &params).await?,
        _ => bail!("exactly one of --question or --answer is required"),
    };
    let comments = finish(resp)?;

    match format {
        OutputFormat::Table => print_comments_table(&comments),
        OutputFormat::Json => print_json(&comments),
    }

    Ok(())
}
