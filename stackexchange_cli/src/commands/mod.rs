//! CLI subcommand implementations.

pub mod answers;
pub mod comments;
pub mod questions;

use anyhow::{anyhow, bail, Result};
use clap::Args;
use stackexchange_api::{Order, Params, Response, Sort, STACK_OVERFLOW};

/// Site, paging and sorting flags shared by every subcommand.
#[derive(Args)]
pub struct CommonArgs {
    /// Site to query (e.g. stackoverflow, superuser, math)
    #[arg(long, default_value = STACK_OVERFLOW)]
    pub site: String,

    /// Sort field: activity, creation, hot, week, month, votes, or any other key the API accepts
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort order: asc or desc
    #[arg(long)]
    pub order: Option<String>,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Results per page
    #[arg(long, default_value = "20")]
    pub page_size: i64,

    /// Only items with all of these tags (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub tagged: Vec<String>,

    /// Filter controlling which fields are returned (e.g. withbody)
    #[arg(long)]
    pub filter: Option<String>,
}

impl CommonArgs {
    pub fn to_params(&self) -> Result<Params> {
        let mut params = Params::new(&self.site)
            .with_page(self.page)
            .with_page_size(self.page_size)
            .with_tagged(&self.tagged.join(";"));

        if let Some(ref sort) = self.sort {
            let sort = sort
                .parse::<Sort>()
                .map_err(|_| anyhow!("--sort cannot be empty"))?;
            params = params.with_sort(sort);
        }
        if let Some(ref order) = self.order {
            let order = order
                .parse::<Order>()
                .map_err(|_| anyhow!("unknown order '{}', expected asc or desc", order))?;
            params = params.with_order(order);
        }
        if let Some(ref filter) = self.filter {
            params = params.with_filter(filter);
        }
        Ok(params)
    }
}

/// Reports paging and quota on stderr and turns an API-reported error into
/// an `Err`.
pub fn finish<T>(resp: Response<Vec<T>>) -> Result<Vec<T>> {
    let wrapper = &resp.wrapper;
    if let Some(err) = wrapper.api_error() {
        bail!("API error {} ({}): {}", err.id, err.name, err.message);
    }

    eprintln!(
        "{} items{} (quota {}/{})",
        resp.items.len(),
        if wrapper.has_more { ", more available" } else { "" },
        wrapper.quota_remaining,
        wrapper.quota_max
    );
    if let Some(backoff) = wrapper.backoff() {
        tracing::warn!("API requested a backoff of {}s before the next call", backoff.as_secs());
    }

    Ok(resp.items)
}
