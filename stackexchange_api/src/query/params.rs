//! The parameter set shared by every API request.

use std::collections::BTreeMap;

use crate::ids::join_ids;

use super::sort::{Order, Sort};

/// Site parameter for Stack Overflow.
pub const STACK_OVERFLOW: &str = "stackoverflow";

/// Common set of arguments that can be sent with an API request.
///
/// Zero and empty values are left out of the query string, except `site`,
/// which the API always requires.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    /// Site identifier, e.g. [`STACK_OVERFLOW`].
    pub site: String,

    pub sort: Option<Sort>,
    pub order: Option<Order>,
    /// Page number (1-indexed). Zero uses the API default.
    pub page: i64,
    /// Results per page. Zero uses the API default.
    pub page_size: i64,

    /// Filter identifier controlling which fields the API returns.
    pub filter: String,

    /// Semicolon-separated tags.
    pub tagged: String,

    /// Substitutions for the `{...}` placeholders of the request path, in order.
    pub args: Vec<String>,
}

impl Params {
    /// Creates a parameter set for the given site.
    pub fn new(site: &str) -> Self {
        Self {
            site: site.to_string(),
            ..Self::default()
        }
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_page(mut self, page: i64) -> Self {
        self.page = page;
        self
    }

    pub fn with_page_size(mut self, page_size: i64) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_filter(mut self, filter: &str) -> Self {
        self.filter = filter.to_string();
        self
    }

    pub fn with_tagged(mut self, tagged: &str) -> Self {
        self.tagged = tagged.to_string();
        self
    }

    /// Sets `tagged` from a list of tags.
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tagged = tags.join(";");
        self
    }

    /// Appends a placeholder substitution.
    pub fn with_arg(mut self, arg: &str) -> Self {
        self.args.push(arg.to_string());
        self
    }

    pub fn with_args(mut self, args: &[String]) -> Self {
        self.args.extend_from_slice(args);
        self
    }

    /// Appends an `{ids}` substitution built with [`join_ids`].
    pub fn with_ids(mut self, ids: &[i64]) -> Self {
        self.args.push(join_ids(ids));
        self
    }

    /// Returns a copy pointing at the page after this one.
    ///
    /// An unset page counts as page 1.
    pub fn next_page(&self) -> Self {
        let mut next = self.clone();
        next.page = self.page.max(1) + 1;
        next
    }

    /// Serializes the parameter set into query key/value pairs, ordered by key.
    pub fn values(&self) -> BTreeMap<&'static str, String> {
        let mut vals = BTreeMap::new();
        vals.insert("site", self.site.clone());
        if let Some(sort) = &self.sort {
            vals.insert("sort", sort.to_string());
        }
        if let Some(order) = self.order {
            vals.insert("order", order.to_string());
        }
        if self.page != 0 {
            vals.insert("page", self.page.to_string());
        }
        if self.page_size != 0 {
            vals.insert("pagesize", self.page_size.to_string());
        }
        if !self.filter.is_empty() {
            vals.insert("filter", self.filter.clone());
        }
        if !self.tagged.is_empty() {
            vals.insert("tagged", self.tagged.clone());
        }
        vals
    }
}
