//! HTTP client for the Stack Exchange API.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use url::form_urlencoded;

use crate::{
    path::{
        fill_placeholders, PATH_ALL_ANSWERS, PATH_ALL_QUESTIONS, PATH_ANSWERS,
        PATH_ANSWER_COMMENTS, PATH_QUESTIONS, PATH_QUESTION_ANSWERS, PATH_QUESTION_COMMENTS,
    },
    query::Params,
    response::{parse_response, Response},
    types::{Answer, AnswerID, Comment, Question, QuestionID},
    Error,
};

/// API version identifier.
pub const VERSION: &str = "2.1";

/// Stack Exchange API endpoint, including [`VERSION`].
pub const ROOT: &str = "https://api.stackexchange.com/2.1";

/// Performs an API request with a default [`Client`].
pub async fn get<T>(path: &str, params: &Params) -> Result<Response<T>, Error>
where
    T: DeserializeOwned + Default,
{
    Client::default().get(path, params).await
}

/// HTTP client for the Stack Exchange API.
///
/// Holds the transport, API root and credentials shared by every request.
/// Nothing is mutated once built, so one client can serve many concurrent
/// requests. Each field falls back to a default when unset: a fresh
/// `reqwest::Client`, [`ROOT`], and no credentials.
#[derive(Clone, Default)]
pub struct Client {
    http: Option<reqwest::Client>,
    root: Option<String>,

    /// Sent as `access_token`. Obtained through an OAuth 2.0 application
    /// registered with stackapps.com.
    access_token: Option<String>,
    /// Sent as `key`.
    key: Option<String>,

    /// Log each request URL before it is sent.
    verbose: bool,
}

impl Client {
    /// Creates a client pointing at the production API with no credentials.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the given `reqwest::Client` as transport. Timeouts, proxies and
    /// retries are configured there.
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Overrides the API root. Used for testing with wiremock.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.root = Some(base_url.to_string());
        self
    }

    pub fn with_access_token(mut self, access_token: &str) -> Self {
        self.access_token = Some(access_token.to_string());
        self
    }

    pub fn with_key(mut self, key: &str) -> Self {
        self.key = Some(key.to_string());
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// The API root requests are sent to.
    pub fn root(&self) -> &str {
        match self.root.as_deref() {
            Some(root) if !root.is_empty() => root,
            _ => ROOT,
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Query parameters for a request: the parameter set plus credentials.
    pub fn values(&self, params: &Params) -> BTreeMap<&'static str, String> {
        let mut vals = params.values();
        if let Some(access_token) = self.access_token.as_deref().filter(|t| !t.is_empty()) {
            vals.insert("access_token", access_token.to_string());
        }
        if let Some(key) = self.key.as_deref().filter(|k| !k.is_empty()) {
            vals.insert("key", key.to_string());
        }
        vals
    }

    /// Builds the full request URL for `path` without sending anything.
    pub fn request_url(&self, path: &str, params: &Params) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.values(params))
            .finish();
        format!(
            "{}{}?{}",
            self.root(),
            fill_placeholders(path, &params.args),
            query
        )
    }

    /// Performs an API request, decoding the response items into `T`.
    ///
    /// Errors reported by the API come back in [`Response::wrapper`], not as
    /// `Err`.
    pub async fn get<T>(&self, path: &str, params: &Params) -> Result<Response<T>, Error>
    where
        T: DeserializeOwned + Default,
    {
        let url = self.request_url(path, params);
        if self.verbose {
            tracing::info!("GET {}", url);
        }

        let http = match &self.http {
            Some(http) => http.clone(),
            None => reqwest::Client::builder().build().map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Transport(e)
            })?,
        };

        let resp = http.get(&url).send().await.map_err(|e| {
            tracing::error!("Failed to get resource: {}", e);
            Error::Transport(e)
        })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!("Request to {} returned status {}", path, status);
        }

        let body = resp.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        let parsed = parse_response::<_, T>(&body[..]).inspect_err(|e| {
            tracing::error!("Failed to parse resource: {:?}", e);
        })?;
        tracing::debug!(
            quota_remaining = parsed.wrapper.quota_remaining,
            quota_max = parsed.wrapper.quota_max,
            "quota"
        );

        Ok(parsed)
    }

    /// Fetches questions from the whole site.
    pub async fn questions(&self, params: &Params) -> Result<Response<Vec<Question>>, Error> {
        self.get::<Vec<Question>>(PATH_ALL_QUESTIONS, params).await
    }

    /// Fetches the questions with the given IDs.
    pub async fn questions_by_ids(
        &self,
        ids: &[QuestionID],
        params: &Params,
    ) -> Result<Response<Vec<Question>>, Error> {
        self.get::<Vec<Question>>(PATH_QUESTIONS, &with_ids(params, ids))
            .await
    }

    /// Fetches the answers to the given questions.
    pub async fn question_answers(
        &self,
        ids: &[QuestionID],
        params: &Params,
    ) -> Result<Response<Vec<Answer>>, Error> {
        self.get::<Vec<Answer>>(PATH_QUESTION_ANSWERS, &with_ids(params, ids))
            .await
    }

    /// Fetches the comments on the given questions.
    pub async fn question_comments(
        &self,
        ids: &[QuestionID],
        params: &Params,
    ) -> Result<Response<Vec<Comment>>, Error> {
        self.get::<Vec<Comment>>(PATH_QUESTION_COMMENTS, &with_ids(params, ids))
            .await
    }

    /// Fetches answers from the whole site.
    pub async fn answers(&self, params: &Params) -> Result<Response<Vec<Answer>>, Error> {
        self.get::<Vec<Answer>>(PATH_ALL_ANSWERS, params).await
    }

    /// Fetches the answers with the given IDs.
    pub async fn answers_by_ids(
        &self,
        ids: &[AnswerID],
        params: &Params,
    ) -> Result<Response<Vec<Answer>>, Error> {
        self.get::<Vec<Answer>>(PATH_ANSWERS, &with_ids(params, ids))
            .await
    }

    /// Fetches the comments on the given answers.
    pub async fn answer_comments(
        &self,
        ids: &[AnswerID],
        params: &Params,
    ) -> Result<Response<Vec<Comment>>, Error> {
        self.get::<Vec<Comment>>(PATH_ANSWER_COMMENTS, &with_ids(params, ids))
            .await
    }
}

// The id list always fills the first placeholder.
fn with_ids(params: &Params, ids: &[i64]) -> Params {
    let mut params = params.clone();
    params.args.insert(0, crate::join_ids(ids));
    params
}
