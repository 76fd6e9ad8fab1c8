//! The response envelope shared by every API call, and its decoder.

use std::collections::HashMap;
use std::io::Read;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::Error;

/// An error reported by the API inside an otherwise well-formed response.
///
/// All fields are zero or empty when the request succeeded.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub id: i64,
    pub name: String,
    pub message: String,
}

impl ApiError {
    /// Returns true when no error was reported.
    pub fn is_empty(&self) -> bool {
        self.id == 0 && self.name.is_empty() && self.message.is_empty()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}: {}", self.id, self.name, self.message)
    }
}

/// Metadata returned alongside the items of every response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wrapper {
    pub error: ApiError,

    pub page: i64,
    pub page_size: i64,
    /// Whether another page follows this one.
    pub has_more: bool,

    /// Seconds the API asks callers to wait before hitting the same method
    /// again. Zero when absent.
    pub backoff: i64,
    pub quota_max: i64,
    pub quota_remaining: i64,

    pub total: i64,
    /// Type of the items, as reported by the `type` field.
    pub kind: String,
}

impl Wrapper {
    /// Returns the API-reported error, if any.
    pub fn api_error(&self) -> Option<&ApiError> {
        if self.error.is_empty() {
            None
        } else {
            Some(&self.error)
        }
    }

    /// Returns the requested backoff, if any.
    pub fn backoff(&self) -> Option<Duration> {
        u64::try_from(self.backoff)
            .ok()
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

/// Decoded items of type `T` along with the response metadata.
#[derive(Debug)]
pub struct Response<T> {
    pub wrapper: Wrapper,
    pub items: T,
}

/// Raw envelope: every top-level field kept as undecoded JSON.
///
/// Fields are decoded one at a time, so a badly typed field costs only its own
/// value. The first failure is kept. A repeated key keeps its last value.
struct Envelope {
    fields: HashMap<String, Box<RawValue>>,
    first_err: Option<serde_json::Error>,
}

impl Envelope {
    fn read<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        let mut de = serde_json::Deserializer::from_reader(reader);
        let fields = HashMap::<String, Box<RawValue>>::deserialize(&mut de)?;
        Ok(Self {
            fields,
            first_err: None,
        })
    }

    /// Decodes `key`, leaving the default when it is absent, `null`, or of the
    /// wrong type.
    fn field<V: DeserializeOwned + Default>(&mut self, key: &str) -> V {
        let Some(raw) = self.fields.remove(key) else {
            return V::default();
        };
        if raw.get().trim() == "null" {
            return V::default();
        }
        match serde_json::from_str(raw.get()) {
            Ok(value) => value,
            Err(e) => {
                self.first_err.get_or_insert(e);
                V::default()
            }
        }
    }

    fn wrapper(&mut self) -> Wrapper {
        Wrapper {
            error: ApiError {
                id: self.field("error_id"),
                name: self.field("error_name"),
                message: self.field("error_message"),
            },
            page: self.field("page"),
            page_size: self.field("page_size"),
            has_more: self.field("has_more"),
            backoff: self.field("backoff"),
            quota_max: self.field("quota_max"),
            quota_remaining: self.field("quota_remaining"),
            total: self.field("total"),
            kind: self.field("type"),
        }
    }
}

/// Decodes one response envelope from `reader`, routing `items` into `T`.
///
/// Missing or `null` items yield `T::default()`. Only the first JSON value is
/// read. An error reported by the API is not a decode failure; check
/// [`Wrapper::api_error`] on the result.
///
/// A body that is not a JSON object fails with a default [`Wrapper`]. A field
/// of the wrong type fails with every other field still filled in.
pub fn parse_response<R, T>(reader: R) -> Result<Response<T>, Error>
where
    R: Read,
    T: DeserializeOwned + Default,
{
    let mut envelope = Envelope::read(reader).map_err(|e| Error::decode(e, Wrapper::default()))?;
    let wrapper = envelope.wrapper();
    let items = envelope.field::<T>("items");

    match envelope.first_err {
        Some(e) => Err(Error::decode(e, wrapper)),
        None => Ok(Response { wrapper, items }),
    }
}
