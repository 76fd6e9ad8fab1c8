//! Client for the Stack Exchange 2.1 API.
//!
//! <https://api.stackexchange.com/>
mod client;
mod errors;
mod ids;
mod path;
mod query;
mod response;
pub mod types;
pub use self::client::{get, Client, ROOT, VERSION};
pub use self::errors::Error;
pub use self::ids::join_ids;
pub use self::path::{
    fill_placeholders, PATH_ALL_ANSWERS, PATH_ALL_QUESTIONS, PATH_ANSWERS, PATH_ANSWER_COMMENTS,
    PATH_QUESTIONS, PATH_QUESTION_ANSWERS, PATH_QUESTION_COMMENTS,
};
pub use self::query::{Order, Params, Sort, STACK_OVERFLOW};
pub use self::response::{parse_response, ApiError, Response, Wrapper};
