//! API path templates and placeholder substitution.
//!
//! Paths are external contracts with the remote API. Each `{...}` marker is a
//! positional placeholder filled from [`Params::args`](crate::Params).

pub const PATH_ALL_ANSWERS: &str = "/answers";
pub const PATH_ANSWERS: &str = "/answers/{ids}";
pub const PATH_ANSWER_COMMENTS: &str = "/answers/{ids}/comments";

pub const PATH_ALL_QUESTIONS: &str = "/questions";
pub const PATH_QUESTIONS: &str = "/questions/{ids}";
pub const PATH_QUESTION_ANSWERS: &str = "/questions/{ids}/answers";
pub const PATH_QUESTION_COMMENTS: &str = "/questions/{ids}/comments";

/// Replaces `{...}` spans in `template` with `args`, left to right.
///
/// Extra arguments are ignored. When arguments run out, the remaining
/// placeholders are left in the output verbatim, braces included. An opening
/// brace without a closing one ends substitution.
pub fn fill_placeholders<S: AsRef<str>>(template: &str, args: &[S]) -> String {
    if template.is_empty() || args.is_empty() {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;
    for arg in args {
        let Some(open) = rest.find('{') else {
            break;
        };
        out.push_str(&rest[..open]);
        rest = &rest[open..];
        let Some(close) = rest.find('}') else {
            break;
        };
        out.push_str(arg.as_ref());
        rest = &rest[close + 1..];
    }
    out.push_str(rest);
    out
}
