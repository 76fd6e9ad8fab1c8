//! Sort keys and sort direction accepted by the listing endpoints.

use std::str::FromStr;

/// Sort key, sent verbatim as the `sort` parameter.
///
/// Endpoints outside the question and answer listings accept other keys
/// (`rank`, `relevance`, `name`, ...); those go through [`Sort::Other`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sort {
    /// Last activity date.
    Activity,
    /// Creation date.
    CreationDate,
    /// Current "hot" ranking.
    Hot,
    /// Hot over the past week.
    Week,
    /// Hot over the past month.
    Month,
    /// Score.
    Score,
    /// Any other key the API accepts.
    Other(String),
}

impl Sort {
    pub fn as_str(&self) -> &str {
        match self {
            Sort::Activity => "activity",
            Sort::CreationDate => "creation",
            Sort::Hot => "hot",
            Sort::Week => "week",
            Sort::Month => "month",
            Sort::Score => "votes",
            Sort::Other(key) => key.as_str(),
        }
    }
}

impl std::fmt::Display for Sort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sort {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "activity" => Ok(Sort::Activity),
            "creation" => Ok(Sort::CreationDate),
            "hot" => Ok(Sort::Hot),
            "week" => Ok(Sort::Week),
            "month" => Ok(Sort::Month),
            "votes" => Ok(Sort::Score),
            "" => Err(()),
            other => Ok(Sort::Other(other.to_string())),
        }
    }
}

/// Sort direction, sent as the `order` parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Order::Asc => "asc",
                Order::Desc => "desc",
            }
        )
    }
}

impl FromStr for Order {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Order::Asc),
            "desc" => Ok(Order::Desc),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_strings() {
        assert_eq!(Sort::Activity.to_string(), "activity");
        assert_eq!(Sort::CreationDate.to_string(), "creation");
        assert_eq!(Sort::Hot.to_string(), "hot");
        assert_eq!(Sort::Week.to_string(), "week");
        assert_eq!(Sort::Month.to_string(), "month");
        assert_eq!(Sort::Score.to_string(), "votes");
    }

    #[test]
    fn test_sort_from_str() {
        assert_eq!("votes".parse::<Sort>(), Ok(Sort::Score));
        assert_eq!("creation".parse::<Sort>(), Ok(Sort::CreationDate));
        assert_eq!(
            "relevance".parse::<Sort>(),
            Ok(Sort::Other("relevance".to_string()))
        );
        assert!("".parse::<Sort>().is_err());
    }

    #[test]
    fn test_other_sort_sent_verbatim() {
        assert_eq!(Sort::Other("rank".to_string()).to_string(), "rank");
    }

    #[test]
    fn test_order_round_trip() {
        assert_eq!(Order::Asc.to_string(), "asc");
        assert_eq!("desc".parse::<Order>(), Ok(Order::Desc));
        assert!("DESC".parse::<Order>().is_err());
    }
}
