use core::fmt;

/// The failure modes of a collision or distance query.
///
/// No panic and no exception-like control flow crosses the query boundary:
/// every failure is returned as one of these variants and the caller decides
/// whether to escalate.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum QueryError {
    /// The query is not supported between the given pair of shapes, even
    /// after considering the swapped operand order.
    Unsupported,
    /// An iterative solver (GJK or EPA) exceeded its iteration cap without
    /// converging.
    ///
    /// Retrying with a coarser tolerance or with the other solver backend
    /// may succeed.
    NoConvergence,
    /// The request carries invalid options (zero contact budget, non-finite
    /// or non-positive tolerance).
    InvalidRequest,
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::Unsupported => f.pad("query not supported between these shapes"),
            QueryError::NoConvergence => f.pad("iterative solver did not converge"),
            QueryError::InvalidRequest => f.pad("invalid query request"),
        }
    }
}

impl std::error::Error for QueryError {}
