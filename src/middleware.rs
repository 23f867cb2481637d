//! # Axum Integration
//!
//! [`parse_query`] runs a strategy over the request's query string and stores
//! the result as a [`ParsedQuery`] request extension. Handlers read it back
//! with the [`ParsedQuery`] extractor.
//!
//! ```rust,ignore
//! use axum::{Router, middleware, routing::get};
//! use querycrate::{ParseStrategy, ParsedQuery, RelationStrategy, parse_query};
//!
//! async fn list(query: ParsedQuery) -> String {
//!     query.results["order"].to_string()
//! }
//!
//! let app = Router::new()
//!     .route("/items", get(list))
//!     .layer(middleware::from_fn_with_state(
//!         RelationStrategy::default().into_shared(),
//!         parse_query,
//!     ));
//! ```
//!
//! Stacking several `parse_query` layers merges their results: keys from a
//! layer that runs later overwrite keys from one that ran earlier.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};

use crate::errors::QueryError;
use crate::results::QueryResults;
use crate::traits::SharedStrategy;

/// Parsed query attached to a request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedQuery {
    /// Merged output of every strategy layer that ran.
    pub results: QueryResults,
    /// The raw query string, without `?`.
    pub query_string: String,
}

/// Middleware parsing the query string with the strategy held in state.
pub async fn parse_query(
    State(strategy): State<SharedStrategy>,
    mut req: Request,
    next: Next,
) -> Response {
    let query_string = req.uri().query().unwrap_or_default().to_string();
    let results = strategy.parse(&query_string);
    tracing::debug!(
        strategy = strategy.name(),
        fields = results.len(),
        "Attached parsed query to request"
    );

    match req.extensions_mut().get_mut::<ParsedQuery>() {
        Some(parsed) => {
            parsed.results.merge(results);
            parsed.query_string = query_string;
        }
        None => {
            req.extensions_mut().insert(ParsedQuery {
                results,
                query_string,
            });
        }
    }

    next.run(req).await
}

impl<S> FromRequestParts<S> for ParsedQuery
where
    S: Send + Sync,
{
    type Rejection = QueryError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<ParsedQuery>()
            .cloned()
            .ok_or(QueryError::MissingExtension)
    }
}
