//! Client for the cart GraphQL service.
//!
//! # Architecture
//!
//! - Uses `graphql_client` codegen against `graphql/cart/schema.graphql`
//! - HTTP transport is `reqwest`; no caching, no retries
//! - The cart service is the source of truth: callers re-fetch the cart
//!   after every mutation instead of trusting mutation payloads
//!
//! # Example
//!
//! ```rust,ignore
//! use bookstore_storefront::cart_client::CartClient;
//!
//! let client = CartClient::new(endpoint);
//! client.add_to_cart(&NewCartItem::new("1", "The Lord of the Rings", 10.0, 1)).await?;
//! let items = client.get_cart().await?;
//! ```

mod client;
mod conversions;
pub mod queries;

pub use client::CartClient;

use thiserror::Error;

/// Errors that can occur when talking to the cart service.
#[derive(Debug, Error)]
pub enum CartClientError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// GraphQL response carried errors.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Response had neither data nor errors.
    #[error("Empty response from cart service")]
    EmptyResponse,
}

/// A GraphQL error returned by the cart service.
#[derive(Debug, Clone)]
pub struct GraphQLError {
    /// Error message.
    pub message: String,
    /// Source locations in the query.
    pub locations: Vec<GraphQLErrorLocation>,
    /// Path to the error in the response.
    pub path: Vec<serde_json::Value>,
}

/// Location in a GraphQL query where an error occurred.
#[derive(Debug, Clone)]
pub struct GraphQLErrorLocation {
    /// Line number (1-indexed).
    pub line: i64,
    /// Column number (1-indexed).
    pub column: i64,
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    if errors.is_empty() {
        return "(no error details provided)".to_string();
    }

    errors
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let mut parts = Vec::new();

            if !e.message.is_empty() {
                parts.push(e.message.clone());
            }

            if !e.path.is_empty() {
                let path_str = e
                    .path
                    .iter()
                    .map(|p| match p {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(".");
                parts.push(format!("path: {path_str}"));
            }

            if let Some(loc) = e.locations.first() {
                parts.push(format!("at line {}:{}", loc.line, loc.column));
            }

            if parts.is_empty() {
                format!("[error {}]: (no details)", i + 1)
            } else {
                parts.join(" ")
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphql_error_formatting() {
        let errors = vec![
            GraphQLError {
                message: "Invalid quantity 0: must be at least 1".to_string(),
                locations: vec![],
                path: vec![],
            },
            GraphQLError {
                message: "Unknown field".to_string(),
                locations: vec![],
                path: vec![],
            },
        ];
        let err = CartClientError::GraphQL(errors);
        assert_eq!(
            err.to_string(),
            "GraphQL errors: Invalid quantity 0: must be at least 1; Unknown field"
        );
    }

    #[test]
    fn test_graphql_error_with_path_and_location() {
        let errors = vec![GraphQLError {
            message: String::new(),
            locations: vec![GraphQLErrorLocation { line: 1, column: 12 }],
            path: vec![serde_json::Value::String("updateQuantity".to_string())],
        }];
        let err = CartClientError::GraphQL(errors);
        assert_eq!(
            err.to_string(),
            "GraphQL errors: path: updateQuantity at line 1:12"
        );
    }

    #[test]
    fn test_graphql_error_no_details() {
        let errors = vec![GraphQLError {
            message: String::new(),
            locations: vec![],
            path: vec![],
        }];
        let err = CartClientError::GraphQL(errors);
        assert_eq!(err.to_string(), "GraphQL errors: [error 1]: (no details)");
    }

    #[test]
    fn test_graphql_error_empty_list() {
        let err = CartClientError::GraphQL(vec![]);
        assert_eq!(
            err.to_string(),
            "GraphQL errors: (no error details provided)"
        );
    }
}
