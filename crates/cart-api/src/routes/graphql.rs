//! GraphQL endpoint handlers.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse, rejection::GraphQLRejection};
use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Execute a GraphQL request against the cart schema.
#[instrument(skip_all)]
pub async fn execute(
    State(state): State<AppState>,
    request: std::result::Result<GraphQLRequest, GraphQLRejection>,
) -> Result<GraphQLResponse> {
    let request = request.map_err(|rejection| AppError::BadRequest(rejection.0.to_string()))?;
    Ok(state.schema().execute(request.into_inner()).await.into())
}

/// Serve the GraphiQL IDE.
pub async fn playground() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
