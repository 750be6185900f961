//! GraphQL operation definitions for the cart service.

use graphql_client::GraphQLQuery;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/cart/schema.graphql",
    query_path = "graphql/cart/queries.graphql",
    response_derives = "Debug, Clone"
)]
pub struct GetCart;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/cart/schema.graphql",
    query_path = "graphql/cart/queries.graphql",
    response_derives = "Debug, Clone"
)]
pub struct AddToCart;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/cart/schema.graphql",
    query_path = "graphql/cart/queries.graphql",
    response_derives = "Debug, Clone"
)]
pub struct RemoveFromCart;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/cart/schema.graphql",
    query_path = "graphql/cart/queries.graphql",
    response_derives = "Debug, Clone"
)]
pub struct UpdateQuantity;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/cart/schema.graphql",
    query_path = "graphql/cart/queries.graphql",
    response_derives = "Debug, Clone"
)]
pub struct ClearCart;
