//! The space explorer schema: type definitions, resolvers, and the fixture
//! data backing them. The server consumes this module solely through
//! [`schema_builder`].

mod resolvers;
pub mod types;

use async_graphql::{EmptySubscription, Schema, SchemaBuilder};

pub use self::resolvers::{MutationRoot, QueryRoot};

pub type ApiSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;
pub type ApiSchemaBuilder = SchemaBuilder<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema_builder() -> ApiSchemaBuilder {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
}
