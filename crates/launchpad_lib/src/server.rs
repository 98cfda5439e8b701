//! Thin wrapper around the GraphQL engine and the HTTP transport. All query
//! parsing, validation, and execution is the engine's business; this module
//! only binds a socket and wires the schema into a router.

use std::net::Ipv4Addr;

use anyhow::Context as _;
use async_graphql::extensions;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::schema::{ApiSchema, ApiSchemaBuilder};

/// Port bound by [`Server::listen`] when no port is given.
pub const DEFAULT_PORT: u16 = 4000;

/// Options consumed by [`Server::new`]. Constructed once by the bootstrap
/// and never touched again.
pub struct ServerConfig {
    /// Schema definitions to serve, as produced by
    /// [`crate::schema::schema_builder`].
    pub schema: ApiSchemaBuilder,
    /// Enables per-query diagnostics on the underlying GraphQL engine.
    pub debug: bool,
}

pub struct Server {
    schema: ApiSchema,
}

impl Server {
    pub fn new(config: ServerConfig) -> Self {
        let ServerConfig { schema, debug } = config;
        let schema = if debug {
            schema.extension(extensions::Tracing)
        } else {
            schema
        };

        Self {
            schema: schema.finish(),
        }
    }

    /// Binds the default port and starts serving. See [`Server::listen_on`].
    pub async fn listen(self) -> anyhow::Result<RunningServer> {
        self.listen_on(DEFAULT_PORT).await
    }

    /// Binds `port` (0 picks a free one) and serves GraphQL at `/`, with
    /// GraphiQL on GET. Resolves as soon as the socket is bound; serving
    /// continues on a background task.
    pub async fn listen_on(self, port: u16) -> anyhow::Result<RunningServer> {
        let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, port))
            .await
            .with_context(|| format!("failed to bind port {port}"))?;
        let url = format!("http://localhost:{}/", listener.local_addr()?.port());

        debug!(%url, "bound GraphQL endpoint");

        let app = router(self.schema);
        let task = tokio::spawn(async move {
            // Listen to requests forever.
            axum::serve(listener, app).await?;

            Result::<(), anyhow::Error>::Ok(())
        });

        Ok(RunningServer { url, task })
    }
}

fn router(schema: ApiSchema) -> Router {
    Router::new().route("/", get(graphiql_route).post_service(GraphQL::new(schema)))
}

async fn graphiql_route() -> impl IntoResponse {
    axum::response::Html(GraphiQLSource::build().endpoint("/").finish())
}

/// Handle to a server that is accepting connections.
pub struct RunningServer {
    url: String,
    task: JoinHandle<anyhow::Result<()>>,
}

impl RunningServer {
    /// The URL the server is reachable at.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Waits until the serve loop exits, which under normal operation is
    /// never.
    pub async fn closed(self) -> anyhow::Result<()> {
        self.task.await?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::schema_builder;

    #[test]
    fn config_keeps_the_debug_flag_as_given() {
        let config = ServerConfig {
            schema: schema_builder(),
            debug: false,
        };

        assert!(!config.debug);
    }

    #[tokio::test]
    async fn listen_on_an_ephemeral_port_reports_a_localhost_url() {
        let server = Server::new(ServerConfig {
            schema: schema_builder(),
            debug: false,
        });

        let running = server.listen_on(0).await.unwrap();

        assert!(running.url().starts_with("http://localhost:"));
        assert!(running.url().ends_with('/'));
    }
}
