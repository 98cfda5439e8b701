use launchpad_lib::schema;
use launchpad_lib::server::{Server, ServerConfig};
use tracing::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("Building schema");
    let server = Server::new(ServerConfig {
        schema: schema::schema_builder(),
        debug: false,
    });

    let running = server.listen().await?;
    println!("🚀 Server ready at {}", running.url());

    running.closed().await
}

fn init_tracing() {
    tracing_subscriber::fmt::init();
}
