use anyhow::Context;
use carbon_clusters::store::{ArtifactPaths, ArtifactStore};
use carbon_clusters_server::ClusterService;
use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;
use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Country clustering by carbon-emission composition over HTTP
#[derive(Debug, StructOpt)]
struct ServerOptions {
    #[structopt(long = "host", default_value = "127.0.0.1")]
    /// Address to listen on
    host: String,
    #[structopt(short = "p", long = "port", default_value = "8000")]
    /// Start listening on a port, Default: 8000
    port: u16,
    #[structopt(long = "scaler", parse(from_os_str), default_value = "artifacts/scaler.json")]
    /// Fitted scaler, serialized as json
    scaler: PathBuf,
    #[structopt(
        long = "projector",
        parse(from_os_str),
        default_value = "artifacts/projector.json"
    )]
    /// Fitted projection, serialized as json
    projector: PathBuf,
    #[structopt(
        long = "clusterer",
        parse(from_os_str),
        default_value = "artifacts/clusterer.json"
    )]
    /// Fitted centroids, serialized as json
    clusterer: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_writer(io::stderr).with_env_filter(filter).init();

    let opt = ServerOptions::from_args();
    let paths = ArtifactPaths {
        scaler: opt.scaler,
        projector: opt.projector,
        clusterer: opt.clusterer,
    };

    // nothing is served unless every artifact loads
    let store = ArtifactStore::load(&paths).context("failed to load artifacts")?;

    let listen = format!("{}:{}", opt.host, opt.port);
    let addr: SocketAddr = listen
        .parse()
        .with_context(|| format!("invalid listen address {}", listen))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("Starting server on http://{}", addr);
    axum::serve(listener, ClusterService::new(store).router()).await?;

    Ok(())
}
