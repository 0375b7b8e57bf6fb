/*!
 * `jwk` converts JSON Web Keys to PEM and fetches a cluster's JWKS over mutual TLS.
 *
 * Set `RUST_LOG=debug` to trace what the libraries are doing.
 */

use std::{
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
    time::Duration,
};

use clap::{Parser, Subcommand};
use errors::{CliError, Result};
use jwks_fetch::{FetchConfig, JwksFetcher, TlsCredentials};
use tracing::debug;
use tracing_subscriber::filter;

mod errors;

/// JWK tooling
#[derive(Parser)]
#[command(name = "jwk")]
#[command(bin_name = "jwk")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Convert a single JWK to a PEM public key (reads STDIN when no JWK is given)
    ToPem(ToPemArgs),

    /// Fetch the JWKS published at {host}/openid/v1/jwks using mutual TLS
    FromK8s(FromK8sArgs),
}

#[derive(Debug, Parser)]
struct ToPemArgs {
    /// JWK JSON text
    #[arg(short, long, conflicts_with = "file")]
    jwk: Option<String>,

    /// File containing the JWK JSON text
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,
}

#[derive(Debug, Parser)]
struct FromK8sArgs {
    /// Cluster API server, e.g. https://cluster.example.com:6443
    #[arg(long, value_name = "URL")]
    host: String,

    /// PEM client certificate chain
    #[arg(long, value_name = "PATH")]
    client_certificate: PathBuf,

    /// PEM client private key (PKCS#1, PKCS#8 or SEC1)
    #[arg(long, value_name = "PATH")]
    client_key: PathBuf,

    /// PEM CA certificate(s) the API server is verified against
    #[arg(long, value_name = "PATH")]
    cluster_ca_certificate: PathBuf,

    /// Give up after this many seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Fail on a non-2xx response instead of decoding the body
    #[arg(long)]
    require_success: bool,

    /// Print each fetched key as a PEM public key instead of JSON
    #[arg(long)]
    pem: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Cli::parse();

    // construct a subscriber that prints formatted traces to stderr
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Logging failed: {e}");
    }

    let result = match args.command {
        Commands::ToPem(args) => to_pem(args),
        Commands::FromK8s(args) => from_k8s(args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {e}");
            ExitCode::FAILURE
        }
    }
}

fn to_pem(args: ToPemArgs) -> Result<()> {
    let jwk = match (args.jwk, args.file) {
        (Some(jwk), _) => jwk,
        (None, Some(path)) => read_file(&path)?,
        (None, None) => {
            let mut jwk = String::new();
            io::stdin()
                .read_to_string(&mut jwk)
                .map_err(|e| CliError::input("STDIN", e))?;
            jwk
        }
    };

    let converted = jwk_pem::convert(&jwk)?;
    println!("id: {}", converted.key_id);
    println!("{}", converted.pem);
    Ok(())
}

async fn from_k8s(args: FromK8sArgs) -> Result<()> {
    let credentials = TlsCredentials::new(
        read_file(&args.client_certificate)?,
        read_file(&args.client_key)?,
        read_file(&args.cluster_ca_certificate)?,
    );

    let fetcher = JwksFetcher::new(fetch_config(&args));
    let fetched = fetcher.fetch(&credentials, &args.host).await?;
    debug!(keys = fetched.jwks.len(), "fetched JWKS");

    println!("id: {}", fetched.id);
    for jwk in &fetched.jwks {
        if args.pem {
            let converted = jwk_pem::convert(jwk)?;
            println!("kid: {}", converted.key_id);
            println!("{}", converted.pem);
        } else {
            println!("{jwk}");
        }
    }
    Ok(())
}

fn fetch_config(args: &FromK8sArgs) -> FetchConfig {
    let mut builder = FetchConfig::builder().with_require_success_status(args.require_success);
    if let Some(secs) = args.timeout {
        builder = builder.with_timeout(Duration::from_secs(secs));
    }
    builder.build()
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| CliError::input(path.display().to_string(), e))
}
