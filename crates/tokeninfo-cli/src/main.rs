mod args;

use anyhow::{Context, Result};
use args::{Args, Invocation};
use clap::Parser;
use tokeninfo_common::{ChainRegistry, RpcTokenReader, TokenInfoGenerator};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

fn init_logs() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logs()?;

    let invocation = match args.into_invocation() {
        Ok(invocation) => invocation,
        Err(usage) => usage.exit(),
    };

    let registry = ChainRegistry::builtin();
    let (input, options) = match invocation {
        Invocation::ListChains => {
            for chain in registry.iter() {
                println!("{:>10}  {}", chain.id, chain.internal_name);
            }
            return Ok(());
        }
        Invocation::Generate { input, options } => (input, options),
    };

    let generator = TokenInfoGenerator::new(&registry, &options);
    let job = generator.prepare(input)?;
    let reader = RpcTokenReader::connect(&job.endpoint);
    let token = generator
        .run(&job, &reader)
        .await
        .with_context(|| format!("Failed to create token info on chain {}", job.chain().id))?;

    println!(
        "Token: {} ({}) - {} decimals",
        token.record.name, token.record.symbol, token.record.decimals
    );
    println!("Token info file created at {}", token.paths.info.display());
    if let Some(logo) = &token.paths.logo {
        println!("Token logo copied to {}", logo.display());
    }

    Ok(())
}
