//! Generate command implementation.
//!
//! Loads inspect output for services, networks and volumes and writes the
//! regenerated stack file.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use restack_lib::encode::encode;
use restack_lib::snapshot::ClusterSnapshot;
use tracing::info;

use crate::output::{DocumentFormat, print_success};

#[derive(Args, Debug)]
pub struct GenerateArgs {
  /// JSON array of services, as printed by `docker service inspect`
  pub services: PathBuf,

  /// JSON array of networks, as printed by `docker network inspect`
  #[arg(long)]
  pub networks: Option<PathBuf>,

  /// JSON array of volumes, as printed by `docker volume inspect`
  #[arg(long)]
  pub volumes: Option<PathBuf>,

  /// Write the stack file here instead of stdout
  #[arg(short, long)]
  pub out: Option<PathBuf>,

  /// Stack file format
  #[arg(short, long, value_enum, default_value = "yaml")]
  pub format: DocumentFormat,
}

pub fn cmd_generate(args: GenerateArgs) -> Result<()> {
  let snapshot = ClusterSnapshot::from_files(&args.services, args.networks.as_deref(), args.volumes.as_deref())
    .context("Failed to load cluster snapshot")?;

  let document = snapshot.compose().context("Failed to generate stack file")?;
  let text = encode(&document, args.format.into()).context("Failed to encode stack file")?;

  match args.out {
    Some(path) => {
      fs::write(&path, &text).with_context(|| format!("Failed to write {}", path.display()))?;
      info!(path = %path.display(), "wrote stack file");
      print_success(&format!(
        "Wrote {} service(s) to {}",
        document.services.len(),
        path.display()
      ));
    }
    None => print!("{}", text),
  }

  Ok(())
}
