//! CLI output formatting utilities.
//!
//! Provides consistent formatting for terminal output including colored status
//! messages and Unicode symbols. Status messages go to stderr so stdout only
//! ever carries generated content.

use anyhow::Context;
use clap::ValueEnum;
use owo_colors::{OwoColorize, Stream};
use restack_lib::encode;

/// Format for command reports.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Text,
  Json,
}

impl OutputFormat {
  pub fn is_json(self) -> bool {
    matches!(self, OutputFormat::Json)
  }
}

/// Format for a generated stack file.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum DocumentFormat {
  #[default]
  Yaml,
  Json,
}

impl From<DocumentFormat> for encode::OutputFormat {
  fn from(format: DocumentFormat) -> Self {
    match format {
      DocumentFormat::Yaml => encode::OutputFormat::Yaml,
      DocumentFormat::Json => encode::OutputFormat::Json,
    }
  }
}

pub mod symbols {
  pub const SUCCESS: &str = "✓";
  pub const ERROR: &str = "✗";
  pub const INFO: &str = "•";
}

pub fn print_success(message: &str) {
  eprintln!(
    "{} {}",
    symbols::SUCCESS.if_supports_color(Stream::Stderr, |s| s.green()),
    message
  );
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

pub fn print_info(message: &str) {
  eprintln!(
    "{} {}",
    symbols::INFO.if_supports_color(Stream::Stderr, |s| s.blue()),
    message
  );
}

/// Print a titled list to stdout, one item per line.
pub fn print_list(title: &str, items: &[String]) {
  println!("{}:", title.if_supports_color(Stream::Stdout, |s| s.bold()));
  for item in items {
    println!("  {} {}", symbols::INFO, item);
  }
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
  println!("{}", json);
  Ok(())
}
