use colored::Colorize;
use nexus_runtime::{fetch_version, list_targets};
use tracing::info;

use crate::config::CliConfig;
use crate::error::Result;

pub async fn execute(config: &CliConfig) -> Result<()> {
	let endpoint = config.endpoint();
	info!(target: "nexus", %endpoint, "list targets");

	let version = fetch_version(&endpoint).await?;
	println!(
		"{} on {endpoint}",
		version.browser.as_deref().unwrap_or("unknown browser").bold()
	);

	let pattern = config.target_url_pattern.to_lowercase();
	let pages: Vec<_> = list_targets(&endpoint).await?.into_iter().filter(|t| t.is_page()).collect();

	if pages.is_empty() {
		println!("No open tabs on {endpoint}");
		return Ok(());
	}

	for page in pages {
		let marker = if page.url.to_lowercase().contains(&pattern) {
			"*".green().bold()
		} else {
			" ".normal()
		};
		println!("{marker} {}  {}\n    {}", page.id.dimmed(), page.title, page.url);
	}
	Ok(())
}
