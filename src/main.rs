use anyhow::{Context, Result};
use gitdocify::{Config, GitHost, SiteGenerator};
use log::warn;

fn main() -> Result<()> {
    let config = Config::parse();

    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_default_env()
        .init();

    config.validate().context("Invalid configuration")?;

    let site_name = config.site_name()?;
    let repo_ref = config.repo_ref()?;

    let host = GitHost::open(&config.repo, repo_ref.clone(), config.git_ref.clone())
        .with_context(|| format!("Failed to open repository: {}", config.repo.display()))?;

    let generator = SiteGenerator::new(&host, repo_ref, &config.output)
        .with_site_name(site_name)
        .with_theme(config.theme);

    let summary = generator
        .generate()
        .context("Failed to generate documentation site")?;

    println!(
        "Generated {} directory pages and {} file pages ({} skipped)",
        summary.directories, summary.files, summary.skipped
    );

    let index_path = generator.index_path();
    println!("Generated: {}", index_path.display());

    if !config.no_open
        && let Err(err) = open::that(&index_path)
    {
        warn!("Failed to open {}: {}", index_path.display(), err);
    }

    Ok(())
}
