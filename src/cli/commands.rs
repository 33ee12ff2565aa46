//! Command execution: turn parsed arguments into a generation run.

use std::env;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::Cli;
use crate::cli::output;
use crate::config::Settings;
use crate::errors::{ForgeError, ForgeResult};
use crate::forge::{run, GenerationRequest, GeneratorKind};
use crate::generators::{GenerateOptions, Language};
use crate::templates::TemplateStore;

/// Build a [`GenerationRequest`] from CLI arguments and loaded settings.
pub fn build_request(cli: &Cli, settings: &Settings) -> ForgeResult<GenerationRequest> {
    let root = match &cli.root {
        Some(path) => path.clone(),
        None => env::current_dir().map_err(|e| ForgeError::io(".", e))?,
    };

    let repo_name = match &cli.name {
        Some(name) => name.clone(),
        None => root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "repository".to_string()),
    };

    let generators = if cli.generators.is_empty() {
        GeneratorKind::ALL.to_vec()
    } else {
        cli.generators.clone()
    };

    let languages = if cli.languages.is_empty() {
        Language::ALL.to_vec()
    } else {
        cli.languages.clone()
    };

    Ok(GenerationRequest {
        root,
        generators,
        policy: cli.overwrite,
        dry_run: cli.dry_run,
        gitkeep: cli.gitkeep,
        options: GenerateOptions::new(repo_name, languages, settings.author.clone()),
    })
}

#[instrument(skip(cli))]
pub fn execute_command(cli: &Cli) -> ForgeResult<()> {
    let settings = Settings::load()?;
    let request = build_request(cli, &settings)?;
    debug!("request: {:?}", request);

    let store = TemplateStore::with_catalogue();
    let report = run(&store, &request)?;

    if request.dry_run {
        output::header(&format!("Dry run against {}", request.root.display()));
        for action in &report.actions {
            output::detail(action);
        }
        output::action("planned", &report);
    } else {
        output::success(&format!(
            "Generated {} ({}) at {}",
            request.options.repo_name,
            request
                .generators
                .iter()
                .map(|g| g.as_str())
                .join(", "),
            request.root.display()
        ));
        output::action("summary", &report);
    }

    Ok(())
}
