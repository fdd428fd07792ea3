//! Module generation command

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crudgen_cli::config::GeneratorConfig;
use crudgen_cli::scaffold::{
    GeneratedFile, ModuleGenerator, ModulePlan, ResourceName, TemplateRegistry,
};

/// Features every generated module ships with
const FEATURES: [&str; 6] = [
    "Domain model and request DTOs with validation",
    "SQLite entity with id, timestamps and soft delete",
    "Repository port with a sqlx adapter",
    "Service with not-found checks before update and delete",
    "Paginated listing and search with sort and order",
    "axum routes with an endpoint table for API docs",
];

/// Generate a CRUD module for one resource
pub struct GenerateCommand {
    resource: ResourceName,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    dry_run: bool,
    json: bool,
}

impl GenerateCommand {
    /// Validate the resource name
    ///
    /// Fails before anything is read from or written to disk.
    pub fn new(
        name: &str,
        output: Option<PathBuf>,
        config: Option<PathBuf>,
        dry_run: bool,
    ) -> Result<Self> {
        let resource = ResourceName::parse(name).context("Invalid resource name")?;
        Ok(Self {
            resource,
            output,
            config,
            dry_run,
            json: false,
        })
    }

    /// Print the dry-run plan as JSON instead of styled text
    #[must_use]
    pub const fn json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Execute the command
    pub fn execute(self) -> Result<()> {
        let config = GeneratorConfig::load(self.config.as_deref())
            .context("Failed to load generator configuration")?;
        let output_dir = self.output.unwrap_or(config.output_dir);
        let templates = match &config.template_dir {
            Some(dir) => TemplateRegistry::with_overrides(dir)?,
            None => TemplateRegistry::new()?,
        };
        let generator = ModuleGenerator::new(templates, &output_dir);

        if self.dry_run && self.json {
            let plan = ModulePlan::new(self.resource);
            println!(
                "{}",
                serde_json::to_string_pretty(&plan).context("Failed to serialize module plan")?
            );
            return Ok(());
        }

        println!(
            "\n{} {} {}",
            style("Generating CRUD module for").cyan().bold(),
            style(&self.resource).green().bold(),
            style("...").cyan().bold()
        );

        let plan = ModulePlan::new(self.resource);
        let files = generator
            .render(&plan)
            .context("Failed to render module files")?;

        if self.dry_run {
            print_plan(&output_dir, &plan, &files);
            return Ok(());
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        spinner.set_message(format!("Writing {} files...", files.len()));
        let written = generator.write(&plan, &files);
        spinner.finish_and_clear();
        written?;

        println!(
            "\n{} {} files:",
            style("Generated").green().bold(),
            files.len()
        );
        for file in &files {
            println!(
                "  {} {} ({})",
                style("✓").green(),
                style(output_dir.join(&file.path).display()).dim(),
                style(&file.description).dim()
            );
        }

        print_success(&output_dir, &plan);
        Ok(())
    }
}

fn print_plan(output_dir: &Path, plan: &ModulePlan, files: &[GeneratedFile]) {
    println!(
        "\n{} nothing written. {} files planned:",
        style("Dry run:").yellow().bold(),
        files.len()
    );
    for file in files {
        println!(
            "  {} {} ({}, {} bytes)",
            style("•").cyan(),
            style(output_dir.join(&file.path).display()).dim(),
            style(&file.description).dim(),
            file.content.len()
        );
    }
    print_endpoints(plan);
}

fn print_endpoints(plan: &ModulePlan) {
    println!("\n{}", style("Routes:").cyan().bold());
    for endpoint in &plan.endpoints {
        println!(
            "  {:<6} {:<28} {}",
            style(endpoint.method).green(),
            endpoint.path,
            style(&endpoint.description).dim()
        );
    }
}

fn print_success(output_dir: &Path, plan: &ModulePlan) {
    let name = plan.resource.name();
    let upper = plan.resource.upper();

    println!(
        "\n{} {} module is ready!",
        style("✨").green().bold(),
        style(plan.resource.capitalized()).green().bold()
    );

    println!("\n{}", style("Included:").cyan().bold());
    for feature in FEATURES {
        println!("  {} {feature}", style("✓").green());
    }
    print_endpoints(plan);

    println!("\n{}", style("Next steps:").cyan().bold());
    println!(
        "  1. Declare the module next to {}: {}",
        style(output_dir.display()).dim(),
        style(format!("pub mod {name};")).yellow()
    );
    println!(
        "  2. Add dependencies: {}",
        style("cargo add crudgen axum sqlx chrono serde validator").yellow()
    );
    println!(
        "  3. Create the table at startup: {}",
        style(format!("sqlx::query({name}::{upper}_SCHEMA).execute(&pool)")).yellow()
    );
    println!(
        "  4. Mount the routes: {}",
        style(format!("app.merge({name}::router(pool))")).yellow()
    );
    println!("  5. Build your project: {}", style("cargo build").yellow());
}
