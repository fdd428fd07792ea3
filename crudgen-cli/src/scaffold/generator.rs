//! Module generator
//!
//! Planning is a pure function of the resource name. Rendering and writing are
//! separate steps so that `--dry-run` can show the plan without touching the
//! filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use super::resource::ResourceName;
use super::templates::{TemplateContext, TemplateKind, TemplateRegistry};

/// Directories created under the module root before any file is written
pub const MODULE_DIRECTORIES: [&str; 7] = [
    "",
    "domain",
    "dto",
    "infrastructure/entities",
    "infrastructure/repositories",
    "infrastructure/providers",
    "mappers",
];

/// Columns every generated entity carries
pub const ENTITY_COLUMNS: [&str; 4] = ["id", "created_at", "updated_at", "deleted_at"];

/// One file of a module plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedFile {
    /// Role of the file
    pub kind: TemplateKind,
    /// Path relative to the module root
    pub path: PathBuf,
    /// Summary shown to the operator
    pub description: String,
}

/// One HTTP route exposed by the generated controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    /// HTTP method
    pub method: &'static str,
    /// Route in axum syntax
    pub path: String,
    /// Summary, as published in the controller's endpoint table
    pub description: String,
}

/// Everything one invocation will generate for a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModulePlan {
    /// Resource being generated
    pub resource: ResourceName,
    /// Table the entity is bound to
    pub table: String,
    /// Files, in generation order
    pub files: Vec<PlannedFile>,
    /// Routes of the generated controller
    pub endpoints: Vec<Endpoint>,
}

impl ModulePlan {
    /// Plan the module for a resource
    ///
    /// ```
    /// use crudgen_cli::scaffold::{ModulePlan, ResourceName};
    ///
    /// let plan = ModulePlan::new(ResourceName::parse("room").unwrap());
    /// assert_eq!(plan.files.len(), 12);
    /// assert_eq!(plan.table, "room");
    /// ```
    #[must_use]
    pub fn new(resource: ResourceName) -> Self {
        let files = TemplateKind::ALL
            .iter()
            .map(|&kind| PlannedFile {
                kind,
                path: kind.relative_path(&resource),
                description: kind.description(&resource),
            })
            .collect();

        let name = resource.name();
        let capitalized = resource.capitalized();
        let plural = super::helpers::TemplateHelpers::pluralize(name);
        let endpoints = vec![
            Endpoint {
                method: "POST",
                path: format!("/{name}"),
                description: format!("Create a {capitalized}"),
            },
            Endpoint {
                method: "GET",
                path: format!("/{name}"),
                description: format!("List {plural} one page at a time"),
            },
            Endpoint {
                method: "GET",
                path: format!("/{name}/filter/search"),
                description: format!("Search {plural} one page at a time"),
            },
            Endpoint {
                method: "GET",
                path: format!("/{name}/{{id}}"),
                description: format!("Get a {capitalized} by id"),
            },
            Endpoint {
                method: "PATCH",
                path: format!("/{name}/{{id}}"),
                description: format!("Update a {capitalized} by id"),
            },
            Endpoint {
                method: "DELETE",
                path: format!("/{name}/{{id}}"),
                description: format!("Delete a {capitalized} by id"),
            },
        ];

        Self {
            table: name.to_string(),
            resource,
            files,
            endpoints,
        }
    }

    /// Module root, relative to the output directory
    #[must_use]
    pub fn root(&self) -> PathBuf {
        PathBuf::from(self.resource.name())
    }

    /// Directories to create, relative to the output directory
    #[must_use]
    pub fn directories(&self) -> Vec<PathBuf> {
        let root = self.root();
        MODULE_DIRECTORIES.iter().map(|dir| root.join(dir)).collect()
    }
}

/// A rendered file ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the output directory
    pub path: PathBuf,
    /// File content
    pub content: String,
    /// File description for user feedback
    pub description: String,
}

/// Renders module plans and writes them under an output directory
pub struct ModuleGenerator {
    templates: TemplateRegistry,
    output_dir: PathBuf,
}

impl ModuleGenerator {
    /// Create a generator writing under `output_dir`
    pub fn new(templates: TemplateRegistry, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates,
            output_dir: output_dir.into(),
        }
    }

    /// Directory modules are written under
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Render every file of a plan
    ///
    /// # Errors
    ///
    /// Returns an error if a template fails to render.
    pub fn render(&self, plan: &ModulePlan) -> Result<Vec<GeneratedFile>> {
        let context = TemplateContext::from(&plan.resource);
        let root = plan.root();

        plan.files
            .iter()
            .map(|file| {
                Ok(GeneratedFile {
                    path: root.join(&file.path),
                    content: self.templates.render(file.kind, &context)?,
                    description: file.description.clone(),
                })
            })
            .collect()
    }

    /// Create the directory skeleton, then write every file, overwriting
    /// existing ones
    ///
    /// Returns the written paths, joined onto the output directory, in plan
    /// order.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created or a file cannot be
    /// written.
    pub fn write(&self, plan: &ModulePlan, files: &[GeneratedFile]) -> Result<Vec<PathBuf>> {
        for dir in plan.directories() {
            let path = self.output_dir.join(dir);
            fs::create_dir_all(&path)
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
        }

        files
            .iter()
            .map(|file| {
                let full_path = self.output_dir.join(&file.path);
                if let Some(parent) = full_path.parent() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create directory: {}", parent.display())
                    })?;
                }
                fs::write(&full_path, &file.content)
                    .with_context(|| format!("Failed to write file: {}", full_path.display()))?;
                Ok(full_path)
            })
            .collect()
    }

    /// Plan, render and write the module for a resource
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or writing fails.
    pub fn generate(&self, resource: ResourceName) -> Result<(ModulePlan, Vec<PathBuf>)> {
        let plan = ModulePlan::new(resource);
        let files = self.render(&plan)?;
        let written = self.write(&plan, &files)?;
        Ok((plan, written))
    }
}
