//! Built-in module templates and the registry that renders them
//!
//! Each generated file has one [`TemplateKind`]. The template source for a
//! kind is compiled into the binary and can be replaced by a
//! `<template>.rs.jinja` file in a configured template directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;

use super::resource::ResourceName;

/// Role of one generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    /// Domain model
    Domain,
    /// Create request body
    CreateDto,
    /// Update request body
    UpdateDto,
    /// Search query
    FilterDto,
    /// Persistence entity
    Entity,
    /// Repository port trait
    RepositoryPort,
    /// `SQLite` repository adapter
    RepositoryAdapter,
    /// Conversions between layers
    Mapper,
    /// Repository and service construction
    Providers,
    /// Service
    Service,
    /// HTTP controller
    Controller,
    /// Module wiring
    Module,
}

impl TemplateKind {
    /// Every kind, in generation order
    pub const ALL: [Self; 12] = [
        Self::Domain,
        Self::CreateDto,
        Self::UpdateDto,
        Self::FilterDto,
        Self::Entity,
        Self::RepositoryPort,
        Self::RepositoryAdapter,
        Self::Mapper,
        Self::Providers,
        Self::Service,
        Self::Controller,
        Self::Module,
    ];

    /// Template name, also the stem of its override file
    #[must_use]
    pub const fn template_name(self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::CreateDto => "create_dto",
            Self::UpdateDto => "update_dto",
            Self::FilterDto => "filter_dto",
            Self::Entity => "entity",
            Self::RepositoryPort => "repository_port",
            Self::RepositoryAdapter => "repository_adapter",
            Self::Mapper => "mapper",
            Self::Providers => "providers",
            Self::Service => "service",
            Self::Controller => "controller",
            Self::Module => "module",
        }
    }

    /// Override file name looked up in a template directory
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.rs.jinja", self.template_name())
    }

    /// Path of the generated file, relative to the module root
    #[must_use]
    pub fn relative_path(self, resource: &ResourceName) -> PathBuf {
        let name = resource.name();
        match self {
            Self::Domain => PathBuf::from(format!("domain/{name}.rs")),
            Self::CreateDto => PathBuf::from(format!("dto/create_{name}.rs")),
            Self::UpdateDto => PathBuf::from(format!("dto/update_{name}.rs")),
            Self::FilterDto => PathBuf::from(format!("dto/filter_{name}.rs")),
            Self::Entity => PathBuf::from(format!("infrastructure/entities/{name}_entity.rs")),
            Self::RepositoryPort => PathBuf::from(format!("domain/{name}_repository.rs")),
            Self::RepositoryAdapter => PathBuf::from(format!(
                "infrastructure/repositories/sqlite_{name}_repository.rs"
            )),
            Self::Mapper => PathBuf::from(format!("mappers/{name}_mapper.rs")),
            Self::Providers => {
                PathBuf::from(format!("infrastructure/providers/{name}_providers.rs"))
            }
            Self::Service => PathBuf::from(format!("{name}_service.rs")),
            Self::Controller => PathBuf::from(format!("{name}_controller.rs")),
            Self::Module => PathBuf::from("mod.rs"),
        }
    }

    /// One-line summary shown when the file is written
    #[must_use]
    pub fn description(self, resource: &ResourceName) -> String {
        let name = resource.capitalized();
        match self {
            Self::Domain => format!("{name} domain model"),
            Self::CreateDto => format!("{name} create request body"),
            Self::UpdateDto => format!("{name} update request body"),
            Self::FilterDto => format!("{name} search query"),
            Self::Entity => format!("{name} entity bound to table `{}`", resource.name()),
            Self::RepositoryPort => format!("{name}Repository port"),
            Self::RepositoryAdapter => format!("Sqlite{name}Repository adapter"),
            Self::Mapper => format!("{name}Mapper"),
            Self::Providers => format!("{name} repository and service construction"),
            Self::Service => format!("{name}Service"),
            Self::Controller => format!("{name} HTTP routes"),
            Self::Module => format!("{name} module wiring"),
        }
    }

    const fn builtin_source(self) -> &'static str {
        match self {
            Self::Domain => include_str!("../../templates/module/domain.rs.jinja"),
            Self::CreateDto => include_str!("../../templates/module/create_dto.rs.jinja"),
            Self::UpdateDto => include_str!("../../templates/module/update_dto.rs.jinja"),
            Self::FilterDto => include_str!("../../templates/module/filter_dto.rs.jinja"),
            Self::Entity => include_str!("../../templates/module/entity.rs.jinja"),
            Self::RepositoryPort => include_str!("../../templates/module/repository_port.rs.jinja"),
            Self::RepositoryAdapter => {
                include_str!("../../templates/module/repository_adapter.rs.jinja")
            }
            Self::Mapper => include_str!("../../templates/module/mapper.rs.jinja"),
            Self::Providers => include_str!("../../templates/module/providers.rs.jinja"),
            Self::Service => include_str!("../../templates/module/service.rs.jinja"),
            Self::Controller => include_str!("../../templates/module/controller.rs.jinja"),
            Self::Module => include_str!("../../templates/module/module.rs.jinja"),
        }
    }
}

/// Values a template can refer to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateContext {
    /// Name as given, e.g. `guest_room`
    pub name: String,
    /// Type-name spelling, e.g. `GuestRoom`
    pub capitalized: String,
    /// Constant-name spelling, e.g. `GUEST_ROOM`
    pub upper: String,
    /// Plural for prose, e.g. `guest_rooms`
    pub plural: String,
}

impl From<&ResourceName> for TemplateContext {
    fn from(resource: &ResourceName) -> Self {
        Self {
            name: resource.name().to_string(),
            capitalized: resource.capitalized().to_string(),
            upper: resource.upper().to_string(),
            plural: super::helpers::TemplateHelpers::pluralize(resource.name()),
        }
    }
}

/// Compiled module templates
pub struct TemplateRegistry {
    env: Environment<'static>,
}

impl TemplateRegistry {
    /// Registry holding the built-in templates
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in template fails to parse.
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        for kind in TemplateKind::ALL {
            env.add_template(kind.template_name(), kind.builtin_source())
                .with_context(|| format!("Invalid built-in template: {}", kind.template_name()))?;
        }

        Ok(Self { env })
    }

    /// Registry whose templates are replaced by any `<template>.rs.jinja`
    /// found in `dir`
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` does not exist, or an override cannot be read
    /// or parsed.
    pub fn with_overrides(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            anyhow::bail!("Template directory not found: {}", dir.display());
        }

        let mut registry = Self::new()?;
        for kind in TemplateKind::ALL {
            let path = dir.join(kind.file_name());
            if !path.is_file() {
                continue;
            }
            let source = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read template: {}", path.display()))?;
            registry
                .env
                .add_template_owned(kind.template_name(), source)
                .with_context(|| format!("Invalid template: {}", path.display()))?;
        }

        Ok(registry)
    }

    /// Render one template
    ///
    /// # Errors
    ///
    /// Returns an error if the template refers to an unknown value.
    pub fn render(&self, kind: TemplateKind, context: &TemplateContext) -> Result<String> {
        self.env
            .get_template(kind.template_name())
            .and_then(|template| template.render(context))
            .with_context(|| format!("Failed to render template: {}", kind.template_name()))
    }
}
