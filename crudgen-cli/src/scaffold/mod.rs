//! CRUD module scaffolding
//!
//! - [`ResourceName`] validates the operator's name and derives its spellings
//! - [`ModulePlan`] lists the twelve files and six routes of a module
//! - [`TemplateRegistry`] renders each [`TemplateKind`] with minijinja
//! - [`ModuleGenerator`] writes the rendered files under an output directory

mod generator;
mod helpers;
mod resource;
mod templates;

pub use generator::{
    Endpoint, GeneratedFile, ModuleGenerator, ModulePlan, PlannedFile, ENTITY_COLUMNS,
    MODULE_DIRECTORIES,
};
pub use helpers::TemplateHelpers;
pub use resource::{NameError, ResourceName};
pub use templates::{TemplateContext, TemplateKind, TemplateRegistry};
