//! crudgen CLI library
//!
//! Everything the `crudgen` binary does short of printing: resource name
//! validation, module planning, template rendering and file writing.
//!
//! ```no_run
//! use crudgen_cli::scaffold::{ModuleGenerator, ResourceName, TemplateRegistry};
//!
//! # fn main() -> anyhow::Result<()> {
//! let generator = ModuleGenerator::new(TemplateRegistry::new()?, "src/modules");
//! let (plan, written) = generator.generate(ResourceName::parse("room")?)?;
//! assert_eq!(written.len(), plan.files.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod scaffold;

pub use config::GeneratorConfig;
pub use scaffold::{ModuleGenerator, ModulePlan, ResourceName, TemplateRegistry};
