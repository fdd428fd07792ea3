//! Resource names and their derived spellings

use serde::Serialize;
use thiserror::Error;

use super::helpers::TemplateHelpers;

/// Identifiers a resource may not be named after
///
/// Rust keywords, plus the crates generated modules import by name.
const RESERVED: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "union", "unsafe", "unsized", "use", "virtual", "where", "while", "yield", "alloc", "axum",
    "chrono", "core", "crudgen", "serde", "sqlx", "std", "validator",
];

/// Type names in scope inside generated files
///
/// The std prelude, the items the templates import from axum, chrono, serde,
/// sqlx and validator, the `crudgen::prelude` items, and the generic `T`.
const TEMPLATE_TYPES: &[&str] = &[
    "Box", "Clone", "Copy", "Debug", "Default", "Drop", "Eq", "Err", "Fn", "From", "Into",
    "Iterator", "None", "Ok", "Option", "PartialEq", "Result", "Send", "Sized", "Some", "String",
    "Sync", "ToString", "Unpin", "Vec", "Arc", "Json", "Path", "Router", "State", "StatusCode",
    "DateTime", "Utc", "Deserialize", "Serialize", "FromRow", "SqlitePool", "Validate",
    "Changes", "CrudError", "CrudRepository", "CrudResult", "CrudService", "CrudgenConfig",
    "DatabaseSettings", "EndpointDoc", "Entity", "FilterQuery", "MemoryRepository", "PageMeta",
    "Paginated", "PaginatedResponse", "PaginationQuery", "SortOrder", "SqliteRepository",
    "ValidatedJson", "ValidatedQuery", "ValidationError", "T",
];

/// Every type a generated module declares for a `PascalCase` resource name
fn generated_types(capitalized: &str) -> [String; 9] {
    [
        capitalized.to_string(),
        format!("{capitalized}Entity"),
        format!("{capitalized}Repository"),
        format!("Sqlite{capitalized}Repository"),
        format!("{capitalized}Mapper"),
        format!("{capitalized}Service"),
        format!("Create{capitalized}Dto"),
        format!("Update{capitalized}Dto"),
        format!("Filter{capitalized}Dto"),
    ]
}

/// Why a resource name was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// No name was given
    #[error("resource name must not be empty")]
    Empty,

    /// First character is not a lowercase ASCII letter
    #[error("resource name '{0}' must start with a lowercase letter")]
    InvalidStart(String),

    /// Character outside `[a-z0-9_]`
    #[error("resource name '{name}' contains '{found}'; use lowercase letters, digits and '_'")]
    InvalidCharacter {
        /// Rejected name
        name: String,
        /// First offending character
        found: char,
    },

    /// Empty word between or after underscores
    #[error("resource name '{0}' must not end with '_' or contain '__'")]
    EmptySegment(String),

    /// Keyword, crate name, or a name whose types clash with generated code
    #[error("resource name '{0}' is reserved")]
    Reserved(String),
}

/// A validated resource name with its three spellings
///
/// | spelling      | example      | used for                         |
/// |---------------|--------------|----------------------------------|
/// | `name`        | `guest_room` | paths, routes, table, modules    |
/// | `capitalized` | `GuestRoom`  | type names                       |
/// | `upper`       | `GUEST_ROOM` | constant names                   |
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceName {
    name: String,
    capitalized: String,
    upper: String,
}

impl ResourceName {
    /// Validate a name and derive its spellings
    ///
    /// ```
    /// use crudgen_cli::scaffold::ResourceName;
    ///
    /// let resource = ResourceName::parse("room").unwrap();
    /// assert_eq!(resource.capitalized(), "Room");
    /// assert_eq!(resource.upper(), "ROOM");
    /// assert!(ResourceName::parse("Room").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`NameError`] when the name is not a lowercase `snake_case`
    /// identifier, is reserved, or would declare a type that clashes with one
    /// the generated files already use.
    pub fn parse(input: &str) -> Result<Self, NameError> {
        let Some(first) = input.chars().next() else {
            return Err(NameError::Empty);
        };
        if !first.is_ascii_lowercase() {
            return Err(NameError::InvalidStart(input.to_string()));
        }
        if let Some(found) = input
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_'))
        {
            return Err(NameError::InvalidCharacter {
                name: input.to_string(),
                found,
            });
        }
        if input.ends_with('_') || input.contains("__") {
            return Err(NameError::EmptySegment(input.to_string()));
        }
        if RESERVED.contains(&input) {
            return Err(NameError::Reserved(input.to_string()));
        }

        let capitalized = TemplateHelpers::to_pascal_case(input);
        if generated_types(&capitalized)
            .iter()
            .any(|declared| TEMPLATE_TYPES.contains(&declared.as_str()))
        {
            return Err(NameError::Reserved(input.to_string()));
        }

        Ok(Self {
            name: input.to_string(),
            capitalized,
            upper: TemplateHelpers::to_constant_case(input),
        })
    }

    /// Name as given
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `PascalCase` spelling
    #[must_use]
    pub fn capitalized(&self) -> &str {
        &self.capitalized
    }

    /// `SCREAMING_SNAKE_CASE` spelling
    #[must_use]
    pub fn upper(&self) -> &str {
        &self.upper
    }
}

impl std::fmt::Display for ResourceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
