//! Naming helpers for code generation

use inflector::Inflector;

/// Case conversions used to spell a resource in generated code
pub struct TemplateHelpers;

impl TemplateHelpers {
    /// Convert string to `PascalCase`
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen_cli::scaffold::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_pascal_case("room"), "Room");
    /// assert_eq!(TemplateHelpers::to_pascal_case("guest_room"), "GuestRoom");
    /// ```
    #[must_use]
    pub fn to_pascal_case(input: &str) -> String {
        input.to_pascal_case()
    }

    /// Convert string to `SCREAMING_SNAKE_CASE`
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen_cli::scaffold::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_constant_case("room"), "ROOM");
    /// assert_eq!(TemplateHelpers::to_constant_case("guest_room"), "GUEST_ROOM");
    /// ```
    #[must_use]
    pub fn to_constant_case(input: &str) -> String {
        input.to_screaming_snake_case()
    }

    /// Pluralize a word, for prose in generated docs
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen_cli::scaffold::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::pluralize("room"), "rooms");
    /// assert_eq!(TemplateHelpers::pluralize("category"), "categories");
    /// ```
    #[must_use]
    pub fn pluralize(input: &str) -> String {
        input.to_plural()
    }
}
