//! Module name parsing and name derivation
//!
//! A module is addressed by a namespaced name such as `Billing\Invoice`. The
//! same name maps, through fixed string transforms, to:
//!
//! - a directory below `Modules/` (`Billing/Invoice`)
//! - a code namespace (`crate::modules::billing::invoice`)
//! - a URL segment (`invoices`)
//! - a table identifier (`invoices`)
//!
//! Names are validated before any file operation; a name that cannot be
//! mapped cleanly is rejected with [`NameError`].
//!
//! # Example
//!
//! ```
//! use modforge::naming::ModuleName;
//!
//! let name: ModuleName = "Billing\\Invoice".parse().unwrap();
//! let names = name.names();
//! assert_eq!(names.class_name, "Invoice");
//! assert_eq!(names.table_name, "invoices");
//! assert_eq!(names.directory_path, "Billing/Invoice");
//! ```

mod helpers;

pub use helpers::NameHelpers;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while validating a module name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// The name was empty or whitespace only
    #[error("module name must not be empty")]
    Empty,

    /// Two separators in a row, or a leading/trailing separator
    #[error("module name '{name}' contains an empty segment")]
    EmptySegment {
        /// The offending name
        name: String,
    },

    /// A segment is not a plain identifier
    #[error(
        "module name '{name}' has invalid segment '{segment}' \
         (segments must start with a letter and contain only letters, digits and '_')"
    )]
    InvalidSegment {
        /// The offending name
        name: String,
        /// The segment that failed validation
        segment: String,
    },

    /// Singularizing the class name left nothing behind
    #[error("module name '{name}' does not produce a model name")]
    NoModelName {
        /// The offending name
        name: String,
    },
}

/// Canonical names derived from a module name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedNames {
    /// `PascalCase` of the last segment (`Invoice`)
    pub class_name: String,
    /// Singular of the class name (`Invoice`)
    pub model_name: String,
    /// `snake_case` plural of the model name (`invoices`)
    pub table_name: String,
    /// kebab-case plural of the model name (`invoices`)
    pub route_prefix: String,
    /// camelCase of the model name (`invoice`)
    pub variable_name: String,
    /// Segments joined with `/` (`Billing/Invoice`)
    pub directory_path: String,
    /// Human-readable model title (`Invoice`)
    pub title: String,
}

/// A validated, namespaced module name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleName {
    segments: Vec<String>,
    names: DerivedNames,
}

impl ModuleName {
    /// Parse and validate a raw module name
    ///
    /// Accepted separators are `\`, `/`, `.` and `::`. Surrounding
    /// whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`NameError`] if the name is empty, has an empty segment, has
    /// a segment that is not a plain identifier, or singularizes to nothing.
    pub fn parse(raw: &str) -> Result<Self, NameError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(NameError::Empty);
        }

        let normalized = trimmed.replace("::", "\\");
        let segments: Vec<String> = normalized
            .split(['\\', '/', '.'])
            .map(str::to_string)
            .collect();

        for segment in &segments {
            validate_segment(trimmed, segment)?;
        }

        Self::from_segments(trimmed, segments)
    }

    /// Build a module name from already split segments
    ///
    /// # Errors
    ///
    /// Same validation as [`ModuleName::parse`].
    pub fn from_parts<I, S>(parts: I) -> Result<Self, NameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = parts.into_iter().map(Into::into).collect();
        let display = segments.join("\\");
        if segments.is_empty() {
            return Err(NameError::Empty);
        }
        for segment in &segments {
            validate_segment(&display, segment)?;
        }
        Self::from_segments(&display, segments)
    }

    fn from_segments(raw: &str, segments: Vec<String>) -> Result<Self, NameError> {
        let last = segments.last().ok_or(NameError::Empty)?;

        let class_name = NameHelpers::to_pascal_case(last);
        let model_name = NameHelpers::to_pascal_case(&NameHelpers::singularize(last));
        if model_name.is_empty() {
            return Err(NameError::NoModelName {
                name: raw.to_string(),
            });
        }

        let names = DerivedNames {
            table_name: NameHelpers::to_table_name(&model_name),
            route_prefix: NameHelpers::to_route_prefix(&model_name),
            variable_name: NameHelpers::to_camel_case(&model_name),
            directory_path: segments.join("/"),
            title: NameHelpers::to_title(&model_name),
            class_name,
            model_name,
        };

        Ok(Self { segments, names })
    }

    /// Segments as given (`["Billing", "Invoice"]`)
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Derived canonical names
    #[must_use]
    pub const fn names(&self) -> &DerivedNames {
        &self.names
    }

    /// Relative directory for the module (`Billing/Invoice`)
    #[must_use]
    pub fn relative_dir(&self) -> PathBuf {
        self.segments.iter().collect()
    }

    /// Rust path of the module below `root`
    ///
    /// ```
    /// use modforge::naming::ModuleName;
    ///
    /// let name = ModuleName::parse("Shop/OrderItems").unwrap();
    /// assert_eq!(name.namespace("crate"), "crate::modules::shop::order_items");
    /// ```
    #[must_use]
    pub fn namespace(&self, root: &str) -> String {
        let tail = self
            .segments
            .iter()
            .map(|s| NameHelpers::to_snake_case(s))
            .collect::<Vec<_>>()
            .join("::");

        if root.is_empty() {
            format!("modules::{tail}")
        } else {
            format!("{root}::modules::{tail}")
        }
    }
}

impl FromStr for ModuleName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("\\"))
    }
}

/// Check that a single segment is a plain identifier
///
/// # Errors
///
/// Returns [`NameError::EmptySegment`] or [`NameError::InvalidSegment`].
pub fn validate_segment(name: &str, segment: &str) -> Result<(), NameError> {
    let mut chars = segment.chars();
    let Some(first) = chars.next() else {
        return Err(NameError::EmptySegment {
            name: name.to_string(),
        });
    };

    let valid = first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid {
        Ok(())
    } else {
        Err(NameError::InvalidSegment {
            name: name.to_string(),
            segment: segment.to_string(),
        })
    }
}
