//! # Voice Board Feature Scaffolding
//!
//! Generates the component/types/test triad for a new UI feature:
//!
//! ```text
//! <package>/src/features/<name>/
//! ├── <Component>.tsx
//! ├── <name>.types.ts
//! └── __tests__/<Component>.test.tsx
//! ```
//!
//! `<Component>` is the feature name with each hyphen-separated word
//! capitalized and the words joined (`array-element` → `ArrayElement`).

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Errors raised while scaffolding a feature.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The feature name is not kebab-case.
    #[error("invalid feature name {0:?}: use lowercase words separated by hyphens, e.g. array-element")]
    InvalidName(String),

    /// A directory or file could not be written.
    #[error("{}: {source}", path.display())]
    Io {
        /// Path being written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Paths written for one feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureFiles {
    /// Feature directory.
    pub directory: PathBuf,
    /// Component source.
    pub component: PathBuf,
    /// Props/types declarations.
    pub types: PathBuf,
    /// Test stub.
    pub test: PathBuf,
}

/// Derive the component name from a kebab-case feature name.
#[must_use]
pub fn component_name(feature: &str) -> String {
    feature
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Check that `feature` is lowercase kebab-case starting with a letter.
///
/// # Errors
///
/// Returns [`ScaffoldError::InvalidName`] otherwise.
pub fn validate_name(feature: &str) -> Result<(), ScaffoldError> {
    let starts_with_letter = feature.chars().next().is_some_and(|c| c.is_ascii_lowercase());
    let words_ok = feature.split('-').all(|word| {
        !word.is_empty()
            && word
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    });

    if starts_with_letter && words_ok {
        Ok(())
    } else {
        Err(ScaffoldError::InvalidName(feature.to_string()))
    }
}

/// Scaffold `feature` under `package_path/src/features/`.
///
/// Existing files are overwritten.
///
/// # Errors
///
/// Returns [`ScaffoldError::InvalidName`] for a malformed name and
/// [`ScaffoldError::Io`] if any directory or file cannot be written.
pub fn create_feature(feature: &str, package_path: &Path) -> Result<FeatureFiles, ScaffoldError> {
    validate_name(feature)?;

    let component = component_name(feature);
    let directory = package_path.join("src").join("features").join(feature);
    let tests_dir = directory.join("__tests__");

    fs::create_dir_all(&tests_dir).map_err(|source| ScaffoldError::Io {
        path: tests_dir.clone(),
        source,
    })?;

    let files = FeatureFiles {
        component: directory.join(format!("{component}.tsx")),
        types: directory.join(format!("{feature}.types.ts")),
        test: tests_dir.join(format!("{component}.test.tsx")),
        directory,
    };

    write_file(&files.component, &component_source(&component))?;
    write_file(&files.types, &types_source(&component))?;
    write_file(&files.test, &test_source(&component))?;

    Ok(files)
}

fn write_file(path: &Path, contents: &str) -> Result<(), ScaffoldError> {
    fs::write(path, contents).map_err(|source| ScaffoldError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Wrote {}", path.display());
    Ok(())
}

fn component_source(component: &str) -> String {
    format!(
        "export const {component} = () => {{\n  return <div>{component}</div>;\n}};"
    )
}

fn types_source(component: &str) -> String {
    format!("export interface {component}Props {{\n  // Add props here\n}}")
}

fn test_source(component: &str) -> String {
    format!(
        "import {{ {component} }} from '../{component}';\n\n\
         describe('{component}', () => {{\n  \
         it('should render', () => {{\n    // Add test\n  }});\n}});"
    )
}
