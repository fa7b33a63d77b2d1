use tracing::debug;

use crate::error::ResolveError;
use crate::model::{Complexity, LibraryType, ProjectConfig, StylingOption};

/// Name of a directory in the template repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TemplateId(&'static str);

impl TemplateId {
    /// Directory name, e.g. `minimal-react-tailwindcss`.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Third lookup key: styling for React, layout for TypeScript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Single-package TypeScript library.
    Single,
    /// TypeScript workspace.
    Monorepo,
    /// React library with a styling option.
    Styled(StylingOption),
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Single => f.write_str("single"),
            Variant::Monorepo => f.write_str("monorepo"),
            Variant::Styled(styling) => write!(f, "{styling}"),
        }
    }
}

struct TemplateEntry {
    complexity: Complexity,
    library: LibraryType,
    variant: Variant,
    id: TemplateId,
}

const fn entry(
    complexity: Complexity,
    library: LibraryType,
    variant: Variant,
    id: &'static str,
) -> TemplateEntry {
    TemplateEntry {
        complexity,
        library,
        variant,
        id: TemplateId(id),
    }
}

use Complexity::{Full, Minimal};
use LibraryType::{React, TypeScript};
use StylingOption::{CssModules, PureCss, TailwindCss};

static TEMPLATES: [TemplateEntry; 10] = [
    entry(Minimal, TypeScript, Variant::Single, "minimal-ts"),
    entry(Minimal, TypeScript, Variant::Monorepo, "minimal-ts-monorepo"),
    entry(Minimal, React, Variant::Styled(PureCss), "minimal-react-pure-css"),
    entry(Minimal, React, Variant::Styled(CssModules), "minimal-react-css-modules"),
    entry(Minimal, React, Variant::Styled(TailwindCss), "minimal-react-tailwindcss"),
    entry(Full, TypeScript, Variant::Single, "full-ts"),
    entry(Full, TypeScript, Variant::Monorepo, "full-ts-monorepo"),
    entry(Full, React, Variant::Styled(PureCss), "full-react-pure-css"),
    entry(Full, React, Variant::Styled(CssModules), "full-react-css-modules"),
    entry(Full, React, Variant::Styled(TailwindCss), "full-react-tailwindcss"),
];

/// Every identifier the resolver can return.
pub fn known_templates() -> impl Iterator<Item = TemplateId> {
    TEMPLATES.iter().map(|e| e.id)
}

/// Derives the third lookup key from a configuration.
///
/// # Errors
/// A React configuration without a styling option has no variant.
pub fn variant_of(config: &ProjectConfig) -> Result<Variant, ResolveError> {
    match config.library_type {
        LibraryType::React => config
            .styling_option
            .map(Variant::Styled)
            .ok_or(ResolveError::MissingStylingOption {
                complexity: config.complexity,
            }),
        LibraryType::TypeScript if config.is_monorepo => Ok(Variant::Monorepo),
        LibraryType::TypeScript => Ok(Variant::Single),
    }
}

/// Looks up the template for a configuration: complexity, then library type,
/// then styling option (React) or monorepo vs single (TypeScript).
///
/// # Errors
/// Combinations the table does not cover.
pub fn resolve_template(config: &ProjectConfig) -> Result<TemplateId, ResolveError> {
    let variant = variant_of(config)?;
    let id = TEMPLATES
        .iter()
        .find(|e| {
            e.complexity == config.complexity
                && e.library == config.library_type
                && e.variant == variant
        })
        .map(|e| e.id)
        .ok_or_else(|| ResolveError::UnknownCombination {
            complexity: config.complexity,
            library: config.library_type,
            variant: variant.to_string(),
        })?;
    debug!(template = %id, %variant, "resolved template");
    Ok(id)
}
