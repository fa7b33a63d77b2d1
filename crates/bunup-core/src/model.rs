/// How much tooling the generated project ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Complexity {
    /// Bare starter.
    Minimal,
    /// Publish-ready setup.
    Full,
}

/// Kind of library being scaffolded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LibraryType {
    /// React component library.
    React,
    /// Plain TypeScript library, single package or monorepo.
    TypeScript,
}

/// How React components are styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StylingOption {
    PureCss,
    CssModules,
    TailwindCss,
}

/// Answers collected from the prompts. Built once per run and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub complexity: Complexity,
    pub library_type: LibraryType,
    /// Only set for React libraries.
    pub styling_option: Option<StylingOption>,
    /// Only ever true for TypeScript libraries.
    pub is_monorepo: bool,
    /// npm package name, possibly scoped (`@scope/name`).
    pub project_name: String,
    /// Only set for monorepos.
    pub first_package_name: Option<String>,
    pub description: String,
    /// GitHub owner, the part before `/`.
    pub username: String,
    /// GitHub repository, the part after `/`.
    pub repo_name: String,
}

impl Complexity {
    /// Prompt order.
    pub const ALL: [Complexity; 2] = [Complexity::Minimal, Complexity::Full];

    /// Identifier used in template names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Minimal => "minimal",
            Complexity::Full => "full",
        }
    }

    /// Text shown in the select prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Complexity::Minimal => "Minimal",
            Complexity::Full => "Full",
        }
    }

    /// Dimmed explanation next to the label.
    pub fn hint(&self) -> &'static str {
        match self {
            Complexity::Minimal => "Basic starter, perfect for building your own setup",
            Complexity::Full => "Publish-ready with everything you need for a modern library",
        }
    }
}

impl LibraryType {
    /// Prompt order: TypeScript first.
    pub const ALL: [LibraryType; 2] = [LibraryType::TypeScript, LibraryType::React];

    /// Identifier used in template names.
    pub fn as_str(&self) -> &'static str {
        match self {
            LibraryType::React => "react",
            LibraryType::TypeScript => "typescript",
        }
    }

    /// Text shown in the select prompt.
    pub fn label(&self) -> &'static str {
        match self {
            LibraryType::React => "React Component Library",
            LibraryType::TypeScript => "TypeScript Library",
        }
    }
}

impl StylingOption {
    /// Prompt order.
    pub const ALL: [StylingOption; 3] = [
        StylingOption::PureCss,
        StylingOption::CssModules,
        StylingOption::TailwindCss,
    ];

    /// Identifier used in template names.
    pub fn as_str(&self) -> &'static str {
        match self {
            StylingOption::PureCss => "pure-css",
            StylingOption::CssModules => "css-modules",
            StylingOption::TailwindCss => "tailwindcss",
        }
    }

    /// Text shown in the select prompt.
    pub fn label(&self) -> &'static str {
        match self {
            StylingOption::PureCss => "Pure CSS",
            StylingOption::CssModules => "CSS Modules",
            StylingOption::TailwindCss => "Tailwind CSS",
        }
    }

    /// Dimmed explanation next to the label.
    pub fn hint(&self) -> &'static str {
        match self {
            StylingOption::PureCss => "Simple CSS files",
            StylingOption::CssModules => "Scoped CSS with modules",
            StylingOption::TailwindCss => "Utility-first",
        }
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for LibraryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for StylingOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Complexity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minimal" => Ok(Complexity::Minimal),
            "full" => Ok(Complexity::Full),
            _ => Err(format!("Unknown complexity: {s}")),
        }
    }
}

impl std::str::FromStr for LibraryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "react" => Ok(LibraryType::React),
            "typescript" | "ts" => Ok(LibraryType::TypeScript),
            _ => Err(format!("Unknown library type: {s}")),
        }
    }
}

impl std::str::FromStr for StylingOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pure-css" | "css" => Ok(StylingOption::PureCss),
            "css-modules" => Ok(StylingOption::CssModules),
            "tailwindcss" | "tailwind" => Ok(StylingOption::TailwindCss),
            _ => Err(format!("Unknown styling option: {s}")),
        }
    }
}
