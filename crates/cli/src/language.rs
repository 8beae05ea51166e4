use std::path::Path;

/// Source language, as far as comment syntax is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Rust,
    Python,
    JavaScript,
    TypeScript,
    Go,
    Java,
    C,
    Cpp,
    CSharp,
    Ruby,
    Swift,
    Kotlin,
    Shell,
    Yaml,
    Lua,
    Haskell,
    Sql,
    Unknown,
}

impl Language {
    /// Detect language from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "rs" => Language::Rust,
            "py" | "pyw" => Language::Python,
            "js" | "mjs" | "cjs" | "jsx" => Language::JavaScript,
            "ts" | "tsx" => Language::TypeScript,
            "go" => Language::Go,
            "java" => Language::Java,
            "c" | "h" => Language::C,
            "cpp" | "cc" | "cxx" | "hpp" | "hh" | "hxx" => Language::Cpp,
            "cs" => Language::CSharp,
            "rb" => Language::Ruby,
            "swift" => Language::Swift,
            "kt" | "kts" => Language::Kotlin,
            "sh" | "bash" | "zsh" => Language::Shell,
            "yml" | "yaml" => Language::Yaml,
            "lua" => Language::Lua,
            "hs" => Language::Haskell,
            "sql" => Language::Sql,
            _ => Language::Unknown,
        }
    }

    /// Detect language from file path
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(Language::Unknown)
    }

    /// Get language name as string
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Rust => "rust",
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Go => "go",
            Language::Java => "java",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::CSharp => "csharp",
            Language::Ruby => "ruby",
            Language::Swift => "swift",
            Language::Kotlin => "kotlin",
            Language::Shell => "shell",
            Language::Yaml => "yaml",
            Language::Lua => "lua",
            Language::Haskell => "haskell",
            Language::Sql => "sql",
            Language::Unknown => "unknown",
        }
    }

    /// Prefixes that start a comment line, after leading whitespace.
    ///
    /// `*` covers the body and closing line of `/* ... */` blocks.
    pub fn comment_prefixes(self) -> &'static [&'static str] {
        match self {
            Language::Rust
            | Language::JavaScript
            | Language::TypeScript
            | Language::Go
            | Language::Java
            | Language::C
            | Language::Cpp
            | Language::CSharp
            | Language::Swift
            | Language::Kotlin => &["//", "/*", "*/", "* "],
            Language::Python => &["#", "\"\"\"", "'''"],
            Language::Ruby | Language::Shell | Language::Yaml => &["#"],
            Language::Lua | Language::Haskell | Language::Sql => &["--"],
            Language::Unknown => &[],
        }
    }
}

/// Whether the first non-whitespace text of `line` starts with a prefix.
///
/// A prefix with trailing whitespace (`"* "`) also matches a line that holds
/// nothing but the prefix itself, such as an empty ` *` in a block comment.
pub fn is_comment_line<P: AsRef<str>>(line: &str, prefixes: &[P]) -> bool {
    let content = line.trim_start_matches([' ', '\t']);
    if content.is_empty() {
        return false;
    }
    let bare = content.trim_end_matches([' ', '\t']);
    prefixes.iter().any(|prefix| {
        let prefix = prefix.as_ref();
        content.starts_with(prefix) || bare == prefix.trim_end_matches([' ', '\t'])
    })
}
