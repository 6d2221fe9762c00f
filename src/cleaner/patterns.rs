//! Catalog of debug-statement patterns.
//!
//! Matching is purely textual. Every pattern is anchored to whole lines
//! (multi-line mode) and swallows an optional trailing `//` comment. Call
//! arguments are matched with `[^)]*`, so calls with nested parentheses such
//! as `dump(foo(1, 2));` are left untouched.

use crate::error::{Result, SweeperError};
use regex::Regex;

/// Source language family a pattern belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Php,
    JavaScript,
}

impl Language {
    /// All supported families, in catalog order.
    pub const ALL: [Language; 2] = [Language::Php, Language::JavaScript];

    /// Short identifier used on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            Language::Php => "php",
            Language::JavaScript => "js",
        }
    }

    /// Parse a command line identifier.
    pub fn from_id(id: &str) -> Result<Self> {
        match id.trim().to_ascii_lowercase().as_str() {
            "php" => Ok(Language::Php),
            "js" | "javascript" => Ok(Language::JavaScript),
            _ => Err(SweeperError::UnknownLanguage(id.to_string())),
        }
    }
}

/// Built-in pattern sources: (name, language, regex).
const BUILTIN_PATTERNS: &[(&str, Language, &str)] = &[
    ("dump", Language::Php, r"(?m)^\s*dump\s*\([^)]*\)\s*;?\s*(//.*)?\s*$"),
    ("dd", Language::Php, r"(?m)^\s*dd\s*\([^)]*\)\s*;?\s*(//.*)?\s*$"),
    ("var_dump", Language::Php, r"(?m)^\s*var_dump\s*\([^)]*\)\s*;?\s*(//.*)?\s*$"),
    ("print_r", Language::Php, r"(?m)^\s*print_r\s*\([^)]*\)\s*;?\s*(//.*)?\s*$"),
    ("error_log", Language::Php, r"(?m)^\s*error_log\s*\([^)]*\)\s*;?\s*(//.*)?\s*$"),
    (
        "console",
        Language::JavaScript,
        r"(?m)^\s*console\.(log|error|warn|debug|info)\s*\([^)]*\)\s*;?\s*(//.*)?\s*$",
    ),
    ("debugger", Language::JavaScript, r"(?m)^\s*debugger\s*;?\s*(//.*)?\s*$"),
];

/// A single compiled debug-statement pattern.
#[derive(Debug, Clone)]
pub struct DebugPattern {
    name: &'static str,
    language: Language,
    regex: Regex,
}

impl DebugPattern {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

/// Content after all patterns have been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stripped {
    pub content: String,
    pub removed: usize,
}

/// Ordered, read-only set of compiled patterns.
///
/// Built once at startup and shared by reference with every cleaner.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    patterns: Vec<DebugPattern>,
}

impl PatternCatalog {
    /// Compile every built-in pattern.
    pub fn new() -> Result<Self> {
        Self::with_languages(&Language::ALL)
    }

    /// Compile only the patterns for the given language families.
    ///
    /// # Example
    /// ```
    /// use debug_sweeper::cleaner::{Language, PatternCatalog};
    ///
    /// let catalog = PatternCatalog::with_languages(&[Language::JavaScript]).unwrap();
    /// assert_eq!(catalog.len(), 2);
    /// ```
    pub fn with_languages(languages: &[Language]) -> Result<Self> {
        let patterns = BUILTIN_PATTERNS
            .iter()
            .filter(|(_, language, _)| languages.contains(language))
            .map(|&(name, language, source)| -> Result<DebugPattern> {
                Ok(DebugPattern {
                    name,
                    language,
                    regex: Regex::new(source)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Get all patterns in application order.
    pub fn patterns(&self) -> &[DebugPattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Apply every pattern in order, each against the output of the previous one.
    ///
    /// Returns the remaining content and the total number of matches removed.
    pub fn strip(&self, content: &str) -> Stripped {
        let mut current = content.to_string();
        let mut removed = 0;

        for pattern in &self.patterns {
            let matches = pattern.regex.find_iter(&current).count();
            if matches > 0 {
                tracing::trace!(pattern = pattern.name, matches, "Pattern matched");
                removed += matches;
                current = pattern.regex.replace_all(&current, "").into_owned();
            }
        }

        Stripped {
            content: current,
            removed,
        }
    }
}
