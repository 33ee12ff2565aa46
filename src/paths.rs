//! Directory-name catalogues for the generated repository layout.
//!
//! These names are part of the external contract: downstream tooling expects
//! these exact paths.

/// Top-level monorepo directories laid down by the project generator.
pub const CORE_DIRECTORIES: &[&str] = &[
    "projects",
    "libs",
    "tools",
    "scripts",
    "docs",
    "tests",
    "benchmarks",
    "ci",
    "config",
    "shared",
];

/// Categories under `scripts/`.
pub const SCRIPT_DIRECTORIES: &[&str] = &[
    "build",
    "deploy",
    "setup",
    "maintenance",
    "database",
    "utils",
    "ci",
    "dev",
];

/// Categories under `tests/`.
pub const TEST_DIRECTORIES: &[&str] = &[
    "unit",
    "integration",
    "e2e",
    "performance",
    "fixtures",
    "mocks",
    "utils",
];

/// Categories under `benchmarks/`.
pub const BENCHMARK_DIRECTORIES: &[&str] =
    &["performance", "memory", "io", "reports", "tools"];

/// Categories under `ci/`.
pub const CI_DIRECTORIES: &[&str] = &["github", "gitlab", "common"];

/// Categories under `shared/`.
pub const SHARED_DIRECTORIES: &[&str] =
    &["interfaces", "protocols", "schemas", "types", "tools"];

/// Categories under `config/`.
pub const CONFIG_DIRECTORIES: &[&str] =
    &["development", "staging", "production", "testing", "local"];

/// Categories under `tools/`.
pub const TOOL_DIRECTORIES: &[&str] =
    &["linters", "formatters", "analyzers", "generators"];

/// Subdirectories of `docs/manual/<language>/`.
pub const MANUAL_DOC_STRUCTURE: &[&str] = &[
    "guides",
    "api",
    "design",
    "examples",
    "best_practices",
    "troubleshooting",
    "security",
    "changelog",
    "contributing",
    "faq",
];

/// Subdirectories of `docs/auto/<language>/`.
pub const AUTO_DOC_STRUCTURE: &[&str] = &[
    "api",
    "models",
    "functions",
    "error_handling",
    "benchmarks",
    "internal",
    "schemas",
    "configuration",
];

/// Subdirectories of `docs/assets/`.
pub const ASSETS_STRUCTURE: &[&str] = &["images", "diagrams", "css", "fonts"];

/// Subdirectories of `docs/source/`.
pub const SOURCE_DOC_STRUCTURE: &[&str] = &[
    "concepts",
    "examples",
    "getting_started",
    "guides",
    "reference",
    "architecture",
];
