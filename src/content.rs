//! Template catalogue: every boilerplate string the generators emit.
//!
//! Placeholders use `{{name}}` syntax and are resolved by the renderer in
//! [`crate::templates`]. Shell `${VAR}` expansions inside script bodies are
//! left untouched by the renderer.

use crate::generators::Language;

// --- Root configuration files ---------------------------------------------

pub const README_TEMPLATE: &str = r#"# {{repo_name}}

![Version](https://img.shields.io/badge/version-0.1.0-blue)
![Updated](https://img.shields.io/badge/updated-{{current_date}}-orange)
![License](https://img.shields.io/badge/license-MIT-green)

Standardized monorepo structure generated by rsforge.

## Structure

```
.
├── projects/         # Language-specific projects
├── libs/             # Shared libraries and components
├── tools/            # Development and build tools
├── scripts/          # Automation scripts
├── docs/             # Documentation
├── tests/            # Integrated test suite
├── benchmarks/       # Performance benchmarks
└── ci/               # Continuous integration configuration
```

## Getting Started

Clone this repository and explore the structure to get familiar with the
organization.

## Contributing

Contributions are welcome! Please see our [Contributing Guide](CONTRIBUTING.md).

## License

This project is licensed under the MIT License - see the [LICENSE](LICENSE)
file for details.
"#;

pub const GITIGNORE_CONTENT: &str = r#"# Python
__pycache__/
*.py[cod]
*.egg-info/
.pytest_cache/
.coverage
htmlcov/
dist/
build/

# Node.js
node_modules/
npm-debug.log
yarn-error.log
.npm/

# Go
*.o
*.a
*.test
*.prof
vendor/

# Rust
target/
**/*.rs.bk

# Environments
.env
.venv
env/
venv/

# Editors
.vscode/*
!.vscode/settings.json
.idea/
*.iml
*.swp
.history

# OS
.DS_Store
Thumbs.db
"#;

pub const EDITORCONFIG_CONTENT: &str = r#"root = true

[*]
charset = utf-8
end_of_line = lf
insert_final_newline = true
trim_trailing_whitespace = true
indent_style = space
indent_size = 4

[*.{js,json,yml,yaml,toml}]
indent_size = 2

[*.go]
indent_style = tab

[Makefile]
indent_style = tab

[*.md]
trim_trailing_whitespace = false
"#;

pub const CI_WORKFLOW_TEMPLATE: &str = r#"# CI pipeline for {{repo_name}}
name: CI

on:
  push:
    branches: [main]
  pull_request:
    branches: [main]

jobs:
  lint:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - name: Run linters
        run: ./scripts/ci/run_tests.sh lint

  test:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - name: Run test suite
        run: ./scripts/ci/run_tests.sh
"#;

pub const CONTRIBUTING_TEMPLATE: &str = r#"# Contributing to {{repo_name}}

Thank you for considering a contribution!

## Workflow

1. Fork the repository and create a feature branch.
2. Make your changes, following the conventions in `.editorconfig`.
3. Add tests for new behavior.
4. Run `./scripts/ci/run_tests.sh` locally.
5. Open a pull request with a clear description.

## Code Style

- Keep changes focused; one concern per pull request.
- Document public interfaces.
- Match the style of the surrounding code.

## Questions

Contact {{author_name}} <{{author_email}}>.
"#;

pub const CODE_OF_CONDUCT_CONTENT: &str = r#"# Code of Conduct

## Our Pledge

We as members, contributors, and leaders pledge to make participation in our
community a harassment-free experience for everyone.

## Our Standards

Examples of behavior that contributes to a positive environment:

- Demonstrating empathy and kindness toward other people
- Being respectful of differing opinions, viewpoints, and experiences
- Giving and gracefully accepting constructive feedback

Examples of unacceptable behavior:

- The use of sexualized language or imagery
- Trolling, insulting or derogatory comments, and personal attacks
- Public or private harassment

## Enforcement

Instances of abusive, harassing, or otherwise unacceptable behavior may be
reported to the project maintainers. All complaints will be reviewed and
investigated promptly and fairly.
"#;

pub const LICENSE_TEMPLATE: &str = r#"MIT License

Copyright (c) {{current_year}} {{author_name}}

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"#;

pub const SECURITY_TEMPLATE: &str = r#"# Security Policy

## Supported Versions

Only the latest release of {{repo_name}} receives security updates.

## Reporting a Vulnerability

Please report vulnerabilities privately to {{author_email}}. Do not open a
public issue. You will receive a response within five business days.
"#;

pub const CHANGELOG_TEMPLATE: &str = r#"# Changelog

All notable changes to {{repo_name}} will be documented in this file.

The format is based on [Keep a Changelog](https://keepachangelog.com/en/1.1.0/).

## [0.1.0] - {{current_date}}

### Added

- Initial repository structure.
"#;

// --- Documentation --------------------------------------------------------

pub const DOCS_INDEX_TEMPLATE: &str = r#"# Project Documentation

Welcome to the comprehensive documentation for this project.

## Structure

- [Manual Documentation](manual/): Hand-written documentation
- [Auto-Generated Documentation](auto/): Documentation generated from code
- [Assets](assets/): Images, diagrams, and other static assets

## Languages

{{language_list}}
"#;

pub const MANUAL_INDEX_TEMPLATE: &str = r#"# Manual Documentation

Hand-written documentation, organized per language.

{{language_list}}
"#;

pub const AUTO_INDEX_TEMPLATE: &str = r#"# Auto-Generated Documentation

Documentation generated from code, organized per language.

{{language_list}}
"#;

pub const MANUAL_LANG_INDEX_TEMPLATE: &str = r#"# {{language_title}} Documentation

Welcome to the {{language_title}} documentation for this project.

## Contents

- [Guides](guides/): Step-by-step tutorials
- [API Documentation](api/): Detailed API reference
- [Design](design/): Architecture and design documents
- [Examples](examples/): Code examples
- [Best Practices](best_practices/): Recommended patterns and practices
- [Troubleshooting](troubleshooting/): Common issues and solutions
- [Security](security/): Security guidelines and considerations
- [Changelog](changelog/): Version history
- [Contributing](contributing/): How to contribute
- [FAQ](faq/): Frequently Asked Questions
"#;

pub const AUTO_LANG_INDEX_TEMPLATE: &str = r#"# Auto-Generated {{language_title}} Documentation

This section contains automatically generated documentation for the
{{language_title}} code.

## Contents

- [API Reference](api/): Auto-generated API documentation
- [Data Models](models/): Documentation for data models
- [Functions](functions/): Function-level documentation
- [Error Handling](error_handling/): Exception and error documentation
- [Benchmarks](benchmarks/): Performance benchmarks
- [Internal API](internal/): Documentation for internal APIs
- [Schemas](schemas/): Database and data structure schemas
- [Configuration](configuration/): Configuration options and reference
"#;

pub const ASSETS_README_CONTENT: &str = r#"# Documentation Assets

This directory contains static assets used in the documentation:

- `images/`: Screenshots, illustrations, and other images
- `diagrams/`: Architecture diagrams, flowcharts, and UML diagrams
- `css/`: Custom stylesheets for documentation
- `fonts/`: Custom fonts used in documentation
"#;

pub const SOURCE_INDEX_CONTENT: &str = r#"# Source Documentation

This directory contains documentation source files organized by topic:

- [Concepts](concepts/): Core concepts and principles
- [Examples](examples/): Example code and tutorials
- [Getting Started](getting_started/): Quickstart guides
- [Guides](guides/): In-depth guides
- [Reference](reference/): API reference documentation
- [Architecture](architecture/): Architectural overviews
"#;

pub const SPHINX_CONF_TEMPLATE: &str = r#"# Configuration file for the Sphinx documentation builder

project = "{{repo_name}}"
copyright = "{{current_year}}, {{author_name}}"
author = "{{author_name}}"

extensions = [
    "sphinx.ext.autodoc",
    "sphinx.ext.viewcode",
    "sphinx.ext.napoleon",
    "myst_parser",
    "sphinx_rtd_theme",
]

templates_path = ["_templates"]
exclude_patterns = ["_build", "Thumbs.db", ".DS_Store"]

html_theme = "sphinx_rtd_theme"
html_static_path = ["_static"]
"#;

pub const READTHEDOCS_CONTENT: &str = r#"version: 2

build:
  os: ubuntu-22.04
  tools:
    python: "3.10"

sphinx:
  configuration: docs/conf.py

python:
  install:
    - method: pip
      path: .
      extra_requirements:
        - docs
"#;

// --- Scripts ---------------------------------------------------------------

pub const SCRIPTS_README_CONTENT: &str = r#"# Automation Scripts

This directory contains scripts for automating common tasks in the repository.

## Directory Structure

- `build/`: Build automation scripts
- `deploy/`: Deployment scripts
- `setup/`: Environment setup scripts
- `maintenance/`: System maintenance scripts
- `database/`: Database management scripts
- `utils/`: Utility scripts
- `ci/`: CI/CD helper scripts
- `dev/`: Development utility scripts

## Usage

Most scripts can be run directly from the command line:

```bash
./scripts/setup/install_dependencies.sh
```

## Contributing

When adding new scripts:
1. Make sure they are executable (`chmod +x script.sh`)
2. Add appropriate documentation and usage examples
3. Follow the repository's coding standards
"#;

pub const INSTALL_DEPS_SCRIPT: &str = r#"#!/usr/bin/env bash
# Installs dependencies for all supported languages found in the repo root.

set -euo pipefail

SCRIPT_DIR="$( cd "$( dirname "${BASH_SOURCE[0]}" )" && pwd )"
REPO_ROOT="$(cd "$SCRIPT_DIR/../.." && pwd)"

echo "Installing dependencies..."

if command -v python3 &> /dev/null && [ -f "$REPO_ROOT/requirements.txt" ]; then
    python3 -m pip install -r "$REPO_ROOT/requirements.txt"
fi

if command -v node &> /dev/null && [ -f "$REPO_ROOT/package.json" ]; then
    (cd "$REPO_ROOT" && npm install)
fi

if command -v go &> /dev/null && [ -f "$REPO_ROOT/go.mod" ]; then
    (cd "$REPO_ROOT" && go mod download)
fi

if command -v cargo &> /dev/null && [ -f "$REPO_ROOT/Cargo.toml" ]; then
    (cd "$REPO_ROOT" && cargo fetch)
fi

echo "Dependency installation completed."
"#;

pub const BUILD_ALL_SCRIPT: &str = r#"#!/usr/bin/env bash
# Builds every project under projects/.

set -euo pipefail

SCRIPT_DIR="$( cd "$( dirname "${BASH_SOURCE[0]}" )" && pwd )"
REPO_ROOT="$(cd "$SCRIPT_DIR/../.." && pwd)"

for project in "$REPO_ROOT"/projects/*/; do
    name="$(basename "$project")"
    echo "Building $name..."
    case "$name" in
        python_*)  (cd "$project" && python3 -m pip install -e . --quiet) ;;
        nodejs_*)  (cd "$project" && npm install --silent) ;;
        go_*)      (cd "$project" && go build ./...) ;;
        rust_*)    (cd "$project" && cargo build --quiet) ;;
        *)         echo "No build rule for $name, skipping." ;;
    esac
done

echo "All builds completed."
"#;

pub const RUN_TESTS_SCRIPT: &str = r#"#!/usr/bin/env bash
# Runs the test suite for every project under projects/.

set -euo pipefail

SCRIPT_DIR="$( cd "$( dirname "${BASH_SOURCE[0]}" )" && pwd )"
REPO_ROOT="$(cd "$SCRIPT_DIR/../.." && pwd)"

for project in "$REPO_ROOT"/projects/*/; do
    name="$(basename "$project")"
    echo "Testing $name..."
    case "$name" in
        python_*)  (cd "$project" && python3 -m pytest tests/ || true) ;;
        nodejs_*)  (cd "$project" && npm test || true) ;;
        go_*)      (cd "$project" && go test ./... || true) ;;
        rust_*)    (cd "$project" && cargo test || true) ;;
        *)         echo "No test rule for $name, skipping." ;;
    esac
done

echo "Test run completed."
"#;

// --- Per-language project scaffolds ----------------------------------------

pub const PROJECT_README_TEMPLATE: &str = r#"# {{project_name}}

{{language_title}} project within the monorepo structure.

## Getting Started

See the top-level documentation for build and test conventions shared across
all projects.
"#;

pub const PYPROJECT_TOML_TEMPLATE: &str = r#"[build-system]
requires = ["setuptools>=61.0"]
build-backend = "setuptools.build_meta"

[project]
name = "{{project_name}}"
version = "0.1.0"
description = "Python project within the monorepo"
readme = "README.md"
requires-python = ">=3.10"
license = {text = "MIT"}
authors = [
    {name = "{{author_name}}", email = "{{author_email}}"},
]

[project.optional-dependencies]
dev = [
    "pytest>=7.0.0",
    "black>=23.0.0",
    "mypy>=1.0.0",
]

[tool.pytest.ini_options]
testpaths = ["tests"]
"#;

pub const PACKAGE_JSON_TEMPLATE: &str = r#"{
  "name": "{{project_name}}",
  "version": "0.1.0",
  "description": "Node.js project within the monorepo",
  "main": "src/index.js",
  "scripts": {
    "test": "jest",
    "start": "node src/index.js"
  },
  "author": "{{author_name}} <{{author_email}}>",
  "license": "MIT",
  "devDependencies": {
    "jest": "^29.7.0"
  }
}
"#;

pub const GO_MOD_TEMPLATE: &str = r#"module {{project_name}}

go 1.21
"#;

pub const CARGO_TOML_TEMPLATE: &str = r#"[package]
name = "{{project_name}}"
version = "0.1.0"
edition = "2021"
authors = ["{{author_name}} <{{author_email}}>"]
license = "MIT"
description = "Rust project within the monorepo"

[dependencies]
"#;

pub const PYTHON_INIT_CONTENT: &str = r#""""Python project module."""

__version__ = "0.1.0"
"#;

pub const PYTHON_MAIN_CONTENT: &str = r#""""Main entry point for the Python project."""


def run() -> dict:
    """Run the main functionality of the project."""
    return {"status": "success", "message": "Hello from the Python project!"}


if __name__ == "__main__":
    print(run())
"#;

pub const PYTHON_TEST_CONTENT: &str = r#"import unittest


class TestExample(unittest.TestCase):
    def test_example(self):
        self.assertTrue(True)


if __name__ == "__main__":
    unittest.main()
"#;

pub const NODEJS_INDEX_CONTENT: &str = r#"'use strict';

/**
 * Run the main functionality of the project.
 * @returns {Object} Result object
 */
function run() {
  return { status: 'success', message: 'Hello from the Node.js project!' };
}

module.exports = { run };

if (require.main === module) {
  console.log(run());
}
"#;

pub const NODEJS_TEST_CONTENT: &str = r#"const assert = require('assert');

describe('Example Test', function () {
  it('should pass', function () {
    assert.strictEqual(1, 1);
  });
});
"#;

pub const GO_MAIN_CONTENT: &str = r#"package main

import "fmt"

func Run() string {
	return "Hello from the Go project!"
}

func main() {
	fmt.Println(Run())
}
"#;

pub const GO_TEST_CONTENT: &str = r#"package main

import "testing"

func TestExample(t *testing.T) {
	if 1 != 1 {
		t.Errorf("Expected 1 to equal 1")
	}
}
"#;

pub const RUST_LIB_CONTENT: &str = r#"//! Library crate for the Rust project.

pub fn run() -> &'static str {
    "Hello from the Rust project!"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        assert_eq!(run(), "Hello from the Rust project!");
    }
}
"#;

pub const RUST_MAIN_CONTENT: &str = r#"fn main() {
    println!("{}", rust_project::run());
}
"#;

/// Language-specific package manifest: (file name, template id).
pub fn project_manifest(language: Language) -> (&'static str, &'static str) {
    match language {
        Language::Python => ("pyproject.toml", "pyproject_toml"),
        Language::Nodejs => ("package.json", "package_json"),
        Language::Go => ("go.mod", "go_mod"),
        Language::Rust => ("Cargo.toml", "cargo_toml"),
    }
}

/// Full template catalogue as (id, body) pairs, registered at store
/// construction. Ids are referenced by the generators.
pub const CATALOGUE: &[(&str, &str)] = &[
    ("readme", README_TEMPLATE),
    ("gitignore", GITIGNORE_CONTENT),
    ("editorconfig", EDITORCONFIG_CONTENT),
    ("ci_workflow", CI_WORKFLOW_TEMPLATE),
    ("contributing", CONTRIBUTING_TEMPLATE),
    ("code_of_conduct", CODE_OF_CONDUCT_CONTENT),
    ("license", LICENSE_TEMPLATE),
    ("security", SECURITY_TEMPLATE),
    ("changelog", CHANGELOG_TEMPLATE),
    ("docs_index", DOCS_INDEX_TEMPLATE),
    ("manual_index", MANUAL_INDEX_TEMPLATE),
    ("auto_index", AUTO_INDEX_TEMPLATE),
    ("manual_lang_index", MANUAL_LANG_INDEX_TEMPLATE),
    ("auto_lang_index", AUTO_LANG_INDEX_TEMPLATE),
    ("assets_readme", ASSETS_README_CONTENT),
    ("source_index", SOURCE_INDEX_CONTENT),
    ("sphinx_conf", SPHINX_CONF_TEMPLATE),
    ("readthedocs", READTHEDOCS_CONTENT),
    ("scripts_readme", SCRIPTS_README_CONTENT),
    ("install_deps", INSTALL_DEPS_SCRIPT),
    ("build_all", BUILD_ALL_SCRIPT),
    ("run_tests", RUN_TESTS_SCRIPT),
    ("project_readme", PROJECT_README_TEMPLATE),
    ("pyproject_toml", PYPROJECT_TOML_TEMPLATE),
    ("package_json", PACKAGE_JSON_TEMPLATE),
    ("go_mod", GO_MOD_TEMPLATE),
    ("cargo_toml", CARGO_TOML_TEMPLATE),
    ("python_init", PYTHON_INIT_CONTENT),
    ("python_main", PYTHON_MAIN_CONTENT),
    ("python_test", PYTHON_TEST_CONTENT),
    ("nodejs_index", NODEJS_INDEX_CONTENT),
    ("nodejs_test", NODEJS_TEST_CONTENT),
    ("go_main", GO_MAIN_CONTENT),
    ("go_test", GO_TEST_CONTENT),
    ("rust_lib", RUST_LIB_CONTENT),
    ("rust_main", RUST_MAIN_CONTENT),
];
