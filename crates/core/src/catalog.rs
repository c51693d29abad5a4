use serde::{Deserialize, Serialize};

/// A single tool shown as a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolEntry {
    pub name: String,
    pub description: String,
    /// Link target for the card (absolute URL).
    pub url: String,
}

impl ToolEntry {
    /// Creates a new tool entry.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            url: url.into(),
        }
    }
}

/// A titled group of tools rendered as one page section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCategory {
    pub title: String,
    pub subtitle: String,
    pub tools: Vec<ToolEntry>,
}

impl ToolCategory {
    /// Creates an empty category with the given headings.
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            tools: Vec::new(),
        }
    }

    /// Appends a tool to this category.
    pub fn with_tool(mut self, tool: ToolEntry) -> Self {
        self.tools.push(tool);
        self
    }
}

/// The static tool listing the landing page renders.
///
/// Categories appear on the page in this order, one section each.
pub fn default_catalog() -> Vec<ToolCategory> {
    vec![
        ToolCategory::new("Bundlers", "Package your code for the browser.")
            .with_tool(ToolEntry::new(
                "webpack",
                "The configurable workhorse for large applications.",
                "https://webpack.js.org",
            ))
            .with_tool(ToolEntry::new(
                "Rollup",
                "Flat bundles for libraries, with first-class tree shaking.",
                "https://rollupjs.org",
            ))
            .with_tool(ToolEntry::new(
                "esbuild",
                "A bundler written in Go that trades plugins for speed.",
                "https://esbuild.github.io",
            ))
            .with_tool(ToolEntry::new(
                "Vite",
                "Dev server on native modules, production builds on Rollup.",
                "https://vitejs.dev",
            )),
        ToolCategory::new("Linters and formatters", "Keep the codebase consistent.")
            .with_tool(ToolEntry::new(
                "ESLint",
                "Pluggable static analysis for JavaScript and TypeScript.",
                "https://eslint.org",
            ))
            .with_tool(ToolEntry::new(
                "Prettier",
                "An opinionated formatter that ends style debates.",
                "https://prettier.io",
            ))
            .with_tool(ToolEntry::new(
                "Stylelint",
                "Lints your stylesheets the way ESLint lints your scripts.",
                "https://stylelint.io",
            )),
        ToolCategory::new("Test runners", "Catch regressions before your users do.")
            .with_tool(ToolEntry::new(
                "Vitest",
                "Vite-native unit testing with a Jest-compatible API.",
                "https://vitest.dev",
            ))
            .with_tool(ToolEntry::new(
                "Playwright",
                "Drives real browsers for end-to-end coverage.",
                "https://playwright.dev",
            ))
            .with_tool(ToolEntry::new(
                "Jest",
                "Batteries-included testing with snapshots and mocks.",
                "https://jestjs.io",
            )),
        ToolCategory::new("Package managers", "Install and pin your dependencies.")
            .with_tool(ToolEntry::new(
                "npm",
                "The default registry client that ships with Node.",
                "https://www.npmjs.com",
            ))
            .with_tool(ToolEntry::new(
                "pnpm",
                "Content-addressed storage keeps node_modules small.",
                "https://pnpm.io",
            ))
            .with_tool(ToolEntry::new(
                "Yarn",
                "Workspaces and plug'n'play resolution for monorepos.",
                "https://yarnpkg.com",
            )),
    ]
}
