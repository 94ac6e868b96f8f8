//! Built-in component catalogue.
//!
//! Benches come from the bench config; AI assistants and tools are fixed
//! definitions. `initialize_components` turns both into the three sections
//! the UI navigates, every entry starting unchecked with unknown status.

use crate::component::{ComponentCategory, Entry, Sections};
use crate::config::WorkbenchConfig;
use bench_error::SetupResult;
use std::path::{Path, PathBuf};

const BENCH_ID_PREFIX: &str = "bench_";
const SEPARATOR_ID_PREFIX: &str = "separator";

/// Benches offered when the config defines none.
pub const DEFAULT_BENCHES: &[&str] = &["flutterBench", "javaBench", "dotNetBench", "pythonBench"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssistantDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Executable whose presence on PATH means "installed".
    pub command: &'static str,
    pub install_cmd: &'static str,
    /// Empty when the tool has no automated uninstall.
    pub uninstall_cmd: &'static str,
    /// Shown after a fresh install when the tool still needs a login.
    pub credential_hint: Option<&'static str>,
}

impl AssistantDefinition {
    pub fn is_separator(&self) -> bool {
        self.id.starts_with(SEPARATOR_ID_PREFIX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub install_instructions: &'static str,
}

pub const ASSISTANTS: &[AssistantDefinition] = &[
    AssistantDefinition {
        id: "claude_cli",
        name: "Claude Code CLI",
        description: "Anthropic Claude Code terminal assistant",
        command: "claude",
        install_cmd: "npm install -g @anthropic-ai/claude-code",
        uninstall_cmd: "npm uninstall -g @anthropic-ai/claude-code",
        credential_hint: Some("Claude CLI: Run `claude login` or set ANTHROPIC_API_KEY"),
    },
    AssistantDefinition {
        id: "copilot_cli",
        name: "GitHub Copilot CLI",
        description: "GitHub Copilot command line interface",
        command: "copilot",
        install_cmd: "npm install -g @github/copilot",
        uninstall_cmd: "npm uninstall -g @github/copilot",
        credential_hint: Some("Copilot CLI: Run `copilot auth login`"),
    },
    AssistantDefinition {
        id: "codex_cli",
        name: "Codex CLI",
        description: "OpenAI Codex terminal assistant",
        command: "codex",
        install_cmd: "npm install -g @openai/codex",
        uninstall_cmd: "npm uninstall -g @openai/codex",
        credential_hint: Some("Codex CLI: Run `codex login` or set OPENAI_API_KEY"),
    },
    AssistantDefinition {
        id: "gemini_cli",
        name: "Gemini CLI",
        description: "Google Gemini terminal assistant",
        command: "gemini",
        install_cmd: "npm install -g @google/gemini-cli",
        uninstall_cmd: "npm uninstall -g @google/gemini-cli",
        credential_hint: Some("Gemini CLI: Run `gemini` and follow Google login prompts"),
    },
    AssistantDefinition {
        id: "opencode_cli",
        name: "OpenCode CLI",
        description: "OpenCode terminal assistant",
        command: "opencode",
        install_cmd: "npm install -g opencode",
        uninstall_cmd: "npm uninstall -g opencode",
        credential_hint: None,
    },
    AssistantDefinition {
        id: "separator1",
        name: "",
        description: "",
        command: "",
        install_cmd: "",
        uninstall_cmd: "",
        credential_hint: None,
    },
    AssistantDefinition {
        id: "spec_kit",
        name: "spec-kit",
        description: "GitHub spec-kit for specifications",
        command: "specify",
        install_cmd: "uvx --from git+https://github.com/github/spec-kit.git specify",
        uninstall_cmd: "",
        credential_hint: None,
    },
    AssistantDefinition {
        id: "openspec",
        name: "OpenSpec",
        description: "Fission OpenSpec CLI",
        command: "openspec",
        install_cmd: "npm install -g @fission-ai/openspec@latest",
        uninstall_cmd: "npm uninstall -g @fission-ai/openspec",
        credential_hint: None,
    },
];

pub const TOOLS: &[ToolDefinition] = &[
    ToolDefinition {
        id: "vscode",
        name: "Visual Studio Code",
        description: "VS Code with Dev Containers extension",
        install_instructions: "Install VS Code from https://code.visualstudio.com/",
    },
    ToolDefinition {
        id: "warp",
        name: "Warp Terminal",
        description: "Modern terminal with AI features",
        install_instructions: "Install Warp from https://www.warp.dev/",
    },
    ToolDefinition {
        id: "wave",
        name: "Wave Terminal",
        description: "Open source AI terminal",
        install_instructions: "Install Wave from https://www.waveterm.dev/",
    },
];

pub fn find_assistant(id: &str) -> Option<&'static AssistantDefinition> {
    ASSISTANTS.iter().find(|def| def.id == id)
}

pub fn find_tool(id: &str) -> Option<&'static ToolDefinition> {
    TOOLS.iter().find(|def| def.id == id)
}

pub fn bench_id(name: &str) -> String {
    format!("{}{}", BENCH_ID_PREFIX, name)
}

/// Bench name for a `bench_<name>` id.
pub fn bench_name(id: &str) -> Option<&str> {
    id.strip_prefix(BENCH_ID_PREFIX)
}

/// Places a bench checkout may live in, most specific last.
pub fn bench_candidate_dirs(project_root: &Path, name: &str) -> Vec<PathBuf> {
    vec![
        project_root.join(name),
        project_root.join("devBenches").join(name),
        project_root.join("adminBenches").join(name),
    ]
}

/// Build the three sections from the bench config and built-in definitions.
pub fn initialize_components(config: &WorkbenchConfig) -> SetupResult<Sections> {
    let mut benches: Vec<Entry> = config
        .benches
        .iter()
        .map(|(name, bench)| {
            let description = bench
                .description
                .as_deref()
                .filter(|d| !d.is_empty())
                .unwrap_or(name.as_str());
            Entry::new(&bench_id(name), name, description, ComponentCategory::Bench)
        })
        .collect();

    if benches.is_empty() {
        benches = DEFAULT_BENCHES
            .iter()
            .map(|name| Entry::new(&bench_id(name), name, name, ComponentCategory::Bench))
            .collect();
    }

    let assistants = ASSISTANTS
        .iter()
        .map(|def| {
            if def.is_separator() {
                Entry::separator(def.id, ComponentCategory::Assistant)
            } else {
                Entry::new(def.id, def.name, def.description, ComponentCategory::Assistant)
            }
        })
        .collect();

    let tools = TOOLS
        .iter()
        .map(|def| Entry::new(def.id, def.name, def.description, ComponentCategory::Tool))
        .collect();

    Sections::new(benches, assistants, tools)
}
