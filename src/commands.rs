//! Commands exposed to the host command surface

/// Identifies a host-invokable command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    /// Toggle the selection or the word under the cursor
    ToggleCurrentWord,
    /// Remove every highlight
    ClearHighlights,
}

/// A command definition for the host's command registry
#[derive(Debug, Clone)]
pub struct CommandDef {
    pub id: CommandId,
    /// Name the host registers (e.g. `auto-highlight:toggle`)
    pub name: &'static str,
    /// Human-readable label for command palettes
    pub label: &'static str,
}

/// Every command the engine exposes
pub static COMMANDS: &[CommandDef] = &[
    CommandDef {
        id: CommandId::ToggleCurrentWord,
        name: "auto-highlight:toggle",
        label: "Auto Highlight: Toggle Current Word",
    },
    CommandDef {
        id: CommandId::ClearHighlights,
        name: "auto-highlight:clear",
        label: "Auto Highlight: Clear Highlights",
    },
];

impl CommandId {
    /// Look up a command by its registered name
    pub fn from_name(name: &str) -> Option<Self> {
        COMMANDS.iter().find(|def| def.name == name).map(|def| def.id)
    }

    pub fn def(self) -> &'static CommandDef {
        match self {
            CommandId::ToggleCurrentWord => &COMMANDS[0],
            CommandId::ClearHighlights => &COMMANDS[1],
        }
    }

    pub fn name(self) -> &'static str {
        self.def().name
    }

    pub fn label(self) -> &'static str {
        self.def().label
    }
}
