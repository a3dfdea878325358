//! Interactive actions, one module per command word.

use std::fmt;
use std::str::FromStr;

pub mod add;
pub mod ask;
pub mod exit;
pub mod export;
pub mod hardest;
pub mod import;
pub mod log;
pub mod remove;
pub mod reset;

/// A command word typed at the action prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
    Import,
    Export,
    Ask,
    Exit,
    Log,
    HardestCard,
    ResetStats,
}

impl Action {
    pub const ALL: [Action; 9] = [
        Action::Add,
        Action::Remove,
        Action::Import,
        Action::Export,
        Action::Ask,
        Action::Exit,
        Action::Log,
        Action::HardestCard,
        Action::ResetStats,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Add => "add",
            Action::Remove => "remove",
            Action::Import => "import",
            Action::Export => "export",
            Action::Ask => "ask",
            Action::Exit => "exit",
            Action::Log => "log",
            Action::HardestCard => "hardest card",
            Action::ResetStats => "reset stats",
        }
    }

    /// The action prompt, listing every command word.
    pub fn prompt() -> String {
        let words: Vec<&str> = Self::ALL.iter().map(|a| a.as_str()).collect();
        format!("Input the action ({}):", words.join(", "))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = String;

    /// Command words are matched exactly and case-sensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| format!("unknown action: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_every_action() {
        for action in Action::ALL {
            assert_eq!(action.as_str().parse::<Action>().unwrap(), action);
        }
        assert_eq!(
            "hardest card".parse::<Action>().unwrap(),
            Action::HardestCard
        );
    }

    #[test]
    fn parse_is_exact() {
        assert!("Add".parse::<Action>().is_err());
        assert!("hardest".parse::<Action>().is_err());
        assert!("".parse::<Action>().is_err());
    }

    #[test]
    fn prompt_lists_actions() {
        assert_eq!(
            Action::prompt(),
            "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats):"
        );
    }
}
