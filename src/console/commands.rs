//! # Command Definitions
//!
//! The closed command set the console dispatches on.
//!
//! Labels are matched exactly after trimming and lowercasing; there are no
//! parameters. The parameterized "verb target" actions live in the game
//! systems module, not here.

use serde::{Deserialize, Serialize};

/// One recognized console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Spawn a cube at (0, 1, 0)
    CreateCube,
    /// Spawn a sphere at (2, 1, 0)
    CreateSphere,
    /// Spawn a cylinder at (-2, 1, 0)
    CreateCylinder,
    /// Spawn a plane at the origin
    CreatePlane,
    /// Turn the first light blue at intensity 3
    ChangeLight,
    /// Give the camera a random background color
    ChangeBackground,
    /// Move the last created entity up by one unit
    MoveObject,
    /// Destroy everything except the camera, first light, and console host
    DeleteAll,
    /// Macro: create plane, cube, sphere, in that order
    QuickStart,
}

impl Command {
    /// Parses a command label, case-insensitively and ignoring surrounding
    /// whitespace. Returns `None` for anything outside the closed set.
    ///
    /// # Examples
    ///
    /// ```
    /// use worldsmith::Command;
    ///
    /// assert_eq!(Command::parse("  Create Cube "), Some(Command::CreateCube));
    /// assert_eq!(Command::parse("fly"), None);
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_lowercase().as_str() {
            "create cube" => Some(Command::CreateCube),
            "create sphere" => Some(Command::CreateSphere),
            "create cylinder" => Some(Command::CreateCylinder),
            "create plane" => Some(Command::CreatePlane),
            "change light" => Some(Command::ChangeLight),
            "change background" => Some(Command::ChangeBackground),
            "move object" => Some(Command::MoveObject),
            "delete all" => Some(Command::DeleteAll),
            "quick start" => Some(Command::QuickStart),
            _ => None,
        }
    }

    /// The canonical lowercase label for this command.
    pub fn label(&self) -> &'static str {
        match self {
            Command::CreateCube => "create cube",
            Command::CreateSphere => "create sphere",
            Command::CreateCylinder => "create cylinder",
            Command::CreatePlane => "create plane",
            Command::ChangeLight => "change light",
            Command::ChangeBackground => "change background",
            Command::MoveObject => "move object",
            Command::DeleteAll => "delete all",
            Command::QuickStart => "quick start",
        }
    }

    /// All commands in the dispatch table.
    pub const ALL: [Command; 9] = [
        Command::CreateCube,
        Command::CreateSphere,
        Command::CreateCylinder,
        Command::CreatePlane,
        Command::ChangeLight,
        Command::ChangeBackground,
        Command::MoveObject,
        Command::DeleteAll,
        Command::QuickStart,
    ];
}
