//! Command definitions
//!
//! Represents named commands sent to the simulator.

/// Raw HCI_Reset packet: command indicator, opcode 0x0C03 (little-endian), no parameters.
///
/// Sent as-is on the connection, outside the named-command framing.
pub const HCI_RESET_PACKET: [u8; 4] = [0x01, 0x03, 0x0C, 0x00];

/// Named commands understood by the simulator's test channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandType {
    TimeoutAll,
    Discover,
    DiscoverInterval,
    Clear,
    SetEventDelay,
    ClearEventDelay,
    CloseTestChannel,
}

impl CommandType {
    /// Every command type, in wire-name order of introduction
    pub const ALL: [CommandType; 7] = [
        CommandType::TimeoutAll,
        CommandType::Discover,
        CommandType::DiscoverInterval,
        CommandType::Clear,
        CommandType::SetEventDelay,
        CommandType::ClearEventDelay,
        CommandType::CloseTestChannel,
    ];

    /// The name carried in the frame
    pub fn wire_name(self) -> &'static str {
        match self {
            CommandType::TimeoutAll => "TIMEOUT_ALL",
            CommandType::Discover => "DISCOVER",
            CommandType::DiscoverInterval => "DISCOVER_INTERVAL",
            CommandType::Clear => "CLEAR",
            CommandType::SetEventDelay => "SET_EVENT_DELAY",
            CommandType::ClearEventDelay => "CLEAR_EVENT_DELAY",
            CommandType::CloseTestChannel => "CLOSE_TEST_CHANNEL",
        }
    }

    /// Look up a command type by its wire name
    pub fn from_wire_name(name: &str) -> Option<CommandType> {
        Self::ALL.into_iter().find(|ty| ty.wire_name() == name)
    }
}

/// A named command with its ordered arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Command name (e.g. `DISCOVER`)
    pub name: String,

    /// Arguments in send order
    pub args: Vec<String>,
}

impl Command {
    /// Create a command from any name and arguments
    pub fn new<I, S>(name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a command for a known command type
    pub fn of<I, S>(command_type: CommandType, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(command_type.wire_name(), args)
    }

    /// Create an argument-less command for a known command type
    pub fn bare(command_type: CommandType) -> Self {
        Self {
            name: command_type.wire_name().to_string(),
            args: Vec::new(),
        }
    }

    /// The known command type, if the name is one the simulator registers
    pub fn command_type(&self) -> Option<CommandType> {
        CommandType::from_wire_name(&self.name)
    }
}
