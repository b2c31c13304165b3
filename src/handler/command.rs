//! pass_persist command vocabulary.

use crate::error::{Error, Result};

/// Command verb sent by the master agent.
///
/// The set is closed: anything else on a command line is a contract breach
/// by the master agent and is reported as [`Error::UnknownCommand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Liveness probe.
    Ping,
    /// Fetch one instance.
    Get,
    /// Fetch the instance following an OID.
    GetNext,
    /// Write request (always refused).
    Set,
}

impl Command {
    /// Parse a command token. Matching is case-sensitive, as net-snmp sends
    /// `PING` upper-case and the rest lower-case.
    pub fn parse(token: &str) -> Result<Self> {
        match token {
            "PING" => Ok(Command::Ping),
            "get" => Ok(Command::Get),
            "getnext" => Ok(Command::GetNext),
            "set" => Ok(Command::Set),
            other => Err(Error::UnknownCommand {
                command: other.into(),
            }),
        }
    }

    /// Number of argument lines following the command line.
    pub const fn arg_count(self) -> usize {
        match self {
            Command::Ping => 0,
            Command::Get | Command::GetNext => 1,
            Command::Set => 2,
        }
    }

    /// Wire token of this command.
    pub const fn as_str(self) -> &'static str {
        match self {
            Command::Ping => "PING",
            Command::Get => "get",
            Command::GetNext => "getnext",
            Command::Set => "set",
        }
    }

    /// Attach argument lines to this command.
    ///
    /// Missing arguments are taken as empty strings; extra ones are ignored.
    pub fn into_request(self, args: impl IntoIterator<Item = String>) -> Request {
        let mut args = args.into_iter();
        let mut next = || args.next().unwrap_or_default();

        match self {
            Command::Ping => Request::Ping,
            Command::Get => Request::Get { oid: next() },
            Command::GetNext => Request::GetNext { oid: next() },
            Command::Set => {
                let oid = next();
                let value = next();
                Request::Set { oid, value }
            }
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One complete command group: the verb and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// `PING`
    Ping,
    /// `get` followed by an OID line.
    Get { oid: String },
    /// `getnext` followed by an OID line.
    GetNext { oid: String },
    /// `set` followed by OID and value lines.
    Set { oid: String, value: String },
}

impl Request {
    /// The verb of this request.
    pub fn command(&self) -> Command {
        match self {
            Request::Ping => Command::Ping,
            Request::Get { .. } => Command::Get,
            Request::GetNext { .. } => Command::GetNext,
            Request::Set { .. } => Command::Set,
        }
    }

    /// The OID argument, if the command takes one.
    pub fn oid(&self) -> Option<&str> {
        match self {
            Request::Ping => None,
            Request::Get { oid } | Request::GetNext { oid } | Request::Set { oid, .. } => {
                Some(oid)
            }
        }
    }
}
