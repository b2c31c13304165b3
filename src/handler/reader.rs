//! Reading command groups from the master agent's line stream.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::{Command, Request};
use crate::error::Result;

/// Reads one [`Request`] at a time from a line-oriented stream.
///
/// Every line has trailing whitespace (including `\r`) stripped before it is
/// interpreted. Bytes that are not valid UTF-8 are replaced with U+FFFD, so
/// such an OID fails to decode and is answered with `NONE`.
pub struct RequestReader<R> {
    input: R,
    buf: Vec<u8>,
}

impl<R: AsyncBufRead + Unpin> RequestReader<R> {
    /// Wrap a buffered reader.
    pub fn new(input: R) -> Self {
        Self {
            input,
            buf: Vec::new(),
        }
    }

    /// Read the next command group.
    ///
    /// Returns `Ok(None)` when the stream ends, including when it ends between
    /// a command line and its arguments. Fails with
    /// [`Error::UnknownCommand`](crate::Error::UnknownCommand) on a command
    /// token outside the protocol, and with [`Error::Io`](crate::Error::Io) on
    /// read errors.
    pub async fn next_request(&mut self) -> Result<Option<Request>> {
        let Some(line) = self.next_line().await? else {
            return Ok(None);
        };

        let command = Command::parse(&line)?;

        let mut args = Vec::with_capacity(command.arg_count());
        while args.len() < command.arg_count() {
            match self.next_line().await? {
                Some(arg) => args.push(arg),
                None => {
                    tracing::debug!(
                        snmp.command = %command,
                        args.read = args.len(),
                        args.expected = command.arg_count(),
                        "input closed inside command group"
                    );
                    return Ok(None);
                }
            }
        }

        Ok(Some(command.into_request(args)))
    }

    async fn next_line(&mut self) -> Result<Option<String>> {
        self.buf.clear();
        if self.input.read_until(b'\n', &mut self.buf).await? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&self.buf).trim_end().to_owned();
        tracing::trace!(line = %line, "read line");
        Ok(Some(line))
    }
}
