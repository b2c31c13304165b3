//! The pass_persist command engine.

use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};

use super::{IndexTable, Request, RequestReader, Response};
use crate::codec;
use crate::directory::{InterfaceDirectory, InterfaceRecord};
use crate::error::{Error, Result};

/// Answers pass_persist command groups for the ifAlias column.
///
/// The engine owns its interface directory for as long as it runs; dropping
/// the engine releases it. Requests are handled strictly one at a time.
///
/// # Example
///
/// ```rust,no_run
/// use ifalias_persist::directory::SysfsDirectory;
/// use ifalias_persist::handler::{Engine, Request, Response};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> ifalias_persist::Result<()> {
/// let engine = Engine::new(SysfsDirectory::open("/sys/class/net").await?);
///
/// let response = engine
///     .handle(&Request::GetNext { oid: ".1.3.6.1.2.1.31.1.1.1.18".into() })
///     .await?;
/// if let Response::Value { oid, alias } = &response {
///     println!("first interface: {oid} = {alias:?}");
/// }
///
/// assert_eq!(engine.handle(&Request::Ping).await?, Response::Pong);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Engine<D> {
    directory: D,
}

impl<D: InterfaceDirectory> Engine<D> {
    /// Create an engine over `directory`.
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    /// The interface directory this engine queries.
    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Consume the engine and return its directory.
    pub fn into_inner(self) -> D {
        self.directory
    }

    /// Handle one command group.
    ///
    /// Request errors (malformed OID, unknown interface, end of table) are
    /// answered with [`Response::NoValue`]. Directory failures are returned
    /// as errors, since answering `NONE` would claim the interface does not
    /// exist.
    pub async fn handle(&self, request: &Request) -> Result<Response> {
        let result = match request {
            Request::Ping => return Ok(Response::Pong),
            Request::Set { oid, .. } => {
                tracing::debug!(snmp.oid = %oid, "refusing set");
                return Ok(Response::NotWritable);
            }
            Request::Get { oid } => self.get(oid).await,
            Request::GetNext { oid } => self.get_next(oid).await,
        };

        match result {
            Ok(record) => Ok(Response::value(record)),
            Err(e) if e.is_request_error() => {
                tracing::debug!(
                    snmp.command = %request.command(),
                    error = %e,
                    "no value for request"
                );
                Ok(Response::NoValue)
            }
            Err(e) => Err(e),
        }
    }

    async fn get(&self, oid: &str) -> Result<InterfaceRecord> {
        let index = codec::decode(oid)?;
        self.directory.lookup(index).await
    }

    async fn get_next(&self, oid: &str) -> Result<InterfaceRecord> {
        let index = codec::decode(oid)?;
        let table = IndexTable::from_snapshot(self.directory.list_indices().await?);
        let next = table
            .get_next(index)
            .ok_or(Error::NoNextElement { index })?;

        tracing::trace!(
            snmp.index = index,
            snmp.next = next,
            snmp.candidates = table.len(),
            "resolved next interface"
        );
        self.directory.lookup(next).await
    }

    /// Serve command groups from `input` until it ends.
    ///
    /// Each response is written as its own unit, newline-terminated and
    /// flushed before the next command is read. End of input is a normal
    /// shutdown. Unknown commands, directory failures, and stream I/O errors
    /// end the loop with an error.
    pub async fn run<R, W>(&self, input: R, mut output: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut reader = RequestReader::new(input);
        let mut served: u64 = 0;

        while let Some(request) = reader.next_request().await? {
            let response = self.handle(&request).await?;
            tracing::debug!(
                snmp.command = %request.command(),
                snmp.oid = request.oid().unwrap_or_default(),
                snmp.found = response.is_value(),
                "answered request"
            );

            let mut reply = response.to_string();
            reply.push('\n');
            output.write_all(reply.as_bytes()).await?;
            output.flush().await?;
            served += 1;
        }

        tracing::debug!(served, "input closed");
        Ok(())
    }
}
