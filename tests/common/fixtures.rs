//! Common test fixtures and constants.

use std::collections::HashMap;
use std::fs;
use std::future::Future;
use std::path::Path;

use ifalias_persist::directory::{
    InterfaceDirectory, InterfaceIndex, InterfaceRecord, SysfsDirectory,
};
use ifalias_persist::handler::Engine;
use ifalias_persist::{Error, Result};
use tempfile::TempDir;

/// ifAlias column OID as net-snmp writes it.
pub const BASE: &str = ".1.3.6.1.2.1.31.1.1.1.18";

/// Interfaces of the reference scenario: `(name, ifindex, alias)`.
pub const SCENARIO: &[(&str, u32, &str)] = &[
    ("lo", 1, "Loopback"),
    ("eth0", 3, "Production"),
    ("eth1", 4, "Internal"),
];

/// Instance OID text for an interface index.
pub fn instance(index: u32) -> String {
    format!("{BASE}.{index}")
}

/// Expected three-line value reply, without the trailing newline.
pub fn value_reply(index: u32, alias: &str) -> String {
    format!("{}\nstring\n{}", instance(index), alias)
}

/// A fake `/sys/class/net` tree in a temporary directory.
pub struct FakeSysfs {
    dir: TempDir,
}

impl FakeSysfs {
    /// Empty tree.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Tree populated with [`SCENARIO`].
    pub fn scenario() -> Self {
        let sysfs = Self::new();
        for (name, index, alias) in SCENARIO {
            sysfs.add(name, *index, Some(*alias));
        }
        sysfs
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Add an interface; `None` leaves out the `ifalias` file.
    pub fn add(&self, name: &str, index: u32, alias: Option<&str>) {
        let dir = self.root().join(name);
        fs::create_dir(&dir).expect("create interface dir");
        fs::write(dir.join("ifindex"), format!("{index}\n")).expect("write ifindex");
        if let Some(alias) = alias {
            self.set_alias(name, alias);
        }
    }

    /// Overwrite the alias file as the kernel presents it.
    pub fn set_alias(&self, name: &str, alias: &str) {
        fs::write(self.root().join(name).join("ifalias"), format!("{alias}\n"))
            .expect("write ifalias");
    }

    /// Write raw alias bytes, which need not be valid UTF-8.
    pub fn set_alias_bytes(&self, name: &str, alias: &[u8]) {
        fs::write(self.root().join(name).join("ifalias"), alias).expect("write ifalias");
    }

    pub fn remove(&self, name: &str) {
        fs::remove_dir_all(self.root().join(name)).expect("remove interface dir");
    }

    /// Open an engine over this tree.
    pub async fn engine(&self) -> Engine<SysfsDirectory> {
        Engine::new(SysfsDirectory::open(self.root()).await.expect("open sysfs"))
    }
}

/// Feed `input` to the engine and return everything it wrote.
pub async fn converse(
    engine: &Engine<SysfsDirectory>,
    input: impl AsRef<[u8]>,
) -> (ifalias_persist::Result<()>, String) {
    let mut output = Vec::new();
    let result = engine.run(input.as_ref(), &mut output).await;
    (result, String::from_utf8(output).expect("utf-8 output"))
}

/// Fixed in-memory directory for tests that do not need a filesystem.
#[derive(Debug, Default)]
pub struct StaticDirectory {
    interfaces: HashMap<InterfaceIndex, Option<String>>,
}

impl StaticDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, index: InterfaceIndex, alias: Option<&str>) -> Self {
        self.interfaces.insert(index, alias.map(str::to_owned));
        self
    }
}

impl InterfaceDirectory for StaticDirectory {
    fn list_indices(&self) -> impl Future<Output = Result<Vec<InterfaceIndex>>> + Send {
        let indices = self.interfaces.keys().copied().collect();
        async move { Ok(indices) }
    }

    fn lookup(&self, index: InterfaceIndex) -> impl Future<Output = Result<InterfaceRecord>> + Send {
        let result = self
            .interfaces
            .get(&index)
            .map(|alias| InterfaceRecord::new(index, alias.clone()))
            .ok_or(Error::NotFound { index });
        async move { result }
    }
}
