//! Interface directory backed by Linux sysfs (`/sys/class/net`).
//!
//! Each interface is a directory under the root holding an `ifindex` file and,
//! for devices that support it, an `ifalias` file. Both files end in a newline.

use super::{InterfaceDirectory, InterfaceIndex, InterfaceRecord};
use crate::error::{Error, Result};
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};

/// Default sysfs location of network interfaces.
pub const DEFAULT_SYSFS_ROOT: &str = "/sys/class/net";

/// Interface directory reading `<root>/<ifname>/{ifindex,ifalias}`.
///
/// Nothing is cached: every call re-reads the directory, so interfaces that
/// appear or disappear between requests are seen immediately.
///
/// # Example
///
/// ```rust,no_run
/// use ifalias_persist::directory::{InterfaceDirectory, SysfsDirectory};
///
/// # async fn example() -> ifalias_persist::Result<()> {
/// let directory = SysfsDirectory::open("/sys/class/net").await?;
/// for index in directory.list_indices().await? {
///     let record = directory.lookup(index).await?;
///     println!("{} {:?}", record.index, record.alias);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SysfsDirectory {
    root: PathBuf,
}

impl SysfsDirectory {
    /// Open the directory rooted at `root`.
    ///
    /// Fails with [`Error::Directory`] if `root` is missing or not a directory.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let meta = tokio::fs::metadata(&root)
            .await
            .map_err(|e| Error::directory(&root, e))?;

        if !meta.is_dir() {
            return Err(Error::directory(
                &root,
                io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
            ));
        }

        tracing::debug!(iface.root = %root.display(), "opened sysfs interface directory");
        Ok(Self { root })
    }

    /// The sysfs root this directory reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read every interface directory under the root with its index.
    async fn scan(&self) -> Result<Vec<(InterfaceIndex, PathBuf)>> {
        let mut entries = tokio::fs::read_dir(&self.root)
            .await
            .map_err(|e| Error::directory(&self.root, e))?;

        let mut interfaces = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| Error::directory(&self.root, e))?
        {
            let path = entry.path();
            if let Some(index) = read_index(&path).await? {
                interfaces.push((index, path));
            }
        }

        tracing::trace!(
            iface.root = %self.root.display(),
            iface.count = interfaces.len(),
            "scanned sysfs interfaces"
        );
        Ok(interfaces)
    }
}

/// Read `<dir>/ifindex`.
///
/// Returns `None` for entries that are not interfaces (such as
/// `bonding_masters`) or that vanished during the scan.
async fn read_index(dir: &Path) -> Result<Option<InterfaceIndex>> {
    let file = dir.join("ifindex");
    let text = match tokio::fs::read(&file).await {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) if is_gone(&e) => {
            tracing::trace!(iface.path = %dir.display(), "skipping entry without ifindex");
            return Ok(None);
        }
        Err(e) => return Err(Error::directory(file, e)),
    };

    match text.trim().parse() {
        Ok(index) => Ok(Some(index)),
        Err(_) => {
            tracing::warn!(
                iface.path = %file.display(),
                iface.content = text.trim(),
                "ignoring interface with unparsable ifindex"
            );
            Ok(None)
        }
    }
}

/// Read `<dir>/ifalias`, `None` if the device has no alias file.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD. Fails with [`Error::NotFound`] if the interface itself disappeared.
async fn read_alias(index: InterfaceIndex, dir: &Path) -> Result<Option<String>> {
    let file = dir.join("ifalias");
    match tokio::fs::read(&file).await {
        Ok(bytes) => {
            let text = String::from_utf8_lossy(&bytes);
            Ok(Some(text.trim_end_matches('\n').to_owned()))
        }
        Err(e) if is_gone(&e) => match tokio::fs::try_exists(dir).await {
            Ok(true) => Ok(None),
            Ok(false) => Err(Error::NotFound { index }),
            Err(e) => Err(Error::directory(dir, e)),
        },
        Err(e) => Err(Error::directory(file, e)),
    }
}

fn is_gone(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

impl InterfaceDirectory for SysfsDirectory {
    fn list_indices(&self) -> impl Future<Output = Result<Vec<InterfaceIndex>>> + Send {
        async move {
            let interfaces = self.scan().await?;
            Ok(interfaces.into_iter().map(|(index, _)| index).collect())
        }
    }

    fn lookup(&self, index: InterfaceIndex) -> impl Future<Output = Result<InterfaceRecord>> + Send {
        async move {
            let interfaces = self.scan().await?;
            let Some((_, dir)) = interfaces.into_iter().find(|(i, _)| *i == index) else {
                return Err(Error::NotFound { index });
            };

            let alias = read_alias(index, &dir).await?;
            Ok(InterfaceRecord::new(index, alias))
        }
    }
}
