//! The exit status vocabulary shared by every component of the suite.
//!
//! Daemons, command-line tools, and resource agents all report outcomes with
//! the codes defined here, both as in-process results and as operating-system
//! exit codes. The numeric values are a stable contract: scripts and
//! monitoring integrations match on the literal numbers, and the same table
//! is defined natively elsewhere in the suite, so entries must never be
//! renumbered or removed. A new code takes a fresh value in an unused slot of
//! the appropriate band.
//!
//! ```
//! use exitstatus::ExitStatus;
//!
//! let raw: i32 = 124;
//! assert_eq!(ExitStatus::try_from(raw), Ok(ExitStatus::Timeout));
//! assert_eq!(ExitStatus::Timeout.name(), "TIMEOUT");
//! ```

mod error;

pub use error::UnknownExitStatus;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Why a process or function exited, covering success as well as every
/// recognized failure condition.
///
/// The discriminants fall into bands: 0-9 are suite outcomes, 64-78 follow
/// the BSD sysexits convention, and 100 and up are suite extensions, with a
/// handful of special values above those. The codes are categorical, so no
/// ordering is derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum ExitStatus {
    // 0-9: suite outcomes.
    /// Success.
    Ok = 0,
    /// Failure with no more specific code available.
    Error = 1,
    /// A parameter passed to the operation was wrong or malformed.
    InvalidParam = 2,
    /// The requested feature is not implemented.
    UnimplementFeature = 3,
    /// The caller lacks the privileges the operation needs.
    InsufficientPriv = 4,
    /// A required component is not installed.
    NotInstalled = 5,
    /// A required component has no usable configuration.
    NotConfigured = 6,
    /// The requested service is not running.
    NotRunning = 7,
    /// The resource is active in the promoted role. Reported by agents
    /// monitoring two-role resources.
    Promoted = 8,
    /// The resource has failed while in the promoted role.
    FailedPromoted = 9,

    // 64-78: the sysexits.h band, value-compatible with the BSD convention.
    /// The command was used incorrectly.
    Usage = 64,
    /// Input data was incorrect in some way.
    #[strum(serialize = "DATAERR")]
    DataErr = 65,
    /// An input file did not exist or was not readable.
    #[strum(serialize = "NOINPUT")]
    NoInput = 66,
    /// The specified user does not exist.
    #[strum(serialize = "NOUSER")]
    NoUser = 67,
    /// The specified host does not exist.
    #[strum(serialize = "NOHOST")]
    NoHost = 68,
    /// A required service is unavailable.
    Unavailable = 69,
    /// Internal software error.
    Software = 70,
    /// Operating system error, such as a failed fork.
    #[strum(serialize = "OSERR")]
    OsErr = 71,
    /// A system file is missing or malformed.
    #[strum(serialize = "OSFILE")]
    OsFile = 72,
    /// An output file could not be created.
    #[strum(serialize = "CANTCREAT")]
    CantCreat = 73,
    /// File I/O error.
    #[strum(serialize = "IOERR")]
    IoErr = 74,
    /// Temporary failure; retrying later may work.
    #[strum(serialize = "TEMPFAIL")]
    TempFail = 75,
    /// The remote end violated the protocol.
    Protocol = 76,
    /// Permission denied at a level above the file system.
    #[strum(serialize = "NOPERM")]
    NoPerm = 77,
    /// Configuration error.
    Config = 78,

    // 100 and up: suite extensions.
    /// Fatal error; the reporting process must not be respawned.
    Fatal = 100,
    /// The local node must panic, that is be fenced or rebooted.
    Panic = 101,
    /// Not connected to the cluster.
    Disconnect = 102,
    /// The update was older than the existing configuration.
    Old = 103,
    /// Configuration digest mismatch.
    Digest = 104,
    /// The requested item does not exist.
    #[strum(serialize = "NOSUCH")]
    NoSuch = 105,
    /// The operation requires quorum and the cluster has none.
    Quorum = 106,
    /// The operation is not safe in the current cluster state.
    Unsafe = 107,
    /// The requested item already exists.
    Exists = 108,
    /// More than one item matched the request.
    Multiple = 109,
    /// The requested item has expired.
    Expired = 110,
    /// The requested item is not yet in effect.
    NotYetInEffect = 111,
    /// The state of the requested item could not be determined.
    Indeterminate = 112,
    /// The requested operation does not apply under current conditions.
    Unsatisfied = 113,

    /// The operation timed out. The value matches the exit status of
    /// timeout(1).
    Timeout = 124,

    /// The resource is active but may soon fail.
    Degraded = 190,
    /// The resource is active in the promoted role but may soon fail.
    DegradedPromoted = 191,

    /// No exit status is available, for example because the action never ran.
    None = 193,
    /// Highest value an exit status can take; doubles as the unknown-status
    /// marker.
    Max = 255,
}

impl ExitStatus {
    /// The symbolic name of this status exactly as tabulated, such as
    /// `"TIMEOUT"` or `"DEGRADED_PROMOTED"`.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

impl From<ExitStatus> for u8 {
    fn from(status: ExitStatus) -> u8 {
        status as u8
    }
}

impl From<ExitStatus> for i32 {
    fn from(status: ExitStatus) -> i32 {
        i32::from(status as u8)
    }
}

impl TryFrom<u8> for ExitStatus {
    type Error = UnknownExitStatus;

    fn try_from(raw: u8) -> Result<Self, UnknownExitStatus> {
        Self::iter()
            .find(|status| *status as u8 == raw)
            .ok_or(UnknownExitStatus(raw.into()))
    }
}

impl TryFrom<i32> for ExitStatus {
    type Error = UnknownExitStatus;

    fn try_from(raw: i32) -> Result<Self, UnknownExitStatus> {
        match u8::try_from(raw) {
            Ok(byte) => Self::try_from(byte),
            Err(_) => Err(UnknownExitStatus(raw)),
        }
    }
}

// The wire representation is the numeric value; that is what the rest of the
// suite and external scripts match on. Names stay a presentation concern.
impl Serialize for ExitStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(u8::from(*self))
    }
}

impl<'de> Deserialize<'de> for ExitStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = i32::deserialize(deserializer)?;
        ExitStatus::try_from(raw).map_err(D::Error::custom)
    }
}

/// Implemented by error types that know which exit status they map to.
///
/// Command-line tools log the error they hit, then exit with the status
/// returned here.
pub trait CliError {
    fn exit_status(&self) -> ExitStatus;
}
