//! Process records shared by every runqueue implementation.

use std::fmt;

/// Virtual time: the scheduling weight a process is ordered by.
pub type Vt = u64;

/// Aggregate of many vt values. Wide enough that no queue of `Vt`s can
/// overflow it.
pub type TimeSum = u128;

/// A schedulable entity: unique label plus virtual-time weight.
///
/// Immutable once enqueued. Changing `vt` means removing the process and
/// enqueueing a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Process {
    /// Unique key within a runqueue.
    pub label: String,

    /// Sort key (not required to be unique).
    pub vt: Vt,
}

impl Process {
    /// Create a new process record.
    pub fn new(label: impl Into<String>, vt: Vt) -> Self {
        Self {
            label: label.into(),
            vt,
        }
    }

    /// Whether this process carries `label`.
    #[inline]
    pub fn has_label(&self, label: &str) -> bool {
        self.label == label
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.label, self.vt)
    }
}

/// Sum the virtual time of a sequence of processes.
pub(crate) fn sum_vt<'a>(processes: impl IntoIterator<Item = &'a Process>) -> TimeSum {
    processes.into_iter().map(|p| TimeSum::from(p.vt)).sum()
}
