//! Reporting of packages pinned to different versions across manifests.

use std::fmt;

/// A report of all version conflicts encountered during resolution.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ConflictReport {
    pub conflicts: Vec<VersionConflict>,
}

/// A package requested with several distinct versions, of which only the
/// highest was kept.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionConflict {
    pub name: String,
    pub requested: Vec<String>,
    pub resolved: String,
}

impl ConflictReport {
    pub fn add(&mut self, conflict: VersionConflict) {
        self.conflicts.push(conflict);
    }

    pub fn extend(&mut self, other: ConflictReport) {
        self.conflicts.extend(other.conflicts);
    }

    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conflicts.len()
    }
}

impl fmt::Display for ConflictReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.conflicts.is_empty() {
            return write!(f, "No version conflicts.");
        }
        writeln!(f, "Version conflicts ({}):", self.conflicts.len())?;
        for c in &self.conflicts {
            writeln!(f, "  {c}")?;
        }
        Ok(())
    }
}

impl fmt::Display for VersionConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} requested {} -> {}",
            self.name,
            self.requested.join(", "),
            self.resolved
        )
    }
}
