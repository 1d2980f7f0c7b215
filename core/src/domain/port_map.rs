//! Port to PID mapping returned by resolution and listing.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Insertion-ordered map from port number to owning PID.
///
/// Keys are unique. Inserting an existing port replaces its PID but keeps
/// the position of the first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortMap {
    entries: Vec<(u16, u32)>,
    index: HashMap<u16, usize>,
}

impl PortMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite, returning the previous PID for the port.
    pub fn insert(&mut self, port: u16, pid: u32) -> Option<u32> {
        match self.index.get(&port) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i].1, pid)),
            None => {
                self.index.insert(port, self.entries.len());
                self.entries.push((port, pid));
                None
            }
        }
    }

    pub fn get(&self, port: u16) -> Option<u32> {
        self.index.get(&port).map(|&i| self.entries[i].1)
    }

    pub fn contains_port(&self, port: u16) -> bool {
        self.index.contains_key(&port)
    }

    /// Ports in insertion order.
    pub fn ports(&self) -> impl Iterator<Item = u16> + '_ {
        self.entries.iter().map(|&(port, _)| port)
    }

    /// PIDs in insertion order.
    pub fn pids(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.iter().map(|&(_, pid)| pid)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u16, u32)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(u16, u32)> for PortMap {
    fn from_iter<I: IntoIterator<Item = (u16, u32)>>(iter: I) -> Self {
        let mut map = PortMap::new();
        for (port, pid) in iter {
            map.insert(port, pid);
        }
        map
    }
}

impl Serialize for PortMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (port, pid) in &self.entries {
            map.serialize_entry(port, pid)?;
        }
        map.end()
    }
}
