use crate::error::InputError;

/// An inclusive range of TCP ports to probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortRange {
    pub start: u16,
    pub end: u16,
}

impl PortRange {
    /// Builds a range, rejecting `start > end`.
    pub fn new(start: u16, end: u16) -> Result<Self, InputError> {
        if start > end {
            return Err(InputError::InvalidPortRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Number of ports in the range (always at least 1).
    pub fn len(&self) -> usize {
        usize::from(self.end - self.start) + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn to_iter(&self) -> impl Iterator<Item = u16> {
        self.start..=self.end
    }

    pub fn contains(&self, port: u16) -> bool {
        self.start <= port && port <= self.end
    }
}
