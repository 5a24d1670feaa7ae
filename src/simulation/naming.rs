//! Sequential names for suns created by mergers

/// Owns its own counter; a fresh generator starts again at `BDY01`
#[derive(Debug, Clone, Default)]
pub struct NameGenerator {
    counter: u32,
}

impl NameGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_name(&mut self) -> String {
        self.counter += 1;
        format!("BDY{:02}", self.counter)
    }

    /// Number of names handed out so far
    pub fn issued(&self) -> u32 {
        self.counter
    }
}
