use std::time::{SystemTime, UNIX_EPOCH};

/// Sequential section-id generator.
///
/// The seed is the session start time, so ids minted in a later session
/// never repeat ids persisted by an earlier one. Within a session the
/// counter makes every id unique.
#[derive(Debug, Clone)]
pub struct SectionIdGenerator {
    seed: String,
    count: u64,
}

impl SectionIdGenerator {
    pub fn new() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        Self::from_seed(to_base36(millis))
    }

    pub fn from_seed(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            count: 0,
        }
    }

    /// Next id, prefixed with the section type name.
    pub fn new_id(&mut self, prefix: &str) -> String {
        self.count += 1;
        format!("{}-{}-{}", prefix, self.seed, self.count)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

impl Default for SectionIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }

    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
