/// The caller's public SSH key, as produced by the local key command.
///
/// Surrounding whitespace is stripped on construction; the remaining
/// material is compared byte-for-byte against remote records. Fetched
/// once per run and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalKey {
    material: String,
}

impl LocalKey {
    /// Parse raw command output into a key, if it contains one.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            material: trimmed.to_string(),
        })
    }

    /// The exact key material used for comparison and upload.
    pub fn material(&self) -> &str {
        &self.material
    }
}

impl std::fmt::Display for LocalKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_strips_surrounding_whitespace() {
        let key = LocalKey::parse("  ssh-ed25519 AAAA user@host\n").unwrap();
        assert_eq!(key.material(), "ssh-ed25519 AAAA user@host");
    }

    #[test]
    fn parse_keeps_interior_whitespace() {
        let key = LocalKey::parse("ssh-ed25519 AAAA\n").unwrap();
        assert_eq!(key.material(), "ssh-ed25519 AAAA");
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert!(LocalKey::parse("").is_none());
        assert!(LocalKey::parse("   \n\t").is_none());
    }
}
