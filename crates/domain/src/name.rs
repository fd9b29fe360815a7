use crate::errors::DomainError;
use std::fmt;
use std::str::FromStr;

/// Maximum length of a single DNS label in octets (RFC 1035 §2.3.4).
const MAX_LABEL_LEN: usize = 63;

/// A DNS name in presentation format, normalized to lowercase labels.
///
/// The root name has zero labels. A trailing dot is accepted and dropped on
/// parse; `Display` always re-adds it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DnsName {
    labels: Vec<String>,
}

impl DnsName {
    pub fn root() -> Self {
        Self { labels: Vec::new() }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    /// True when the leftmost label is the wildcard label `*`.
    pub fn is_wildcard(&self) -> bool {
        self.labels.first().is_some_and(|l| l == "*")
    }

    /// True when usable as a record owner pattern: either no wildcard at all,
    /// or a single `*` in the leftmost position.
    pub fn is_valid_pattern(&self) -> bool {
        self.labels
            .iter()
            .enumerate()
            .all(|(i, l)| l != "*" || i == 0)
    }

    /// Tests `name` against this owner pattern.
    ///
    /// A leftmost `*` matches exactly one label at its position; the label
    /// counts must be equal and every other label must compare equal. A
    /// pattern without a wildcard matches only by whole-name equality.
    pub fn matches(&self, name: &DnsName) -> bool {
        if !self.is_wildcard() {
            return self == name;
        }
        if self.labels.len() != name.labels.len() {
            return false;
        }
        self.labels[1..] == name.labels[1..]
    }
}

impl FromStr for DnsName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stripped = s.strip_suffix('.').unwrap_or(s);
        if stripped.is_empty() {
            return Ok(Self::root());
        }
        let mut labels = Vec::new();
        for label in stripped.split('.') {
            if label.is_empty() {
                return Err(DomainError::InvalidDomainName(format!(
                    "empty label in '{s}'"
                )));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DomainError::InvalidDomainName(format!(
                    "label '{label}' exceeds {MAX_LABEL_LEN} octets"
                )));
            }
            labels.push(label.to_ascii_lowercase());
        }
        Ok(Self { labels })
    }
}

impl fmt::Display for DnsName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.labels.is_empty() {
            return write!(f, ".");
        }
        for label in &self.labels {
            write!(f, "{label}.")?;
        }
        Ok(())
    }
}
