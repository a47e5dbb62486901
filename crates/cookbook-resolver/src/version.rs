//! Package version parsing and comparison.
//!
//! Versions follow PEP 440 precedence, which conda and pip both use for
//! their pins:
//! - An optional epoch `N!` outranks everything else
//! - Release segments compare numerically; trailing zeros are insignificant
//! - Suffixes order as `.devN` < `aN` < `bN` < `rcN` < release < `.postN`
//! - A local label `+abc` sorts after the same version without one
//!
//! Strings that are not valid PEP 440 (`1.26.*`, `0.4_cuda`) are kept as
//! legacy versions: they compare segment-wise among themselves and sort
//! below every valid version.

use std::cmp::Ordering;
use std::fmt;

/// A parsed package version.
#[derive(Debug, Clone)]
pub struct PackageVersion {
    pub original: String,
    kind: VersionKind,
}

#[derive(Debug, Clone)]
enum VersionKind {
    Pep440(Pep440),
    Legacy(Vec<Segment>),
}

#[derive(Debug, Clone)]
struct Pep440 {
    epoch: u64,
    release: Vec<u64>,
    pre: Option<(PreRelease, u64)>,
    post: Option<u64>,
    dev: Option<u64>,
    local: Option<Vec<LocalSegment>>,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
enum PreRelease {
    Alpha,
    Beta,
    Rc,
}

/// Position of a version relative to its release: dev-only builds sort
/// before any pre-release, final releases after.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
enum PreKey {
    DevOnly,
    Pre(PreRelease, u64),
    Final,
}

#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd)]
enum LocalSegment {
    Text(String),
    Numeric(u64),
}

#[derive(Debug, Clone, Eq, PartialEq)]
enum Segment {
    Numeric(u64),
    Qualifier(QualifierKind),
    Text(String),
}

/// Well-known qualifiers with defined ordering.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
enum QualifierKind {
    Dev,
    Alpha,
    Beta,
    Rc,
    Release,
    Post,
}

impl PackageVersion {
    pub fn parse(version: &str) -> Self {
        let normalized = version.trim().to_lowercase();
        let normalized = normalized.strip_prefix('v').unwrap_or(&normalized);
        let kind = match parse_pep440(normalized) {
            Some(v) => VersionKind::Pep440(v),
            None => VersionKind::Legacy(parse_segments(normalized)),
        };
        Self {
            original: version.to_string(),
            kind,
        }
    }
}

impl PartialEq for PackageVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PackageVersion {}

impl fmt::Display for PackageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl Ord for PackageVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.kind, &other.kind) {
            (VersionKind::Pep440(a), VersionKind::Pep440(b)) => compare_pep440(a, b),
            (VersionKind::Legacy(a), VersionKind::Legacy(b)) => compare_legacy(a, b),
            (VersionKind::Legacy(_), VersionKind::Pep440(_)) => Ordering::Less,
            (VersionKind::Pep440(_), VersionKind::Legacy(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for PackageVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn compare_pep440(a: &Pep440, b: &Pep440) -> Ordering {
    a.epoch
        .cmp(&b.epoch)
        .then_with(|| compare_release(&a.release, &b.release))
        .then_with(|| pre_key(a).cmp(&pre_key(b)))
        .then_with(|| a.post.cmp(&b.post))
        .then_with(|| dev_key(a).cmp(&dev_key(b)))
        .then_with(|| a.local.cmp(&b.local))
}

fn compare_release(a: &[u64], b: &[u64]) -> Ordering {
    let max_len = a.len().max(b.len());
    (0..max_len)
        .map(|i| {
            let x = a.get(i).copied().unwrap_or(0);
            let y = b.get(i).copied().unwrap_or(0);
            x.cmp(&y)
        })
        .find(|ord| *ord != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

fn pre_key(v: &Pep440) -> PreKey {
    match (v.pre, v.post, v.dev) {
        (Some((kind, n)), _, _) => PreKey::Pre(kind, n),
        (None, None, Some(_)) => PreKey::DevOnly,
        _ => PreKey::Final,
    }
}

/// No dev segment sorts after any dev segment.
fn dev_key(v: &Pep440) -> (bool, u64) {
    match v.dev {
        Some(n) => (false, n),
        None => (true, 0),
    }
}

fn compare_legacy(a: &[Segment], b: &[Segment]) -> Ordering {
    let max_len = a.len().max(b.len());
    for i in 0..max_len {
        let ord = compare_segments(a.get(i), b.get(i));
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

fn compare_segments(a: Option<&Segment>, b: Option<&Segment>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (Some(s), None) => compare_segment_to_empty(s),
        (None, Some(s)) => compare_segment_to_empty(s).reverse(),
        (Some(a), Some(b)) => compare_two_segments(a, b),
    }
}

fn compare_segment_to_empty(seg: &Segment) -> Ordering {
    match seg {
        Segment::Numeric(0) => Ordering::Equal,
        Segment::Numeric(_) => Ordering::Greater,
        Segment::Qualifier(q) => q.cmp(&QualifierKind::Release),
        Segment::Text(_) => Ordering::Less,
    }
}

fn compare_two_segments(a: &Segment, b: &Segment) -> Ordering {
    match (a, b) {
        (Segment::Numeric(a), Segment::Numeric(b)) => a.cmp(b),
        (Segment::Qualifier(a), Segment::Qualifier(b)) => a.cmp(b),
        (Segment::Text(a), Segment::Text(b)) => a.cmp(b),
        (Segment::Numeric(_), _) => Ordering::Greater,
        (_, Segment::Numeric(_)) => Ordering::Less,
        (Segment::Qualifier(q), Segment::Text(_)) => {
            if *q >= QualifierKind::Release {
                Ordering::Greater
            } else {
                Ordering::Less
            }
        }
        (Segment::Text(_), Segment::Qualifier(q)) => {
            if *q >= QualifierKind::Release {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        }
    }
}

const SEPARATORS: [char; 3] = ['.', '-', '_'];

fn parse_pep440(version: &str) -> Option<Pep440> {
    let (epoch, rest) = match version.split_once('!') {
        Some((epoch, rest)) => (epoch.parse::<u64>().ok()?, rest),
        None => (0, version),
    };
    let (public, local) = match rest.split_once('+') {
        Some((public, local)) => (public, Some(parse_local(local)?)),
        None => (rest, None),
    };

    let mut rest = public;
    let mut release = Vec::new();
    loop {
        let digits = leading(rest, |c| c.is_ascii_digit());
        if digits.is_empty() {
            return None;
        }
        release.push(digits.parse::<u64>().ok()?);
        rest = &rest[digits.len()..];
        match rest.strip_prefix('.') {
            Some(next) if next.starts_with(|c: char| c.is_ascii_digit()) => rest = next,
            _ => break,
        }
    }

    let mut parsed = Pep440 {
        epoch,
        release,
        pre: None,
        post: None,
        dev: None,
        local,
    };

    // Suffixes must appear in pre, post, dev order, each at most once.
    let mut stage = 0;
    while !rest.is_empty() {
        let implicit_post = rest.starts_with('-');
        let stripped = rest.strip_prefix(SEPARATORS).unwrap_or(rest);
        let letters = leading(stripped, |c| c.is_ascii_alphabetic());
        let after_letters = &stripped[letters.len()..];
        let number_part = after_letters.strip_prefix(SEPARATORS).unwrap_or(after_letters);
        let digits = leading(number_part, |c| c.is_ascii_digit());
        let number: u64 = if digits.is_empty() { 0 } else { digits.parse().ok()? };

        match letters {
            "" if implicit_post && !digits.is_empty() && stage <= 1 => {
                parsed.post = Some(number);
                stage = 2;
            }
            "a" | "alpha" if stage == 0 => {
                parsed.pre = Some((PreRelease::Alpha, number));
                stage = 1;
            }
            "b" | "beta" if stage == 0 => {
                parsed.pre = Some((PreRelease::Beta, number));
                stage = 1;
            }
            "c" | "rc" | "pre" | "preview" if stage == 0 => {
                parsed.pre = Some((PreRelease::Rc, number));
                stage = 1;
            }
            "post" | "rev" | "r" if stage <= 1 => {
                parsed.post = Some(number);
                stage = 2;
            }
            "dev" if stage <= 2 => {
                parsed.dev = Some(number);
                stage = 3;
            }
            _ => return None,
        }

        rest = if digits.is_empty() {
            after_letters
        } else {
            &number_part[digits.len()..]
        };
    }

    Some(parsed)
}

fn parse_local(local: &str) -> Option<Vec<LocalSegment>> {
    local
        .split(SEPARATORS)
        .map(|part| {
            if part.is_empty() || !part.chars().all(|c| c.is_ascii_alphanumeric()) {
                None
            } else if let Ok(n) = part.parse::<u64>() {
                Some(LocalSegment::Numeric(n))
            } else {
                Some(LocalSegment::Text(part.to_string()))
            }
        })
        .collect()
}

fn leading(s: &str, pred: impl Fn(char) -> bool) -> &str {
    let end = s.find(|c: char| !pred(c)).unwrap_or(s.len());
    &s[..end]
}

fn parse_segments(version: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current = String::new();

    for ch in version.chars() {
        let boundary = current
            .chars()
            .last()
            .is_some_and(|last| last.is_ascii_digit() != ch.is_ascii_digit());
        if SEPARATORS.contains(&ch) || boundary {
            if !current.is_empty() {
                segments.push(classify(&current));
                current.clear();
            }
        }
        if !SEPARATORS.contains(&ch) {
            current.push(ch);
        }
    }
    if !current.is_empty() {
        segments.push(classify(&current));
    }

    segments
}

fn classify(token: &str) -> Segment {
    if let Ok(n) = token.parse::<u64>() {
        return Segment::Numeric(n);
    }
    match token {
        "dev" => Segment::Qualifier(QualifierKind::Dev),
        "alpha" | "a" => Segment::Qualifier(QualifierKind::Alpha),
        "beta" | "b" => Segment::Qualifier(QualifierKind::Beta),
        "rc" | "c" | "pre" | "preview" => Segment::Qualifier(QualifierKind::Rc),
        "final" | "release" => Segment::Qualifier(QualifierKind::Release),
        "post" | "rev" | "r" => Segment::Qualifier(QualifierKind::Post),
        _ => Segment::Text(token.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> PackageVersion {
        PackageVersion::parse(s)
    }

    #[test]
    fn numeric_not_lexicographic() {
        assert!(v("1.2.0") < v("1.10.0"));
        assert!(v("0.9") < v("0.10"));
    }

    #[test]
    fn trailing_zeros_equal() {
        assert_eq!(v("1.0"), v("1.0.0"));
        assert_eq!(v("2"), v("2.0.0.0"));
    }

    #[test]
    fn prerelease_ordering() {
        let dev = v("1.0.dev1");
        let alpha = v("1.0a1");
        let beta = v("1.0b2");
        let rc = v("1.0rc1");
        let release = v("1.0");
        let post = v("1.0.post1");

        assert!(dev < alpha);
        assert!(alpha < beta);
        assert!(beta < rc);
        assert!(rc < release);
        assert!(release < post);
    }

    #[test]
    fn post_release_beats_padded_release() {
        assert!(v("1.0.0") < v("1.0.post1"));
        assert!(v("1.0.post1") < v("1.0.1"));
    }

    #[test]
    fn dev_of_prerelease_sorts_before_prerelease() {
        assert!(v("1.0a1.dev1") < v("1.0a1"));
        assert!(v("1.0.post1.dev1") < v("1.0.post1"));
        assert!(v("1.0") < v("1.0.post1.dev1"));
    }

    #[test]
    fn epoch_outranks_release() {
        assert!(v("2024.1") < v("1!0.1"));
    }

    #[test]
    fn local_label_sorts_after_public() {
        assert!(v("1.0") < v("1.0+cpu"));
        assert!(v("1.0+abc") < v("1.0+1"));
    }

    #[test]
    fn implicit_post_release() {
        assert_eq!(v("1.0-1"), v("1.0.post1"));
    }

    #[test]
    fn spelling_variants_normalize() {
        assert_eq!(v("1.0alpha1"), v("1.0a1"));
        assert_eq!(v("1.0-rc.2"), v("1.0rc2"));
        assert_eq!(v("v1.4"), v("1.4"));
        assert!(v("1.0RC1") < v("1.0"));
    }

    #[test]
    fn wildcard_is_legacy_and_below_valid_versions() {
        let wildcard = v("1.26.*");
        assert!(wildcard < v("0.1"));
    }

    #[test]
    fn legacy_versions_compare_segmentwise() {
        assert!(v("0.4_cuda") < v("0.5_cuda"));
        assert!(v("1.0_x") < v("1.1_x"));
    }

    #[test]
    fn display_keeps_original() {
        assert_eq!(v("v1.8.0").to_string(), "v1.8.0");
    }
}
