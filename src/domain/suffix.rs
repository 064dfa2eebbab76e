/// Trailing markers recognized on a version string
///
/// Matching is done against [`VersionSuffix::PRECEDENCE`] in order; the first
/// suffix the string ends with wins. None of the literals is a suffix of another,
/// so the order only documents intent: the placeholder decides stamping, the two
/// qualifiers decide the width of the build id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSuffix {
    /// `.0000`, an unstamped patch number
    Placeholder,
    /// `a1`, the alpha channel qualifier
    Alpha,
    /// `.1`, the patch channel qualifier
    PatchOne,
}

impl VersionSuffix {
    pub const PRECEDENCE: [VersionSuffix; 3] = [
        VersionSuffix::Placeholder,
        VersionSuffix::Alpha,
        VersionSuffix::PatchOne,
    ];

    /// The literal text of this suffix
    pub fn literal(&self) -> &'static str {
        match self {
            VersionSuffix::Placeholder => ".0000",
            VersionSuffix::Alpha => "a1",
            VersionSuffix::PatchOne => ".1",
        }
    }

    /// First suffix in precedence order that `version` ends with
    pub fn detect(version: &str) -> Option<VersionSuffix> {
        Self::PRECEDENCE
            .into_iter()
            .find(|suffix| version.ends_with(suffix.literal()))
    }

    /// Whether this suffix marks a pre-release or patch channel
    pub fn is_qualifier(&self) -> bool {
        matches!(self, VersionSuffix::Alpha | VersionSuffix::PatchOne)
    }
}
