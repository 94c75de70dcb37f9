use std::fmt;

/// Top-level groups a jobs report is split into.
///
/// The set is closed. `ALL` fixes the order records appear in the bulk payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    LocalCharleston,
    RemoteOther,
    SideGigs,
}

impl Section {
    pub const ALL: [Section; 3] = [
        Section::LocalCharleston,
        Section::RemoteOther,
        Section::SideGigs,
    ];

    /// Key of the section in the input document, also written as `source`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::LocalCharleston => "local_charleston",
            Section::RemoteOther => "remote_other",
            Section::SideGigs => "side_gigs",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
