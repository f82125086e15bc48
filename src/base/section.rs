use std::fmt;

/// Kind of a section instance.
///
/// The first fourteen variants are the section names accepted in
/// `Section "Name"`. `SubSection` and `Comments` are pseudo-types under which
/// the model files subsection and comment records; they never appear as a
/// section name in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub enum SectionType {
    InputDevice,
    Device,
    Module,
    Monitor,
    Screen,
    ServerLayout,
    ServerFlags,
    Extensions,
    Files,
    InputClass,
    #[cfg_attr(feature = "interchange", serde(rename = "DRI"))]
    Dri,
    VideoAdaptor,
    Vendor,
    Modes,
    SubSection,
    Comments,
}

impl SectionType {
    /// Section names that may appear in `Section "Name"`.
    pub const SECTIONS: [SectionType; 14] = [
        Self::InputDevice,
        Self::Device,
        Self::Module,
        Self::Monitor,
        Self::Screen,
        Self::ServerLayout,
        Self::ServerFlags,
        Self::Extensions,
        Self::Files,
        Self::InputClass,
        Self::Dri,
        Self::VideoAdaptor,
        Self::Vendor,
        Self::Modes,
    ];

    /// Section types whose instances must carry exactly one `Identifier`.
    pub const REQUIRES_IDENTIFIER: [SectionType; 6] = [
        Self::InputClass,
        Self::InputDevice,
        Self::Device,
        Self::Monitor,
        Self::Screen,
        Self::ServerLayout,
    ];

    /// Look up a section name as written in source (case-insensitive).
    ///
    /// Pseudo-types are never returned.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::SECTIONS
            .into_iter()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(name))
    }

    /// Canonical spelling used when writing `Section "Name"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InputDevice => "InputDevice",
            Self::Device => "Device",
            Self::Module => "Module",
            Self::Monitor => "Monitor",
            Self::Screen => "Screen",
            Self::ServerLayout => "ServerLayout",
            Self::ServerFlags => "ServerFlags",
            Self::Extensions => "Extensions",
            Self::Files => "Files",
            Self::InputClass => "InputClass",
            Self::Dri => "DRI",
            Self::VideoAdaptor => "VideoAdaptor",
            Self::Vendor => "Vendor",
            Self::Modes => "Modes",
            Self::SubSection => "SubSection",
            Self::Comments => "Comments",
        }
    }

    pub fn is_pseudo(&self) -> bool {
        matches!(self, Self::SubSection | Self::Comments)
    }

    pub fn requires_identifier(&self) -> bool {
        Self::REQUIRES_IDENTIFIER.contains(self)
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
