//! Colour encoding of a timeline or construct output.

open_enum! {
    /// Colour encoding referenced by [`OutputFormat`](super::OutputFormat).
    ///
    /// The set of colorspaces is owned by the server. Unknown names are
    /// preserved in `Other` rather than rejected.
    pub enum Colorspace {
        /// ITU-R BT.709
        Rec709 => "Rec709",
        /// ITU-R BT.2020
        Rec2020 => "Rec2020",
        /// DCI-P3 primaries with a D65 white point
        P3D65 => "P3-D65",
        /// DCI-P3 primaries with the DCI white point
        P3Dci => "P3-DCI",
        Srgb => "sRGB",
        /// ACES 2065-1 (AP0)
        Aces => "ACES",
        /// ACEScg (AP1, linear)
        AcesCg => "ACEScg",
        /// ACEScct (AP1, log with toe)
        AcesCct => "ACEScct",
    }
}

impl Colorspace {
    /// Maps an ffprobe `color_primaries` name onto a colorspace.
    ///
    /// Returns `None` for primaries with no counterpart here, including
    /// `unknown` and the empty string.
    pub fn from_color_primaries(primaries: &str) -> Option<Self> {
        match primaries {
            "bt709" => Some(Self::Rec709),
            "bt2020" => Some(Self::Rec2020),
            "smpte432" => Some(Self::P3D65),
            "smpte431" => Some(Self::P3Dci),
            _ => None,
        }
    }

    /// True for encodings whose gamut extends past BT.709.
    pub fn is_wide_gamut(&self) -> bool {
        matches!(
            self,
            Self::Rec2020 | Self::P3D65 | Self::P3Dci | Self::Aces | Self::AcesCg | Self::AcesCct
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names_parse_to_known_variants() {
        assert_eq!("Rec709".parse::<Colorspace>().unwrap(), Colorspace::Rec709);
        assert_eq!("P3-D65".parse::<Colorspace>().unwrap(), Colorspace::P3D65);
        assert_eq!(Colorspace::from("ACEScct"), Colorspace::AcesCct);
    }

    #[test]
    fn test_unknown_names_are_kept_verbatim() {
        let cs = Colorspace::from("Arri Wide Gamut 4");
        assert_eq!(cs, Colorspace::Other("Arri Wide Gamut 4".to_string()));
        assert!(!cs.is_known());
        assert_eq!(cs.to_string(), "Arri Wide Gamut 4");
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        // "rec709" is not the canonical spelling, so it must survive untouched
        assert_eq!(Colorspace::from("rec709"), Colorspace::Other("rec709".to_string()));
    }

    #[test]
    fn test_from_color_primaries() {
        assert_eq!(Colorspace::from_color_primaries("bt709"), Some(Colorspace::Rec709));
        assert_eq!(Colorspace::from_color_primaries("bt2020"), Some(Colorspace::Rec2020));
        assert_eq!(Colorspace::from_color_primaries("smpte432"), Some(Colorspace::P3D65));
        assert_eq!(Colorspace::from_color_primaries("smpte431"), Some(Colorspace::P3Dci));
        assert_eq!(Colorspace::from_color_primaries("unknown"), None);
        assert_eq!(Colorspace::from_color_primaries(""), None);
    }

    #[test]
    fn test_wide_gamut() {
        assert!(!Colorspace::Rec709.is_wide_gamut());
        assert!(!Colorspace::Srgb.is_wide_gamut());
        assert!(Colorspace::Rec2020.is_wide_gamut());
        assert!(Colorspace::AcesCg.is_wide_gamut());
        assert!(!Colorspace::Other("Rec2020-ish".into()).is_wide_gamut());
    }
}
