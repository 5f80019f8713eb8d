//! Electro-optical transfer function of a timeline or construct output.

open_enum! {
    /// Transfer function referenced by [`OutputFormat`](super::OutputFormat).
    pub enum Eotf {
        /// ITU-R BT.1886 reference display gamma
        Bt1886 => "BT.1886",
        Gamma22 => "Gamma 2.2",
        Gamma24 => "Gamma 2.4",
        Gamma26 => "Gamma 2.6",
        /// IEC 61966-2-1 piecewise sRGB curve
        Srgb => "sRGB",
        Linear => "Linear",
        /// SMPTE ST 2084 perceptual quantizer
        Pq => "PQ",
        /// ARIB STD-B67 hybrid log-gamma
        Hlg => "HLG",
    }
}

impl Eotf {
    /// Maps an ffprobe `color_transfer` name onto a transfer function.
    pub fn from_transfer_characteristics(transfer: &str) -> Option<Self> {
        match transfer {
            "bt709" => Some(Self::Bt1886),
            "smpte2084" => Some(Self::Pq),
            "arib-std-b67" => Some(Self::Hlg),
            "linear" => Some(Self::Linear),
            "iec61966-2-1" => Some(Self::Srgb),
            "gamma22" => Some(Self::Gamma22),
            _ => None,
        }
    }

    /// True for the high dynamic range curves (PQ and HLG).
    pub fn is_hdr(&self) -> bool {
        matches!(self, Self::Pq | Self::Hlg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hdr_detection() {
        assert!(Eotf::Pq.is_hdr());
        assert!(Eotf::Hlg.is_hdr());
        assert!(!Eotf::Bt1886.is_hdr());
        assert!(!Eotf::Gamma24.is_hdr());
        assert!(!Eotf::Other("ST2084".to_string()).is_hdr());
    }

    #[test]
    fn test_from_transfer_characteristics() {
        assert_eq!(Eotf::from_transfer_characteristics("smpte2084"), Some(Eotf::Pq));
        assert_eq!(Eotf::from_transfer_characteristics("arib-std-b67"), Some(Eotf::Hlg));
        assert_eq!(Eotf::from_transfer_characteristics("bt709"), Some(Eotf::Bt1886));
        assert_eq!(Eotf::from_transfer_characteristics("iec61966-2-1"), Some(Eotf::Srgb));
        assert_eq!(Eotf::from_transfer_characteristics("smpte428"), None);
    }

    #[test]
    fn test_display_uses_wire_names() {
        assert_eq!(Eotf::Gamma24.to_string(), "Gamma 2.4");
        assert_eq!(Eotf::Bt1886.to_string(), "BT.1886");
        assert_eq!(Eotf::from("Gamma 2.6"), Eotf::Gamma26);
    }
}
