//! ARPAbet phoneme inventory: vowels, vowel families and consonant groups.

/// Base (stress-free) ARPAbet vowel phonemes.
pub const VOWELS: &[&str] = &[
    "AA", "AE", "AH", "AO", "AW", "AY", "EH", "ER", "EY", "IH", "IY", "OW", "OY", "UH", "UW",
];

/// Strip the stress digit from a phoneme (`AE1` -> `AE`).
pub fn base_phoneme(phoneme: &str) -> &str {
    phoneme.trim_end_matches(|c: char| c.is_ascii_digit())
}

/// Whether the phoneme carries primary or secondary stress.
pub fn is_stressed(phoneme: &str) -> bool {
    phoneme.ends_with(['1', '2'])
}

/// Whether the phoneme carries any stress digit, which marks a syllable nucleus.
pub fn has_stress_digit(phoneme: &str) -> bool {
    phoneme.ends_with(|c: char| c.is_ascii_digit())
}

/// Whether the phoneme is a vowel, ignoring stress.
pub fn is_vowel(phoneme: &str) -> bool {
    VOWELS.contains(&base_phoneme(phoneme))
}

/// Groups of vowels that rhyme loosely with each other.
///
/// Families overlap: `AH` is both an ah-sound and an er-sound, `AO` both an
/// oh-sound and an aw-sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VowelFamily {
    /// `UW`, `UH` (boot, book)
    LongOo,
    /// `IY`, `IH` (beet, bit)
    LongEe,
    /// `AY`, `EY` (bite, bait)
    AySound,
    /// `OW`, `AO` (boat, bought)
    OhSound,
    /// `AA`, `AH` (father, but)
    AhSound,
    /// `EH`, `AE` (bet, bat)
    EhSound,
    /// `ER`, `AH` (bird, but)
    ErSound,
    /// `OY` (boy)
    OySound,
    /// `AW`, `AO` (bout, bought)
    AwSound,
}

impl VowelFamily {
    /// All families in lookup order.
    pub const ALL: [Self; 9] = [
        Self::LongOo,
        Self::LongEe,
        Self::AySound,
        Self::OhSound,
        Self::AhSound,
        Self::EhSound,
        Self::ErSound,
        Self::OySound,
        Self::AwSound,
    ];

    /// Base vowels belonging to this family.
    pub const fn members(self) -> &'static [&'static str] {
        match self {
            Self::LongOo => &["UW", "UH"],
            Self::LongEe => &["IY", "IH"],
            Self::AySound => &["AY", "EY"],
            Self::OhSound => &["OW", "AO"],
            Self::AhSound => &["AA", "AH"],
            Self::EhSound => &["EH", "AE"],
            Self::ErSound => &["ER", "AH"],
            Self::OySound => &["OY"],
            Self::AwSound => &["AW", "AO"],
        }
    }

    /// Returns the human-readable name of this family.
    pub const fn name(self) -> &'static str {
        match self {
            Self::LongOo => "long-oo",
            Self::LongEe => "long-ee",
            Self::AySound => "ay-sound",
            Self::OhSound => "oh-sound",
            Self::AhSound => "ah-sound",
            Self::EhSound => "eh-sound",
            Self::ErSound => "er-sound",
            Self::OySound => "oy-sound",
            Self::AwSound => "aw-sound",
        }
    }
}

/// Whether two base vowels fall in at least one common family.
pub fn share_vowel_family(a: &str, b: &str) -> bool {
    VowelFamily::ALL
        .iter()
        .any(|family| family.members().contains(&a) && family.members().contains(&b))
}

/// Articulation groups used to give partial credit to differing consonants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsonantGroup {
    /// `P B T D K G`
    Stop,
    /// `F V TH DH S Z SH ZH HH CH JH`
    Fricative,
    /// `M N NG`
    Nasal,
    /// `L R`
    Liquid,
    /// `W Y`
    Semivowel,
}

impl ConsonantGroup {
    /// Classify a consonant phoneme, or `None` for vowels and unknown codes.
    pub fn of(phoneme: &str) -> Option<Self> {
        match base_phoneme(phoneme) {
            "P" | "B" | "T" | "D" | "K" | "G" => Some(Self::Stop),
            "F" | "V" | "TH" | "DH" | "S" | "Z" | "SH" | "ZH" | "HH" | "CH" | "JH" => {
                Some(Self::Fricative)
            }
            "M" | "N" | "NG" => Some(Self::Nasal),
            "L" | "R" => Some(Self::Liquid),
            "W" | "Y" => Some(Self::Semivowel),
            _ => None,
        }
    }
}
