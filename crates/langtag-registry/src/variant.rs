use crate::{Language, Region, Script};

subtag_enum! {
    /// A registered variant subtag.
    Variant {
        V1694acad => "1694acad",
        V1901 => "1901",
        V1959acad => "1959acad",
        V1994 => "1994",
        Alalc97 => "alalc97",
        Ao1990 => "ao1990",
        Arevela => "arevela",
        Arevmda => "arevmda",
        Baku1926 => "baku1926",
        Basiceng => "basiceng",
        Biske => "biske",
        Boont => "boont",
        Ekavsk => "ekavsk",
        Fonipa => "fonipa",
        Fonupa => "fonupa",
        Fonxsamp => "fonxsamp",
        Hepburn => "hepburn",
        Heploc => "heploc",
        Ijekavsk => "ijekavsk",
        Kkcor => "kkcor",
        Lipaw => "lipaw",
        Luna1918 => "luna1918",
        Monoton => "monoton",
        Nedis => "nedis",
        Njiva => "njiva",
        Osojs => "osojs",
        Oxendict => "oxendict",
        Petr1708 => "petr1708",
        Pinyin => "pinyin",
        Polyton => "polyton",
        Rozaj => "rozaj",
        Rumgr => "rumgr",
        Scotland => "scotland",
        Solba => "solba",
        Spanglis => "spanglis",
        Sursilv => "sursilv",
        Tarask => "tarask",
        Valencia => "valencia",
        Wadegile => "wadegile",
    }
    aliases {}
}

/// A registered prefix: the subtags that must precede a variant.
///
/// Unset script or region means the prefix does not constrain that field.
/// `variants` must appear, in order, as the leading variants of the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prefix {
    pub language: Language,
    pub script: Option<Script>,
    pub region: Option<Region>,
    pub variants: &'static [Variant],
}

impl Prefix {
    const fn of(language: Language) -> Self {
        Self {
            language,
            script: None,
            region: None,
            variants: &[],
        }
    }

    const fn with_script(self, script: Script) -> Self {
        Self {
            script: Some(script),
            ..self
        }
    }

    const fn with_variants(self, variants: &'static [Variant]) -> Self {
        Self { variants, ..self }
    }
}

const NO_PREFIX: &[Prefix] = &[];

const BE: &[Prefix] = &[Prefix::of(Language::Be)];
const DE: &[Prefix] = &[Prefix::of(Language::De)];
const EL: &[Prefix] = &[Prefix::of(Language::El)];
const EN: &[Prefix] = &[Prefix::of(Language::En)];
const FR: &[Prefix] = &[Prefix::of(Language::Fr)];
const HY: &[Prefix] = &[Prefix::of(Language::Hy)];
const KW: &[Prefix] = &[Prefix::of(Language::Kw)];
const RM: &[Prefix] = &[Prefix::of(Language::Rm)];
const RU: &[Prefix] = &[Prefix::of(Language::Ru)];
const SL: &[Prefix] = &[Prefix::of(Language::Sl)];
const SL_ROZAJ: &[Prefix] = &[Prefix::of(Language::Sl).with_variants(&[Variant::Rozaj])];

const AO1990: &[Prefix] = &[Prefix::of(Language::Pt), Prefix::of(Language::Gl)];
const BAKU1926: &[Prefix] = &[
    Prefix::of(Language::Az),
    Prefix::of(Language::Ba),
    Prefix::of(Language::Crh),
    Prefix::of(Language::Kk),
    Prefix::of(Language::Krc),
    Prefix::of(Language::Ky),
    Prefix::of(Language::Sah),
    Prefix::of(Language::Tk),
    Prefix::of(Language::Tt),
    Prefix::of(Language::Uz),
];
const SERBIAN: &[Prefix] = &[
    Prefix::of(Language::Sr),
    Prefix::of(Language::Sr).with_script(Script::Latn),
    Prefix::of(Language::Sr).with_script(Script::Cyrl),
];
const HEPBURN: &[Prefix] = &[Prefix::of(Language::Ja).with_script(Script::Latn)];
const HEPLOC: &[Prefix] = &[Prefix::of(Language::Ja)
    .with_script(Script::Latn)
    .with_variants(&[Variant::Hepburn])];
const PINYIN: &[Prefix] = &[
    Prefix::of(Language::Zh).with_script(Script::Latn),
    Prefix::of(Language::Bo).with_script(Script::Latn),
];
const WADEGILE: &[Prefix] = &[Prefix::of(Language::Zh).with_script(Script::Latn)];
const SPANGLIS: &[Prefix] = &[Prefix::of(Language::En), Prefix::of(Language::Es)];
const VALENCIA: &[Prefix] = &[Prefix::of(Language::Ca)];
const V1994: &[Prefix] = &[
    Prefix::of(Language::Sl).with_variants(&[Variant::Rozaj]),
    Prefix::of(Language::Sl).with_variants(&[Variant::Rozaj, Variant::Biske]),
    Prefix::of(Language::Sl).with_variants(&[Variant::Rozaj, Variant::Njiva]),
    Prefix::of(Language::Sl).with_variants(&[Variant::Rozaj, Variant::Osojs]),
    Prefix::of(Language::Sl).with_variants(&[Variant::Rozaj, Variant::Solba]),
];

impl Variant {
    /// The registered prefixes this variant requires; empty when the variant
    /// may follow any tag.
    pub const fn prefixes(self) -> &'static [Prefix] {
        match self {
            Self::Alalc97 | Self::Fonipa | Self::Fonupa | Self::Fonxsamp => NO_PREFIX,
            Self::V1959acad | Self::Tarask => BE,
            Self::V1901 => DE,
            Self::Monoton | Self::Polyton => EL,
            Self::Basiceng | Self::Boont | Self::Oxendict | Self::Scotland => EN,
            Self::V1694acad => FR,
            Self::Arevela | Self::Arevmda => HY,
            Self::Kkcor => KW,
            Self::Rumgr | Self::Sursilv => RM,
            Self::Luna1918 | Self::Petr1708 => RU,
            Self::Nedis | Self::Rozaj => SL,
            Self::Biske | Self::Lipaw | Self::Njiva | Self::Osojs | Self::Solba => SL_ROZAJ,
            Self::Ao1990 => AO1990,
            Self::Baku1926 => BAKU1926,
            Self::Ekavsk | Self::Ijekavsk => SERBIAN,
            Self::Hepburn => HEPBURN,
            Self::Heploc => HEPLOC,
            Self::Pinyin => PINYIN,
            Self::Wadegile => WADEGILE,
            Self::Spanglis => SPANGLIS,
            Self::Valencia => VALENCIA,
            Self::V1994 => V1994,
        }
    }
}
