use crate::Script;

subtag_enum! {
    /// A primary or extended language subtag (ISO 639).
    Language {
        Af => "af",
        Am => "am",
        Ar => "ar",
        As => "as",
        Az => "az",
        Ba => "ba",
        Be => "be",
        Bg => "bg",
        Bn => "bn",
        Bo => "bo",
        Br => "br",
        Bs => "bs",
        Ca => "ca",
        Co => "co",
        Cs => "cs",
        Cy => "cy",
        Da => "da",
        De => "de",
        Dv => "dv",
        El => "el",
        En => "en",
        Eo => "eo",
        Es => "es",
        Et => "et",
        Eu => "eu",
        Fa => "fa",
        Fi => "fi",
        Fo => "fo",
        Fr => "fr",
        Fy => "fy",
        Ga => "ga",
        Gd => "gd",
        Gl => "gl",
        Gu => "gu",
        Ha => "ha",
        He => "he",
        Hi => "hi",
        Hr => "hr",
        Ht => "ht",
        Hu => "hu",
        Hy => "hy",
        Id => "id",
        Ig => "ig",
        Is => "is",
        It => "it",
        Ja => "ja",
        Jv => "jv",
        Ka => "ka",
        Kk => "kk",
        Km => "km",
        Kn => "kn",
        Ko => "ko",
        Ku => "ku",
        Kw => "kw",
        Ky => "ky",
        La => "la",
        Lb => "lb",
        Lo => "lo",
        Lt => "lt",
        Lv => "lv",
        Mg => "mg",
        Mi => "mi",
        Mk => "mk",
        Ml => "ml",
        Mn => "mn",
        Mr => "mr",
        Ms => "ms",
        Mt => "mt",
        My => "my",
        Nb => "nb",
        Ne => "ne",
        Nl => "nl",
        Nn => "nn",
        No => "no",
        Nv => "nv",
        Oc => "oc",
        Or => "or",
        Pa => "pa",
        Pl => "pl",
        Ps => "ps",
        Pt => "pt",
        Qu => "qu",
        Rm => "rm",
        Ro => "ro",
        Ru => "ru",
        Rw => "rw",
        Sa => "sa",
        Sd => "sd",
        Se => "se",
        Si => "si",
        Sk => "sk",
        Sl => "sl",
        So => "so",
        Sq => "sq",
        Sr => "sr",
        Sv => "sv",
        Sw => "sw",
        Ta => "ta",
        Te => "te",
        Tg => "tg",
        Th => "th",
        Tk => "tk",
        Tl => "tl",
        Tr => "tr",
        Tt => "tt",
        Ug => "ug",
        Uk => "uk",
        Ur => "ur",
        Uz => "uz",
        Vi => "vi",
        Wo => "wo",
        Xh => "xh",
        Yi => "yi",
        Yo => "yo",
        Zh => "zh",
        Zu => "zu",
        Ami => "ami",
        Ast => "ast",
        Bnn => "bnn",
        Chr => "chr",
        Crh => "crh",
        Djk => "djk",
        Fil => "fil",
        Gsw => "gsw",
        Haw => "haw",
        Jbo => "jbo",
        Krc => "krc",
        Pwn => "pwn",
        Sah => "sah",
        Sgn => "sgn",
        Tao => "tao",
        Tay => "tay",
        Tlh => "tlh",
        Tsu => "tsu",
        Und => "und",
        // Arabic extended languages.
        Aao => "aao",
        Abh => "abh",
        Abv => "abv",
        Acm => "acm",
        Acq => "acq",
        Acw => "acw",
        Acx => "acx",
        Acy => "acy",
        Adf => "adf",
        Aeb => "aeb",
        Aec => "aec",
        Afb => "afb",
        Ajp => "ajp",
        Apc => "apc",
        Apd => "apd",
        Arb => "arb",
        Arq => "arq",
        Ars => "ars",
        Ary => "ary",
        Arz => "arz",
        Auz => "auz",
        Avl => "avl",
        Ayh => "ayh",
        Ayl => "ayl",
        Ayn => "ayn",
        Ayp => "ayp",
        Pga => "pga",
        Shu => "shu",
        Ssh => "ssh",
        // Chinese extended languages.
        Cdo => "cdo",
        Cjy => "cjy",
        Cmn => "cmn",
        Cpx => "cpx",
        Czh => "czh",
        Czo => "czo",
        Gan => "gan",
        Hak => "hak",
        Hsn => "hsn",
        Lzh => "lzh",
        Mnp => "mnp",
        Nan => "nan",
        Wuu => "wuu",
        Yue => "yue",
        // Sign language extended languages.
        Ase => "ase",
        Bfi => "bfi",
        Fsl => "fsl",
        Gsg => "gsg",
        Sfb => "sfb",
        Sgg => "sgg",
        Vgt => "vgt",
    }
    aliases {
        "in" => Id,
        "iw" => He,
        "ji" => Yi,
        "jw" => Jv,
        "mo" => Ro,
    }
}

impl Language {
    /// The macrolanguage an extended language subtag must follow, if this
    /// language is registered as an extended language.
    ///
    /// `ar-afb` and `afb` name the same language; so do `zh-yue` and `yue`.
    pub const fn extended_language_prefix(self) -> Option<Language> {
        match self {
            Self::Aao
            | Self::Abh
            | Self::Abv
            | Self::Acm
            | Self::Acq
            | Self::Acw
            | Self::Acx
            | Self::Acy
            | Self::Adf
            | Self::Aeb
            | Self::Aec
            | Self::Afb
            | Self::Ajp
            | Self::Apc
            | Self::Apd
            | Self::Arb
            | Self::Arq
            | Self::Ars
            | Self::Ary
            | Self::Arz
            | Self::Auz
            | Self::Avl
            | Self::Ayh
            | Self::Ayl
            | Self::Ayn
            | Self::Ayp
            | Self::Pga
            | Self::Shu
            | Self::Ssh => Some(Self::Ar),
            Self::Cdo
            | Self::Cjy
            | Self::Cmn
            | Self::Cpx
            | Self::Czh
            | Self::Czo
            | Self::Gan
            | Self::Hak
            | Self::Hsn
            | Self::Lzh
            | Self::Mnp
            | Self::Nan
            | Self::Wuu
            | Self::Yue => Some(Self::Zh),
            Self::Ase | Self::Bfi | Self::Fsl | Self::Gsg | Self::Sfb | Self::Sgg | Self::Vgt => {
                Some(Self::Sgn)
            }
            _ => None,
        }
    }

    /// The script so dominant for this language that tags should omit it
    /// (the registry's Suppress-Script field).
    pub const fn suppress_script(self) -> Option<Script> {
        match self {
            Self::Af
            | Self::Ca
            | Self::Cs
            | Self::Cy
            | Self::Da
            | Self::De
            | Self::En
            | Self::Es
            | Self::Et
            | Self::Eu
            | Self::Fi
            | Self::Fo
            | Self::Fr
            | Self::Ga
            | Self::Gl
            | Self::Hr
            | Self::Hu
            | Self::Id
            | Self::Is
            | Self::It
            | Self::Lb
            | Self::Lt
            | Self::Lv
            | Self::Mg
            | Self::Ms
            | Self::Mt
            | Self::Nb
            | Self::Nl
            | Self::Nn
            | Self::No
            | Self::Pl
            | Self::Pt
            | Self::Ro
            | Self::Sk
            | Self::Sl
            | Self::Sq
            | Self::Sv
            | Self::Sw
            | Self::Tr => Some(Script::Latn),
            Self::Be | Self::Bg | Self::Kk | Self::Mk | Self::Ru | Self::Uk => Some(Script::Cyrl),
            Self::Ar | Self::Fa | Self::Ps | Self::Ur => Some(Script::Arab),
            Self::Hi | Self::Mr | Self::Ne => Some(Script::Deva),
            Self::He | Self::Yi => Some(Script::Hebr),
            Self::Am => Some(Script::Ethi),
            Self::Bn => Some(Script::Beng),
            Self::Dv => Some(Script::Thaa),
            Self::El => Some(Script::Grek),
            Self::Gu => Some(Script::Gujr),
            Self::Hy => Some(Script::Armn),
            Self::Ja => Some(Script::Jpan),
            Self::Ka => Some(Script::Geor),
            Self::Km => Some(Script::Khmr),
            Self::Kn => Some(Script::Knda),
            Self::Ko => Some(Script::Kore),
            Self::Lo => Some(Script::Laoo),
            Self::Ml => Some(Script::Mlym),
            Self::My => Some(Script::Mymr),
            Self::Or => Some(Script::Orya),
            Self::Pa => Some(Script::Guru),
            Self::Si => Some(Script::Sinh),
            Self::Ta => Some(Script::Taml),
            Self::Te => Some(Script::Telu),
            Self::Th => Some(Script::Thai),
            _ => None,
        }
    }

    /// Whether this language is registered as an extended language subtag.
    pub const fn is_extended_language(self) -> bool {
        self.extended_language_prefix().is_some()
    }
}
