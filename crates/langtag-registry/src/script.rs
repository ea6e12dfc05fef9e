subtag_enum! {
    /// A script subtag (ISO 15924).
    Script {
        Arab => "Arab",
        Armn => "Armn",
        Beng => "Beng",
        Bopo => "Bopo",
        Brai => "Brai",
        Cher => "Cher",
        Copt => "Copt",
        Cyrl => "Cyrl",
        Deva => "Deva",
        Ethi => "Ethi",
        Geor => "Geor",
        Grek => "Grek",
        Gujr => "Gujr",
        Guru => "Guru",
        Hang => "Hang",
        Hani => "Hani",
        Hans => "Hans",
        Hant => "Hant",
        Hebr => "Hebr",
        Hira => "Hira",
        Jpan => "Jpan",
        Kana => "Kana",
        Khmr => "Khmr",
        Knda => "Knda",
        Kore => "Kore",
        Laoo => "Laoo",
        Latn => "Latn",
        Mlym => "Mlym",
        Mong => "Mong",
        Mymr => "Mymr",
        Orya => "Orya",
        Sinh => "Sinh",
        Taml => "Taml",
        Telu => "Telu",
        Thaa => "Thaa",
        Thai => "Thai",
        Tibt => "Tibt",
        Zinh => "Zinh",
        Zmth => "Zmth",
        Zsym => "Zsym",
        Zxxx => "Zxxx",
        Zyyy => "Zyyy",
        Zzzz => "Zzzz",
    }
    aliases {
        "Qaac" => Copt,
        "Qaai" => Zinh,
    }
}
