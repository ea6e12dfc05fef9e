subtag_enum! {
    /// A region subtag: ISO 3166-1 alpha-2 or UN M.49 numeric.
    Region {
        World => "001",
        Africa => "002",
        Americas => "019",
        Asia => "142",
        Europe => "150",
        LatinAmerica => "419",
        AD => "AD",
        AE => "AE",
        AF => "AF",
        AM => "AM",
        AR => "AR",
        AT => "AT",
        AU => "AU",
        AZ => "AZ",
        BA => "BA",
        BD => "BD",
        BE => "BE",
        BG => "BG",
        BO => "BO",
        BR => "BR",
        BY => "BY",
        CA => "CA",
        CD => "CD",
        CH => "CH",
        CL => "CL",
        CN => "CN",
        CO => "CO",
        CU => "CU",
        CY => "CY",
        CZ => "CZ",
        DE => "DE",
        DK => "DK",
        DZ => "DZ",
        EC => "EC",
        EE => "EE",
        EG => "EG",
        ES => "ES",
        ET => "ET",
        FI => "FI",
        FR => "FR",
        GB => "GB",
        GE => "GE",
        GR => "GR",
        HK => "HK",
        HR => "HR",
        HU => "HU",
        ID => "ID",
        IE => "IE",
        IL => "IL",
        IN => "IN",
        IQ => "IQ",
        IR => "IR",
        IS => "IS",
        IT => "IT",
        JO => "JO",
        JP => "JP",
        KE => "KE",
        KR => "KR",
        KW => "KW",
        KZ => "KZ",
        LB => "LB",
        LT => "LT",
        LU => "LU",
        LV => "LV",
        LY => "LY",
        MA => "MA",
        MD => "MD",
        ME => "ME",
        MK => "MK",
        MM => "MM",
        MO => "MO",
        MT => "MT",
        MX => "MX",
        MY => "MY",
        NG => "NG",
        NL => "NL",
        NO => "NO",
        NZ => "NZ",
        OM => "OM",
        PE => "PE",
        PH => "PH",
        PK => "PK",
        PL => "PL",
        PT => "PT",
        QA => "QA",
        RO => "RO",
        RS => "RS",
        RU => "RU",
        SA => "SA",
        SD => "SD",
        SE => "SE",
        SG => "SG",
        SI => "SI",
        SK => "SK",
        SY => "SY",
        TH => "TH",
        TL => "TL",
        TN => "TN",
        TR => "TR",
        TW => "TW",
        UA => "UA",
        US => "US",
        UY => "UY",
        UZ => "UZ",
        VE => "VE",
        VN => "VN",
        YE => "YE",
        ZA => "ZA",
    }
    aliases {
        "BU" => MM,
        "DD" => DE,
        "FX" => FR,
        "TP" => TL,
        "YD" => YE,
        "ZR" => CD,
    }
}
