use log::debug;

/// Language codes as used in the EiBi schedule files, with readable names.
/// Incomplete; covers the codes seen most often in recent seasons.
/// The hyphenated entries are content markers rather than languages.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("A", "Arabic"),
    ("AB", "Abkhaz"),
    ("AD", "Adygea / Adyghe / Circassian"),
    ("AF", "Afrikaans"),
    ("AFA", "Afar"),
    ("AFG", "Pashto / Dari"),
    ("AH", "Amharic"),
    ("AL", "Albanian"),
    ("AM", "Amoy"),
    ("AMD", "Tibetan Amdo"),
    ("Ang", "Angelus programme"),
    ("AR", "Armenian"),
    ("ASS", "Assamese"),
    ("AV", "Avar"),
    ("AY", "Aymara"),
    ("AZ", "Azeri / Azerbaijani"),
    ("BC", "Baluchi"),
    ("BE", "Bengali / Bangla"),
    ("BEM", "Bemba"),
    ("BH", "Bhili"),
    ("BJ", "Bhojpuri / Bihari"),
    ("BM", "Bambara / Bamanankan"),
    ("BON", "Bondo"),
    ("BOS", "Bosnian"),
    ("BR", "Burmese"),
    ("BSL", "Bislama"),
    ("BU", "Bulgarian"),
    ("BUN", "Bundeli / Bundelkhandi / Bundelkandi"),
    ("BUR", "Buryat"),
    ("BY", "Byelorussian / Belarusian"),
    ("C", "Chinese"),
    ("C-F", "Chin-Falam / Halam"),
    ("C-H", "Chin-Haka"),
    ("C-Z", "Chin-Zomin / Zomi-Chin"),
    ("CA", "Cantonese"),
    ("CC", "Chaochow (dialect of Min-Nan)"),
    ("CD", "Chowdary / Chaudhry / Chodri"),
    ("CH", "Chin"),
    ("CHE", "Chechen"),
    ("CHG", "Chhattisgarhi"),
    ("CKW", "Chokwe"),
    ("CR", "Creole / Haitian"),
    ("CZ", "Czech"),
    ("D", "German"),
    ("D-P", "Lower German"),
    ("DA", "Danish"),
    ("DAO", "Dao"),
    ("DI", "Dinka"),
    ("DO", "Dogri-Kangri"),
    ("DR", "Dari / Eastern Farsi"),
    ("DY", "Dyula / Jula"),
    ("DZ", "Dzongkha"),
    ("E", "English"),
    ("EGY", "Egyptian Arabic"),
    ("EO", "Esperanto"),
    ("F", "French"),
    ("FI", "Finnish"),
    ("FS", "Farsi"),
    ("FT", "Fiote / Vili"),
    ("FU", "Fulani / Fulfulde"),
    ("GA", "Garhwali"),
    ("GE", "Georgian"),
    ("GM", "Gamit"),
    ("GR", "Greek"),
    ("GU", "Gujarati"),
    ("HA", "Haussa"),
    ("HAD", "Hadiya"),
    ("HAS", "Hassinya / Hassaniya"),
    ("HB", "Hebrew"),
    ("HI", "Hindi"),
    ("HK", "Hakka"),
    ("HM", "Hmong / Miao languages"),
    ("HMA", "Hmar"),
    ("HR", "Croatian / Hrvatski"),
    ("HU", "Hungarian"),
    ("I", "Italian"),
    ("IB", "Iban"),
    ("IN", "Indonesian"),
    ("INU", "Inuktikut"),
    ("IS", "Icelandic"),
    ("J", "Japanese"),
    ("JV", "Javanese"),
    ("K", "Korean"),
    ("KA", "Karen"),
    ("KAN", "Kannada"),
    ("KAO", "Kaonde"),
    ("KBO", "Kok Borok / Tripuri"),
    ("KC", "Kachin / Jingpho"),
    ("KG", "Kyrgyz / Kirghiz"),
    ("KH", "Khmer"),
    ("KHA", "Kham / Khams"),
    ("KHM", "Khmu"),
    ("KHR", "Kharia / Khariya"),
    ("KHS", "Khasi / Kahasi"),
    ("KHT", "Khota"),
    ("KK", "KiKongo / Kongo"),
    ("KMB", "Kimbundu / Mbundu / Luanda"),
    ("KNK", "KinyaRwanda-KiRundi"),
    ("KNU", "Kanuri"),
    ("KRB", "Karbi / Mikir / Manchati"),
    ("KRW", "KinyaRwanda"),
    ("KS", "Kashmiri"),
    ("KU", "Kurdish"),
    ("KUN", "Kunama"),
    ("KUR", "Kurukh / Kurux"),
    ("KZ", "Kazakh"),
    ("L", "Latin"),
    ("LAD", "Ladakhi / Ladak"),
    ("LAH", "Lahu"),
    ("LAO", "Lao"),
    ("LOZ", "Lozi / Silozi"),
    ("LU", "Lunda"),
    ("LUG", "Luganda"),
    ("LUN", "Lunyaneka / Nyaneka"),
    ("LUV", "Luvale"),
    ("M", "Mandarin"),
    ("MAG", "Maghi / Magahi / Maghai"),
    ("MAI", "Maithili / Maithali"),
    ("MAL", "Malayalam"),
    ("MAO", "Maori"),
    ("MAR", "Marathi"),
    ("MEI", "Meithei / Manipuri / Meitei"),
    ("MIE", "Mien / Iu Mien"),
    ("MIS", "Mising"),
    ("ML", "Malay / Baku"),
    ("MO", "Mongolian"),
    ("MON", "Mon"),
    ("MSY", "Malagasy"),
    ("MUN", "Mundari"),
    ("MW", "Marwari"),
    ("MY", "Maya (Yucatec)"),
    ("MZ", "Mizo / Lushai"),
    ("NDE", "Ndebele"),
    ("NE", "Nepali / Lhotshampa"),
    ("NIU", "Niuean"),
    ("NL", "Dutch"),
    ("NO", "Norwegian"),
    ("NU", "Nuer"),
    ("NW", "Newar / Newari"),
    ("NY", "Nyanja"),
    ("OO", "Oromo"),
    ("OR", "Odia / Oriya / Orissa"),
    ("P", "Portuguese"),
    ("PO", "Polish"),
    ("PJ", "Punjabi"),
    ("PS", "Pashto"),
    ("Q", "Quechua"),
    ("R", "Russian"),
    ("RO", "Romanian"),
    ("ROS", "Rosary"),
    ("Ros", "Rosary"),
    ("RWG", "Rawang"),
    ("S", "Spanish"),
    ("SD", "Sindhi"),
    ("SGA", "Shangaan / Tsonga"),
    ("SHA", "Shan"),
    ("SHC", "Sharchogpa / Sarchopa / Tshangla"),
    ("SHO", "Shona"),
    ("SHP", "Sherpa"),
    ("SI", "Sinhalese / Sinhala"),
    ("SK", "Slovak"),
    ("SLM", "Pijin / Solomon Islands Pidgin"),
    ("SM", "Samoan"),
    ("SO", "Somali"),
    ("SNK", "Sanskrit"),
    ("SNT", "Santhali"),
    ("SR", "Serbian"),
    ("SUD", "Sudanese Arabic"),
    ("SUN", "Sunda / Sundanese"),
    ("SWA", "Swahili / Kisuaheli"),
    ("SWE", "Swedish"),
    ("T", "Thai"),
    ("TAG", "Tagalog"),
    ("TAH", "Tachelhit / Sous"),
    ("TAM", "Tamil"),
    ("TB", "Tibetan"),
    ("TEL", "Telugu"),
    ("TIG", "Tigrinya / Tigray"),
    ("TJ", "Tajik"),
    ("TK", "Turkmen"),
    ("TL", "Tai-Lu / Lu"),
    ("TNG", "Tonga"),
    ("TO", "Tongan"),
    ("TP", "Tok Pisin"),
    ("TSH", "Tshwa"),
    ("TT", "Tatar"),
    ("TTB", "Tatar-Bashkir"),
    ("TU", "Turkish"),
    ("TV", "Tuva / Tuvinic"),
    ("TW", "Taiwanese / Fujian / Hokkien / Min Nan"),
    ("UI", "Uighur"),
    ("UK", "Ukrainian"),
    ("UM", "Umbundu"),
    ("UR", "Urdu"),
    ("UZ", "Uzbek"),
    ("VN", "Vietnamese"),
    ("Vn", "Vernacular"),
    ("VV", "Vasavi"),
    ("W", "Wolof"),
    ("WAO", "Waodani / Waorani"),
    ("YK", "Yakutian / Sakha"),
    ("YO", "Yoruba"),
    ("Z", "Zulu"),
    ("ZA", "Zarma / Zama"),
    ("ZWE", "Languages of Zimbabwe"),
    ("-CW", "Morse"),
    ("-MX", "Music"),
    ("-TS", "Time station"),
];

pub fn language_name(code: &str) -> Option<&'static str> {
    LANGUAGES.iter().find(|(c, _)| *c == code).map(|(_, name)| *name)
}

/// Splits a comma-separated language field into its codes.
pub fn split_codes(field: &str) -> Vec<String> {
    field.split(',').filter(|c| !c.is_empty()).map(str::to_string).collect()
}

/// Replaces each known code with its name; unknown codes pass through.
pub fn expand_languages(codes: &[String]) -> String {
    codes
        .iter()
        .map(|code| match language_name(code) {
            Some(name) => name.to_string(),
            None => {
                debug!("Unrecognized language code: {}", code);
                code.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(language_name("E"), Some("English"));
        assert_eq!(language_name("Vn"), Some("Vernacular"));
        assert_eq!(language_name("VN"), Some("Vietnamese"));
        assert_eq!(language_name("-TS"), Some("Time station"));
        assert_eq!(language_name("e"), None);
    }

    #[test]
    fn test_expand_passes_unknown_through() {
        let codes = split_codes("E,XYZ,S");
        assert_eq!(codes, vec!["E", "XYZ", "S"]);
        assert_eq!(expand_languages(&codes), "English,XYZ,Spanish");
    }

    #[test]
    fn test_empty_field() {
        assert!(split_codes("").is_empty());
        assert_eq!(expand_languages(&[]), "");
    }
}
