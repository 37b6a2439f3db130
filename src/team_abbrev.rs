/// Map team abbreviation to team common name
///
/// This function maps NHL team abbreviations (e.g., "TOR") to their common
/// names (e.g., "Maple Leafs") for game card titles.
pub fn abbrev_to_common_name(abbrev: &str) -> Option<&'static str> {
    TEAM_NAMES.get(abbrev).copied()
}

/// Common name for display, falling back to the abbreviation itself
pub fn display_name(abbrev: &str) -> &str {
    abbrev_to_common_name(abbrev).unwrap_or(abbrev)
}

static TEAM_NAMES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "ANA" => "Ducks",
    "ARI" => "Coyotes",
    "BOS" => "Bruins",
    "BUF" => "Sabres",
    "CGY" => "Flames",
    "CAR" => "Hurricanes",
    "CHI" => "Blackhawks",
    "COL" => "Avalanche",
    "CBJ" => "Blue Jackets",
    "DAL" => "Stars",
    "DET" => "Red Wings",
    "EDM" => "Oilers",
    "FLA" => "Panthers",
    "LAK" => "Kings",
    "MIN" => "Wild",
    "MTL" => "Canadiens",
    "NSH" => "Predators",
    "NJD" => "Devils",
    "NYI" => "Islanders",
    "NYR" => "Rangers",
    "OTT" => "Senators",
    "PHI" => "Flyers",
    "PIT" => "Penguins",
    "SJS" => "Sharks",
    "SEA" => "Kraken",
    "STL" => "Blues",
    "TBL" => "Lightning",
    "TOR" => "Maple Leafs",
    "UTA" => "Utah",
    "VAN" => "Canucks",
    "VGK" => "Golden Knights",
    "WSH" => "Capitals",
    "WPG" => "Jets",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_abbreviations() {
        assert_eq!(abbrev_to_common_name("TOR"), Some("Maple Leafs"));
        assert_eq!(abbrev_to_common_name("VGK"), Some("Golden Knights"));
        assert_eq!(abbrev_to_common_name("CBJ"), Some("Blue Jackets"));
    }

    #[test]
    fn test_unknown_abbreviation_falls_back() {
        assert_eq!(abbrev_to_common_name("XYZ"), None);
        assert_eq!(display_name("XYZ"), "XYZ");
        assert_eq!(display_name("PIT"), "Penguins");
    }
}
