use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::prefecture::Prefecture;

/// Prefecture labels sorted longest first, so that "京都府" is tried
/// before any shorter label that happens to share a prefix.
static PREFECTURE_INDEX: Lazy<Vec<(&'static str, Prefecture)>> = Lazy::new(|| {
    let mut index: Vec<(&'static str, Prefecture)> =
        Prefecture::ALL.iter().map(|&p| (p.label(), p)).collect();
    index.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));
    index
});

/// Ordered alternation for the leading municipality segment.
///
/// Priority:
///   1. designated-city ward: XX市XX区
///   2. county town/village:  XX郡XX(町|村)
///   3. city:                 XX市
///   4. special ward:         XX区
///   5. town:                 XX町
///   6. village:              XX村
///
/// The first alternative that matches wins; segments are non-greedy.
static MUNICIPALITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+?市.+?区|.+?郡.+?(?:町|村)|.+?市|.+?区|.+?町|.+?村)")
        .unwrap_or_else(|e| panic!("invalid municipality pattern: {}", e))
});

/// Result of tokenizing one address string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAddress {
    pub prefecture: Option<Prefecture>,
    pub municipality: Option<String>,
    pub rest: String,
}

/// Tokenizer for free-form Japanese addresses.
pub struct AddressParser;

impl AddressParser {
    /// Splits an address into prefecture, municipality name and the rest.
    pub fn parse(address: &str) -> ParsedAddress {
        let address = address.trim();

        let prefecture = Self::extract_prefecture(address);
        let remaining = match prefecture {
            Some(p) => address.strip_prefix(p.label()).unwrap_or(address),
            None => address,
        };
        let remaining = remaining.trim();

        let municipality = Self::extract_municipality_name(remaining);
        let rest = match &municipality {
            Some(name) => remaining[name.len()..].to_string(),
            None => remaining.to_string(),
        };

        ParsedAddress {
            prefecture,
            municipality,
            rest,
        }
    }

    /// Finds the prefecture whose label is a literal prefix of the
    /// address, longest label first.
    pub fn extract_prefecture(address: &str) -> Option<Prefecture> {
        let address = address.trim();

        PREFECTURE_INDEX
            .iter()
            .find(|(label, _)| address.starts_with(label))
            .map(|&(_, prefecture)| prefecture)
    }

    /// Extracts the leading municipality name from text that has already
    /// had its prefecture stripped.
    pub fn extract_municipality_name(address_without_prefecture: &str) -> Option<String> {
        let text = address_without_prefecture.trim();

        if text.is_empty() {
            return None;
        }

        MUNICIPALITY_RE
            .find(text)
            .map(|m| m.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_prefecture_municipality_and_rest() {
        let parsed = AddressParser::parse("東京都新宿区西新宿2-8-1");
        assert_eq!(parsed.prefecture, Some(Prefecture::Tokyo));
        assert_eq!(parsed.municipality.as_deref(), Some("新宿区"));
        assert_eq!(parsed.rest, "西新宿2-8-1");
    }

    #[test]
    fn keeps_designated_city_ward_intact() {
        let parsed = AddressParser::parse("北海道札幌市東区北8条東");
        assert_eq!(parsed.prefecture, Some(Prefecture::Hokkaido));
        assert_eq!(parsed.municipality.as_deref(), Some("札幌市東区"));
        assert_eq!(parsed.rest, "北8条東");
    }

    #[test]
    fn keeps_county_qualifier_intact() {
        let parsed = AddressParser::parse("宮城県宮城郡利府町");
        assert_eq!(parsed.prefecture, Some(Prefecture::Miyagi));
        assert_eq!(parsed.municipality.as_deref(), Some("宮城郡利府町"));
        assert_eq!(parsed.rest, "");
    }

    #[test]
    fn prefecture_only_address() {
        let parsed = AddressParser::parse("東京都");
        assert_eq!(parsed.prefecture, Some(Prefecture::Tokyo));
        assert_eq!(parsed.municipality, None);
        assert_eq!(parsed.rest, "");
    }

    #[test]
    fn empty_address() {
        let parsed = AddressParser::parse("");
        assert_eq!(parsed.prefecture, None);
        assert_eq!(parsed.municipality, None);
        assert_eq!(parsed.rest, "");
    }

    #[test]
    fn missing_prefecture_still_extracts_municipality() {
        let parsed = AddressParser::parse("新宿区西新宿2-8-1");
        assert_eq!(parsed.prefecture, None);
        assert_eq!(parsed.municipality.as_deref(), Some("新宿区"));
        assert_eq!(parsed.rest, "西新宿2-8-1");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let parsed = AddressParser::parse("　東京都新宿区西新宿 ");
        assert_eq!(parsed.prefecture, Some(Prefecture::Tokyo));
        assert_eq!(parsed.municipality.as_deref(), Some("新宿区"));
        assert_eq!(parsed.rest, "西新宿");
    }

    #[test]
    fn every_prefecture_label_matches_with_suffix() {
        for pref in Prefecture::ALL {
            let address = format!("{}中央1-2-3", pref.label());
            assert_eq!(
                AddressParser::extract_prefecture(&address),
                Some(pref),
                "label {} should match itself",
                pref.label()
            );
        }
    }

    #[test]
    fn kyoto_label_is_not_shadowed_by_shorter_prefix() {
        // "京都府" and a bare "京都..." city address must not be confused.
        assert_eq!(
            AddressParser::extract_prefecture("京都府京都市下京区"),
            Some(Prefecture::Kyoto)
        );
        let parsed = AddressParser::parse("京都府京都市下京区烏丸通");
        assert_eq!(parsed.municipality.as_deref(), Some("京都市下京区"));
    }

    #[test]
    fn municipality_pattern_priority_order() {
        // city+ward beats bare city
        assert_eq!(
            AddressParser::extract_municipality_name("横浜市中区本町").as_deref(),
            Some("横浜市中区")
        );
        // county+town beats bare town
        assert_eq!(
            AddressParser::extract_municipality_name("宮城郡利府町青葉台").as_deref(),
            Some("宮城郡利府町")
        );
        // bare city
        assert_eq!(
            AddressParser::extract_municipality_name("旭川市6条通").as_deref(),
            Some("旭川市")
        );
        // village
        assert_eq!(
            AddressParser::extract_municipality_name("中頭郡読谷村座喜味").as_deref(),
            Some("中頭郡読谷村")
        );
        // no marker at all
        assert_eq!(AddressParser::extract_municipality_name("銀座4-5-6"), None);
        assert_eq!(AddressParser::extract_municipality_name(""), None);
        assert_eq!(AddressParser::extract_municipality_name("   "), None);
    }
}
