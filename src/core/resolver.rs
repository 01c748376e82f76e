use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::parser::AddressParser;
use crate::domain::code::MunicipalityCode;
use crate::domain::ports::MunicipalityLookup;
use crate::domain::prefecture::Prefecture;
use crate::utils::error::Result;

// Rewrite patterns for the fallback cascade. Greedy, anchored both ends
// where the original segment must be consumed whole.
static WARD_IN_CITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^.+市(.+区)$").unwrap_or_else(|e| panic!("invalid ward pattern: {}", e))
});
static TOWN_IN_COUNTY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^.+郡(.+(?:町|村))$").unwrap_or_else(|e| panic!("invalid county pattern: {}", e))
});
static CITY_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+市)").unwrap_or_else(|e| panic!("invalid city pattern: {}", e)));

/// Outcome of one resolution attempt. `code` is `None` when the address
/// parses but no municipality matched the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub prefecture: Option<Prefecture>,
    pub code: Option<MunicipalityCode>,
}

/// Resolves addresses to local government codes through an injected
/// lookup store.
///
/// After direct lookup fails, four fallbacks are tried in fixed order,
/// each derived from the originally extracted name:
///   2. "XX市YY区" -> "YY区"   (wards are stored under their bare name)
///   3. "XX郡YY町/村" -> "YY町/村"
///   4. "...市<trailing>" -> "...市"  (over-greedy extraction)
///   5. name + "市"            (trailing 市 omitted in the source text)
///
/// Rule order is part of the contract; when several rules would hit, the
/// earlier one decides.
pub struct AddressResolver<L: MunicipalityLookup> {
    lookup: L,
}

impl<L: MunicipalityLookup> AddressResolver<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Address -> prefecture and code, either of which may be absent.
    pub fn resolve(&self, address: &str) -> Result<Resolution> {
        let parsed = AddressParser::parse(address);

        let (prefecture, name) = match (parsed.prefecture, parsed.municipality) {
            (Some(p), Some(name)) => (p, name),
            (prefecture, _) => {
                return Ok(Resolution {
                    prefecture,
                    code: None,
                })
            }
        };

        let code = self.find_code(prefecture.code(), &name)?;

        Ok(Resolution {
            prefecture: Some(prefecture),
            code,
        })
    }

    /// Address -> code only.
    pub fn resolve_code(&self, address: &str) -> Result<Option<MunicipalityCode>> {
        Ok(self.resolve(address)?.code)
    }

    /// Address -> prefecture only.
    pub fn resolve_prefecture(&self, address: &str) -> Result<Option<Prefecture>> {
        Ok(self.resolve(address)?.prefecture)
    }

    /// Runs the ordered lookup cascade; at most one store call per stage.
    fn find_code(&self, pref_code: &str, name: &str) -> Result<Option<MunicipalityCode>> {
        for candidate in Self::candidates(name) {
            if let Some(code) = self.lookup.find(pref_code, &candidate)? {
                return Ok(Some(code));
            }
        }

        Ok(None)
    }

    /// Candidate names in cascade order. Every candidate is computed from
    /// `name` itself, never from an earlier failed rewrite.
    fn candidates(name: &str) -> Vec<String> {
        let mut candidates = vec![name.to_string()];

        if let Some(caps) = WARD_IN_CITY_RE.captures(name) {
            candidates.push(caps[1].to_string());
        }

        if let Some(caps) = TOWN_IN_COUNTY_RE.captures(name) {
            candidates.push(caps[1].to_string());
        }

        if let Some(caps) = CITY_PREFIX_RE.captures(name) {
            if caps[1].len() < name.len() {
                candidates.push(caps[1].to_string());
            }
        }

        candidates.push(format!("{}市", name));

        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_order_matches_cascade() {
        assert_eq!(
            AddressResolver::<NoopLookup>::candidates("札幌市東区"),
            vec!["札幌市東区", "東区", "札幌市", "札幌市東区市"]
        );
        assert_eq!(
            AddressResolver::<NoopLookup>::candidates("宮城郡利府町"),
            vec!["宮城郡利府町", "利府町", "宮城郡利府町市"]
        );
        assert_eq!(
            AddressResolver::<NoopLookup>::candidates("大和郡山市下三橋町"),
            vec![
                "大和郡山市下三橋町",
                "山市下三橋町",
                "大和郡山市",
                "大和郡山市下三橋町市"
            ]
        );
        assert_eq!(
            AddressResolver::<NoopLookup>::candidates("四日市"),
            vec!["四日市", "四日市市"]
        );
    }

    #[test]
    fn city_prefix_rule_skips_exact_city_names() {
        // "旭川市" is already a full city name; rule 4 must not re-add it.
        assert_eq!(
            AddressResolver::<NoopLookup>::candidates("旭川市"),
            vec!["旭川市", "旭川市市"]
        );
    }

    struct NoopLookup;

    impl MunicipalityLookup for NoopLookup {
        fn find(&self, _: &str, _: &str) -> Result<Option<MunicipalityCode>> {
            Ok(None)
        }
    }
}
