use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::domain::prefecture::Prefecture;
use crate::utils::error::{JlgError, Result};

/// A validated 6-digit local government code (全国地方公共団体コード).
///
/// Layout: prefecture code (2 digits) + local code (3 digits) + check
/// digit (1 digit). Construction left-pads shorter input with zeros and
/// rejects anything that is not 6 ASCII digits, fails the modulus-11
/// check, or names an unknown prefecture.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MunicipalityCode {
    value: String,
}

const CHECK_WEIGHTS: [u32; 5] = [6, 5, 4, 3, 2];

impl MunicipalityCode {
    pub fn new(raw: &str) -> Result<MunicipalityCode> {
        let normalized = if raw.chars().count() < 6 {
            format!("{:0>6}", raw)
        } else {
            raw.to_string()
        };

        if normalized.len() != 6 || !normalized.bytes().all(|b| b.is_ascii_digit()) {
            return Err(JlgError::Format {
                value: raw.to_string(),
            });
        }

        if !Self::check_digit_valid(&normalized) {
            return Err(JlgError::Checksum {
                value: normalized,
            });
        }

        let pref_code = &normalized[0..2];
        if Prefecture::from_code(pref_code).is_none() {
            return Err(JlgError::UnknownPrefecture {
                code: pref_code.to_string(),
            });
        }

        Ok(MunicipalityCode { value: normalized })
    }

    /// Modulus-11 check: weighted sum of the first five digits with
    /// weights 6,5,4,3,2; remainder 0 maps to check digit 1, remainder 1
    /// to 0, anything else to 11 - remainder.
    fn check_digit_valid(code: &str) -> bool {
        let digits: Vec<u32> = code.bytes().map(|b| u32::from(b - b'0')).collect();

        let sum: u32 = digits[..5]
            .iter()
            .zip(CHECK_WEIGHTS.iter())
            .map(|(d, w)| d * w)
            .sum();

        let expected = match sum % 11 {
            0 => 1,
            1 => 0,
            r => 11 - r,
        };

        digits[5] == expected
    }

    /// The normalized 6-digit form.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// First two digits.
    pub fn prefecture_code(&self) -> &str {
        &self.value[0..2]
    }

    /// Digits three to five.
    pub fn local_code(&self) -> &str {
        &self.value[2..5]
    }

    /// The trailing validation digit.
    pub fn check_digit(&self) -> &str {
        &self.value[5..6]
    }

    pub fn prefecture(&self) -> Prefecture {
        // Invariant: construction verified the prefecture code.
        Prefecture::from_code(self.prefecture_code())
            .unwrap_or_else(|| unreachable!("validated prefecture code"))
    }
}

impl fmt::Display for MunicipalityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for MunicipalityCode {
    type Err = JlgError;

    fn from_str(s: &str) -> Result<Self> {
        MunicipalityCode::new(s)
    }
}

impl Serialize for MunicipalityCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for MunicipalityCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        MunicipalityCode::new(&raw).map_err(de::Error::custom)
    }
}
