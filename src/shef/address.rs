use regex::Regex;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

static DOTTED_QUAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})$").expect("valid dotted quad pattern"));

/// IPv4 address of a set-top-box in dotted quad notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceAddress(String);

impl DeviceAddress {
    pub fn parse(address: &str) -> Result<Self, AddressError> {
        let captures = DOTTED_QUAD
            .captures(address)
            .ok_or_else(|| AddressError::NotDottedQuad(address.to_string()))?;

        // Every group must fit in an octet
        let in_range = captures.iter().skip(1).flatten().all(|group| group.as_str().parse::<u8>().is_ok());
        if !in_range {
            return Err(AddressError::OctetOutOfRange(address.to_string()));
        }

        Ok(DeviceAddress(address.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for DeviceAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeviceAddress::parse(s)
    }
}

impl Display for DeviceAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum AddressError {
    #[error("'{0}' is not a dotted quad IPv4 address")]
    NotDottedQuad(String),
    #[error("'{0}' has an octet above 255")]
    OctetOutOfRange(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("192.168.1.20")]
    #[case("10.0.0.1")]
    #[case("0.0.0.0")]
    #[case("255.255.255.255")]
    #[case("127.000.000.001")]
    fn accepts_dotted_quads(#[case] input: &str) {
        assert_eq!(DeviceAddress::parse(input).map(|a| a.to_string()), Ok(input.to_string()));
    }

    #[rstest]
    #[case("")]
    #[case("localhost")]
    #[case("192.168.1")]
    #[case("192.168.1.20.5")]
    #[case("192x168x1x20")]
    #[case("1921.168.1.20")]
    #[case(" 192.168.1.20")]
    #[case("192.168.1.20\n")]
    #[case("١٩٢.168.1.20")]
    fn rejects_malformed_addresses(#[case] input: &str) {
        assert_eq!(DeviceAddress::parse(input), Err(AddressError::NotDottedQuad(input.to_string())));
    }

    #[rstest]
    #[case("256.1.1.1")]
    #[case("192.168.1.999")]
    fn rejects_octets_above_255(#[case] input: &str) {
        assert_eq!(DeviceAddress::parse(input), Err(AddressError::OctetOutOfRange(input.to_string())));
    }
}
