// Shared test helpers: a scripted lookup engine and record fixtures.
//
// The engine mirrors how real databases answer: `fail.fail` has no entry,
// `empty` resolves to a record with no data, everything else returns the
// fixture it was built with.

use serde_json::{json, Value};

use geoip_reader::{DatabaseDescriptor, GeoIpError, GeoIpReader, LookupEngine, RawRecord};

/// Address the mock engine has no entry for.
pub const MISSING: &str = "fail.fail";
/// Address the mock engine resolves to an empty record.
pub const EMPTY: &str = "empty";

/// Lookup engine returning a fixed fixture.
pub struct MockEngine {
    descriptor: DatabaseDescriptor,
    fixture: RawRecord,
}

impl MockEngine {
    pub fn new(database_type: &str, fixture: Value) -> Self {
        Self {
            descriptor: descriptor(database_type),
            fixture: fixture
                .as_object()
                .cloned()
                .expect("fixture must be a JSON object"),
        }
    }
}

impl LookupEngine for MockEngine {
    fn get(&self, address: &str) -> Result<Option<RawRecord>, GeoIpError> {
        match address {
            MISSING => Ok(None),
            EMPTY => Ok(Some(RawRecord::new())),
            _ => Ok(Some(self.fixture.clone())),
        }
    }

    fn descriptor(&self) -> &DatabaseDescriptor {
        &self.descriptor
    }
}

/// Builds a reader over a mock engine.
#[allow(dead_code)] // Not every test file uses every helper
pub fn mock_reader(database_type: &str, fixture: Value) -> GeoIpReader<MockEngine> {
    GeoIpReader::from_engine(MockEngine::new(database_type, fixture))
}

/// Descriptor with the given type and otherwise plausible metadata.
pub fn descriptor(database_type: &str) -> DatabaseDescriptor {
    DatabaseDescriptor {
        database_type: database_type.to_string(),
        ip_version: 6,
        binary_format_major_version: 2,
        binary_format_minor_version: 0,
        build_epoch: 1_700_000_000,
        description: [("en".to_string(), "hello".to_string())].into_iter().collect(),
        languages: vec!["en".to_string()],
        node_count: 1,
        record_size: 28,
    }
}

/// A GeoIP2 City record for a London address, snake_case as stored.
#[allow(dead_code)]
pub fn city_fixture() -> Value {
    json!({
        "city": {
            "geoname_id": 2643743,
            "names": {"en": "London", "pt-BR": "Londres", "zh-CN": "伦敦"}
        },
        "continent": {
            "code": "EU",
            "geoname_id": 6255148,
            "names": {"en": "Europe", "pt-BR": "Europa"}
        },
        "country": {
            "geoname_id": 2635167,
            "is_in_european_union": false,
            "iso_code": "GB",
            "names": {"en": "United Kingdom", "pt-BR": "Reino Unido"}
        },
        "location": {
            "accuracy_radius": 10,
            "latitude": 51.5142,
            "longitude": -0.0931,
            "time_zone": "Europe/London"
        },
        "maxmind": {"queries_remaining": 11},
        "postal": {"code": "EC2V", "confidence": 40},
        "registered_country": {
            "geoname_id": 6252001,
            "iso_code": "US",
            "names": {"en": "United States"}
        },
        "represented_country": {
            "geoname_id": 6252001,
            "iso_code": "US",
            "names": {"en": "United States"},
            "type": "military"
        },
        "subdivisions": [
            {
                "geoname_id": 6269131,
                "iso_code": "ENG",
                "names": {"en": "England", "pt-BR": "Inglaterra"}
            },
            {
                "geoname_id": 3333217,
                "iso_code": "WBK",
                "names": {"en": "West Berkshire"}
            }
        ],
        "traits": {
            "autonomous_system_number": 1239,
            "autonomous_system_organization": "Linkem IR WiMax Network",
            "domain": "example.com",
            "ip_address": "81.2.69.160",
            "is_anonymous_proxy": true,
            "is_satellite_provider": true,
            "isp": "Linkem spa",
            "organization": "Linkem IR WiMax Network",
            "user_type": "traveler"
        }
    })
}

/// The camelCased form of [`city_fixture`] as the city method returns it for `address`.
#[allow(dead_code)]
pub fn expected_city(address: &str) -> Value {
    json!({
        "city": {
            "geonameId": 2643743,
            "names": {"en": "London", "pt-BR": "Londres", "zh-CN": "伦敦"}
        },
        "continent": {
            "code": "EU",
            "geonameId": 6255148,
            "names": {"en": "Europe", "pt-BR": "Europa"}
        },
        "country": {
            "geonameId": 2635167,
            "isInEuropeanUnion": false,
            "isoCode": "GB",
            "names": {"en": "United Kingdom", "pt-BR": "Reino Unido"}
        },
        "location": {
            "accuracyRadius": 10,
            "latitude": 51.5142,
            "longitude": -0.0931,
            "timeZone": "Europe/London"
        },
        "maxmind": {"queriesRemaining": 11},
        "postal": {"code": "EC2V", "confidence": 40},
        "registeredCountry": {
            "geonameId": 6252001,
            "isoCode": "US",
            "names": {"en": "United States"}
        },
        "representedCountry": {
            "geonameId": 6252001,
            "isoCode": "US",
            "names": {"en": "United States"},
            "type": "military"
        },
        "subdivisions": [
            {
                "geonameId": 6269131,
                "isoCode": "ENG",
                "names": {"en": "England", "pt-BR": "Inglaterra"}
            },
            {
                "geonameId": 3333217,
                "isoCode": "WBK",
                "names": {"en": "West Berkshire"}
            }
        ],
        "traits": {
            "autonomousSystemNumber": 1239,
            "autonomousSystemOrganization": "Linkem IR WiMax Network",
            "domain": "example.com",
            "ipAddress": address,
            "isAnonymous": false,
            "isAnonymousProxy": true,
            "isAnonymousVpn": false,
            "isHostingProvider": false,
            "isLegitimateProxy": false,
            "isPublicProxy": false,
            "isSatelliteProvider": true,
            "isTorExitNode": false,
            "isp": "Linkem spa",
            "organization": "Linkem IR WiMax Network",
            "userType": "traveler"
        }
    })
}

/// Traits of a record with no data.
#[allow(dead_code)]
pub fn empty_traits() -> Value {
    json!({
        "ipAddress": EMPTY,
        "isAnonymous": false,
        "isAnonymousProxy": false,
        "isAnonymousVpn": false,
        "isHostingProvider": false,
        "isLegitimateProxy": false,
        "isPublicProxy": false,
        "isSatelliteProvider": false,
        "isTorExitNode": false
    })
}
