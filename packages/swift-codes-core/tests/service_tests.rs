//! Query service behaviour against a real on-disk store.

use std::sync::Arc;

use proptest::prelude::*;
use tempfile::{tempdir, TempDir};

use swift_codes_core::record::is_headquarter;
use swift_codes_core::{CodeDetails, Record, Store, SwiftCodeService, SwiftError};

fn open_service() -> (TempDir, SwiftCodeService) {
    let dir = tempdir().unwrap();
    let store = Store::open(dir.path().join("swift_codes.db"), "swift_code").unwrap();
    (dir, SwiftCodeService::new(Arc::new(store)))
}

fn record(code: &str, iso2: &str, country: &str, hq: bool) -> Record {
    Record {
        address: format!("{} address", code),
        bank_name: "Test Bank".to_string(),
        country_iso2: iso2.to_string(),
        country_name: country.to_string(),
        is_headquarter: hq,
        code: code.to_string(),
    }
}

#[test]
fn test_insert_then_get_round_trip() {
    let (_dir, service) = open_service();
    let inserted = record("BANKGB2LABC", "gb", "United Kingdom", false);
    service.insert(inserted.clone()).unwrap();

    let fetched = match service.get_details("BANKGB2LABC").unwrap() {
        CodeDetails::Single(record) => record,
        other => panic!("expected single record, got {:?}", other),
    };
    assert_eq!(fetched, inserted.normalized());
}

fn arb_record() -> impl Strategy<Value = Record> {
    (
        "\\PC{0,40}",
        "\\PC{0,40}",
        "[a-zA-Z]{2}",
        "[a-zA-Z ]{0,30}",
        any::<bool>(),
        "[A-Z0-9]{1,11}",
    )
        .prop_map(
            |(address, bank_name, country_iso2, country_name, is_headquarter, code)| Record {
                address,
                bank_name,
                country_iso2,
                country_name,
                is_headquarter,
                code,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_insert_then_get_returns_normalized_record(inserted in arb_record()) {
        let (_dir, service) = open_service();
        service.insert(inserted.clone()).unwrap();

        let fetched = match service.get_details(&inserted.code).unwrap() {
            CodeDetails::Single(record) => record,
            CodeDetails::Headquarter(hq) => {
                prop_assert!(hq.branches.is_empty());
                hq.record
            }
        };
        prop_assert_eq!(fetched, inserted.normalized());
    }
}

#[test]
fn test_insert_overwrites_existing_code() {
    let (_dir, service) = open_service();
    service
        .insert(record("BANKGB2LABC", "GB", "United Kingdom", false))
        .unwrap();
    let mut replacement = record("BANKGB2LABC", "GB", "United Kingdom", false);
    replacement.bank_name = "Renamed Bank".to_string();
    service.insert(replacement).unwrap();

    match service.get_details("BANKGB2LABC").unwrap() {
        CodeDetails::Single(record) => assert_eq!(record.bank_name, "Renamed Bank"),
        other => panic!("expected single record, got {:?}", other),
    }
}

#[test]
fn test_delete_then_get_is_not_found() {
    let (_dir, service) = open_service();
    service
        .insert(record("TESTUS33XXX", "US", "United States", true))
        .unwrap();
    service.delete("TESTUS33XXX").unwrap();

    let err = service.get_details("TESTUS33XXX").unwrap_err();
    assert!(matches!(err, SwiftError::NotFound { .. }));
}

#[test]
fn test_delete_missing_code_succeeds() {
    let (_dir, service) = open_service();
    service.delete("DOESNOTEXIST").unwrap();
    service.delete("DOESNOTEXIST").unwrap();
}

#[test]
fn test_headquarter_collects_exactly_its_branches() {
    let (_dir, service) = open_service();
    service
        .insert(record("TESTUS33XXX", "us", "United States", true))
        .unwrap();
    service
        .insert(record("TESTUS33YYY", "US", "United States", false))
        .unwrap();
    service
        .insert(record("TESTUS33ZZZ", "us", "United States", false))
        .unwrap();
    service
        .insert(record("OTHRUS33YYY", "US", "United States", false))
        .unwrap();

    let hq = match service.get_details("TESTUS33XXX").unwrap() {
        CodeDetails::Headquarter(hq) => hq,
        other => panic!("expected headquarters, got {:?}", other),
    };
    assert_eq!(hq.record.code, "TESTUS33XXX");
    assert_eq!(hq.record.country_iso2, "US");

    let codes: Vec<&str> = hq.branches.iter().map(|b| b.code.as_str()).collect();
    assert_eq!(codes, vec!["TESTUS33YYY", "TESTUS33ZZZ"]);
    assert!(hq.branches.iter().all(|b| b.country_iso2 == "US"));

    let json = serde_json::to_value(&hq).unwrap();
    for branch in json["branches"].as_array().unwrap() {
        assert!(branch.get("countryName").is_none());
    }
}

#[test]
fn test_headquarter_without_branches_has_empty_list() {
    let (_dir, service) = open_service();
    service
        .insert(record("LONEDE33XXX", "DE", "Germany", true))
        .unwrap();

    match service.get_details("LONEDE33XXX").unwrap() {
        CodeDetails::Headquarter(hq) => assert!(hq.branches.is_empty()),
        other => panic!("expected headquarters, got {:?}", other),
    }
}

#[test]
fn test_short_code_flagged_headquarter_is_returned_bare() {
    let (_dir, service) = open_service();
    assert!(!is_headquarter("ABXXX"));
    service.insert(record("ABXXX", "US", "United States", true)).unwrap();
    service.insert(record("ABXXXYYY", "US", "United States", false)).unwrap();

    match service.get_details("ABXXX").unwrap() {
        CodeDetails::Single(record) => assert!(record.is_headquarter),
        other => panic!("expected single record, got {:?}", other),
    }
}

#[test]
fn test_short_keys_do_not_break_branch_scan() {
    let (_dir, service) = open_service();
    service
        .insert(record("TESTUS33XXX", "US", "United States", true))
        .unwrap();
    service.insert(record("TEST", "US", "United States", false)).unwrap();
    service.insert(record("", "US", "United States", false)).unwrap();

    match service.get_details("TESTUS33XXX").unwrap() {
        CodeDetails::Headquarter(hq) => assert!(hq.branches.is_empty()),
        other => panic!("expected headquarters, got {:?}", other),
    }
}

#[test]
fn test_list_by_country_normalizes_case() {
    let (_dir, service) = open_service();
    service
        .insert(record("TESTUS33XXX", "us", "United States", true))
        .unwrap();
    service
        .insert(record("TESTUS33YYY", "US", "united states", false))
        .unwrap();
    service.insert(record("BANKPLPWXXX", "PL", "Poland", true)).unwrap();

    let group = service.list_by_country("uS").unwrap();
    assert_eq!(group.country_iso2, "US");
    assert_eq!(group.country_name, "UNITED STATES");
    assert_eq!(group.swift_codes.len(), 2);
    assert!(group.swift_codes.iter().all(|r| r.country_iso2 == "US"));
}

#[test]
fn test_list_by_unknown_country_is_not_found() {
    let (_dir, service) = open_service();
    service.insert(record("BANKPLPWXXX", "PL", "Poland", true)).unwrap();

    let err = service.list_by_country("zz").unwrap_err();
    assert_eq!(
        err,
        SwiftError::CountryNotFound {
            iso2: "ZZ".to_string()
        }
    );
}
