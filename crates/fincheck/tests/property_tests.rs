//! Property-based tests for extraction and check digits

use fincheck::{
    aba_check_digit, cusip_check_digit, find_securities, get_abas, get_cusips, get_isins,
    get_sedols, is_aba, is_cusip, is_isin, is_sedol, isin_check_digit, scan_windows,
    sedol_check_digit, IdentifierKind,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_cusip_check_digit_round_trip(payload in "[A-Z0-9*@#]{8}") {
        let check = cusip_check_digit(&payload).unwrap();
        let candidate = format!("{}{}", payload, check);
        let mutated = format!("{}{}", payload, (check + 1) % 10);
        prop_assert!(is_cusip(&candidate));
        prop_assert!(!is_cusip(&mutated));
    }

    #[test]
    fn test_isin_check_digit_round_trip(payload in "[A-Z]{2}[A-Z0-9]{9}") {
        let check = isin_check_digit(&payload).unwrap();
        let candidate = format!("{}{}", payload, check);
        let mutated = format!("{}{}", payload, (check + 1) % 10);
        prop_assert!(is_isin(&candidate));
        prop_assert!(!is_isin(&mutated));
    }

    #[test]
    fn test_sedol_check_digit_round_trip(payload in "[0-9BCDFGHJKLMNPQRSTVWXYZ]{6}") {
        let check = sedol_check_digit(&payload).unwrap();
        let candidate = format!("{}{}", payload, check);
        let mutated = format!("{}{}", payload, (check + 1) % 10);
        prop_assert!(is_sedol(&candidate));
        prop_assert!(!is_sedol(&mutated));
    }

    #[test]
    fn test_aba_check_digit_round_trip(prefix in "0[0-9]|1[0-2]|2[1-9]|3[0-2]|6[1-9]|7[0-2]|80", rest in "[0-9]{6}") {
        let payload = format!("{}{}", prefix, rest);
        let check = aba_check_digit(&payload).unwrap();
        let candidate = format!("{}{}", payload, check);
        prop_assert!(is_aba(&candidate));
    }

    #[test]
    fn test_validators_are_case_insensitive(payload in "[A-Z]{2}[A-Z0-9]{9}") {
        let check = isin_check_digit(&payload).unwrap();
        let candidate = format!("{}{}", payload, check);
        prop_assert_eq!(is_isin(&candidate), is_isin(&candidate.to_lowercase()));
        prop_assert_eq!(is_cusip(&candidate[..9]), is_cusip(&candidate[..9].to_lowercase()));
    }

    #[test]
    fn test_validators_never_panic(candidate in "\\PC{0,16}") {
        let _ = is_cusip(&candidate);
        let _ = is_isin(&candidate);
        let _ = is_sedol(&candidate);
        let _ = is_aba(&candidate);
    }

    #[test]
    fn test_extracted_lengths(text in "[A-Za-z0-9 ,.;()\\n-]{0,200}") {
        for value in get_cusips(&text) {
            prop_assert_eq!(value.len(), 9);
        }
        for value in get_isins(&text) {
            prop_assert_eq!(value.len(), 12);
        }
        for value in get_sedols(&text) {
            prop_assert_eq!(value.len(), 7);
        }
        for value in get_abas(&text) {
            prop_assert_eq!(value.len(), 9);
        }
    }

    #[test]
    fn test_extraction_is_idempotent(text in "[A-Z0-9 ,.]{0,200}") {
        prop_assert_eq!(get_cusips(&text), get_cusips(&text));
        prop_assert_eq!(get_isins(&text), get_isins(&text));
    }

    #[test]
    fn test_extracted_values_are_valid(text in "[A-Z0-9 ]{0,200}") {
        prop_assert!(get_cusips(&text).iter().all(|v| is_cusip(v)));
        prop_assert!(get_isins(&text).iter().all(|v| is_isin(v)));
        prop_assert!(get_sedols(&text).iter().all(|v| is_sedol(v)));
        prop_assert!(get_abas(&text).iter().all(|v| is_aba(v)));
    }

    #[test]
    fn test_glued_cusip_not_extracted(payload in "[A-Z0-9]{8}", glue in "[A-Za-z0-9_]") {
        let cusip = format!("{}{}", payload, cusip_check_digit(&payload).unwrap());
        prop_assert_eq!(get_cusips(&cusip), vec![cusip.clone()]);
        let leading = format!("{}{}", glue, cusip);
        let trailing = format!("{}{}", cusip, glue);
        prop_assert!(get_cusips(&leading).is_empty());
        prop_assert!(get_cusips(&trailing).is_empty());
        // The windowed scan still finds it
        prop_assert!(scan_windows(&leading, IdentifierKind::Cusip).contains(&cusip));
    }

    #[test]
    fn test_find_securities_matches_per_kind(text in "[A-Z0-9 ]{0,120}") {
        let found = find_securities(&text, &["CUSIP", "ISIN", "SEDOL"]).unwrap();
        prop_assert_eq!(&found[&IdentifierKind::Cusip], &get_cusips(&text));
        prop_assert_eq!(&found[&IdentifierKind::Isin], &get_isins(&text));
        prop_assert_eq!(&found[&IdentifierKind::Sedol], &get_sedols(&text));
    }
}
