//! Pattern catalogue tests for the regex detector

use docmask::masking::detector::patterns::PatternRegistry;
use docmask::masking::{PiiDetector, PiiTools, PiiType, RegexDetector};
use test_case::test_case;

fn detector() -> RegexDetector {
    RegexDetector::new().expect("Failed to create detector")
}

#[test_case("주민번호 900101-1234567", PiiType::NationalId, "900101-1234567" ; "national id")]
#[test_case("휴대폰 010-1234-5678", PiiType::MobilePhone, "010-1234-5678" ; "mobile phone")]
#[test_case("휴대폰 01012345678", PiiType::MobilePhone, "01012345678" ; "mobile phone without separators")]
#[test_case("대표번호 02-123-4567", PiiType::LandlinePhone, "02-123-4567" ; "landline phone")]
#[test_case("메일: user.name@example.co.kr", PiiType::Email, "user.name@example.co.kr" ; "email")]
#[test_case("카드 1234-5678-9012-3456", PiiType::CardNumber, "1234-5678-9012-3456" ; "card number")]
#[test_case("계좌 110-123-456789", PiiType::BankAccount, "110-123-456789" ; "bank account")]
#[test_case("면허 11-12-345678-90", PiiType::DriverLicense, "11-12-345678-90" ; "driver license")]
#[test_case("여권 M12345678", PiiType::Passport, "M12345678" ; "passport")]
fn test_detects_single_entity(text: &str, expected_type: PiiType, expected_value: &str) {
    let result = detector().detect(text);

    assert_eq!(result.pii_count, 1, "entities: {:?}", result.entities);
    let entity = &result.entities[0];
    assert_eq!(entity.pii_type, expected_type);
    assert_eq!(entity.value, expected_value);

    let chars: Vec<char> = text.chars().collect();
    let slice: String = chars[entity.start..entity.end].iter().collect();
    assert_eq!(slice, expected_value);
}

#[test_case("" ; "empty text")]
#[test_case("hello world" ; "plain ascii")]
#[test_case("개인정보가 포함되지 않은 문서입니다" ; "plain korean")]
#[test_case("총 12-34 페이지" ; "short number run")]
#[test_case("user at example dot com" ; "spelled out email")]
fn test_detects_nothing(text: &str) {
    let result = detector().detect(text);
    assert_eq!(result.pii_count, 0);
    assert!(result.entities.is_empty());
}

#[test]
fn test_korean_character_offsets() {
    let result = detector().detect("연락처는 010-1234-5678 입니다");

    assert_eq!(result.pii_count, 1);
    let entity = &result.entities[0];
    assert_eq!(entity.pii_type, PiiType::MobilePhone);
    assert_eq!(entity.value, "010-1234-5678");
    assert_eq!(entity.start, 5);
    assert_eq!(entity.end, 18);
}

#[test]
fn test_email_spans_whole_input() {
    let result = detector().detect("test@example.com");

    assert_eq!(result.pii_count, 1);
    assert_eq!(result.entities[0].pii_type, PiiType::Email);
    assert_eq!(result.entities[0].start, 0);
    assert_eq!(result.entities[0].end, 16);
}

#[test]
fn test_entities_in_reading_order() {
    let text = "여권 M12345678, 메일 a@b.co, 주민 900101-1234567";
    let result = detector().detect(text);

    let types: Vec<PiiType> = result.entities.iter().map(|e| e.pii_type.clone()).collect();
    assert_eq!(
        types,
        vec![PiiType::Passport, PiiType::Email, PiiType::NationalId]
    );
    assert!(result.entities.windows(2).all(|w| w[0].start <= w[1].start));
}

#[test]
fn test_identical_spans_without_collapse() {
    let detector = detector().with_identical_span_collapse(false);
    let result = detector.detect("010-1234-5678");

    let types: Vec<PiiType> = result.entities.iter().map(|e| e.pii_type.clone()).collect();
    assert_eq!(types, vec![PiiType::MobilePhone, PiiType::BankAccount]);
}

#[test]
fn test_card_number_owns_identical_bank_span() {
    let collapsed = detector().detect("1234-5678-9012-3456");
    assert_eq!(collapsed.pii_count, 1);
    assert_eq!(collapsed.entities[0].pii_type, PiiType::CardNumber);

    let full = detector()
        .with_identical_span_collapse(false)
        .detect("1234-5678-9012-3456");
    let types: Vec<PiiType> = full.entities.iter().map(|e| e.pii_type.clone()).collect();
    assert_eq!(types, vec![PiiType::CardNumber, PiiType::BankAccount]);
    assert!(full.entities.iter().all(|e| (e.start, e.end) == (0, 19)));
}

#[test]
fn test_nested_overlap_preserved() {
    let result = detector().detect("110-010-1234-5678");

    assert_eq!(result.pii_count, 2);
    assert_eq!(result.entities[0].pii_type, PiiType::BankAccount);
    assert_eq!((result.entities[0].start, result.entities[0].end), (0, 17));
    assert_eq!(result.entities[1].pii_type, PiiType::MobilePhone);
    assert_eq!((result.entities[1].start, result.entities[1].end), (4, 17));
}

#[test]
fn test_detection_is_deterministic() {
    let text = "카드 1234-5678-9012-3456 / 010-9876-5432 / x@y.kr";
    let d = detector();
    assert_eq!(d.detect(text), d.detect(text));
}

#[test]
fn test_pattern_library_override_and_append() {
    let registry = PatternRegistry::from_toml(
        r#"
[[patterns]]
type = "passport"
pattern = 'P[0-9]{8}'

[[patterns]]
type = "사번"
pattern = 'EMP-\d{6}'
mask = "EMP-******"
"#,
    )
    .expect("Failed to load pattern library");

    let types = registry.types();
    assert_eq!(types.len(), 9);
    assert_eq!(types[7], PiiType::Passport);
    assert_eq!(types[8], PiiType::Other("사번".to_string()));

    let tools = PiiTools::from_registry(registry);
    let result = tools.detect_pii("여권 M12345678 / P12345678 / EMP-000123");
    let values: Vec<&str> = result.entities.iter().map(|e| e.value.as_str()).collect();
    assert_eq!(values, vec!["P12345678", "EMP-000123"]);
}

#[test]
fn test_invalid_pattern_library_rejected() {
    let result = PatternRegistry::from_toml(
        r#"
[[patterns]]
type = "broken"
pattern = '(unclosed'
"#,
    );
    assert!(result.is_err());
}
