// phishcheck-core/tests/url_check_tests.rs
use phishcheck_core::{check_url, evaluate_phishing, extract_features, FeatureSet, RuleId, Verdict};

fn rule_ids(url: &str) -> Vec<RuleId> {
    check_url(url).triggered_rules.iter().map(|h| h.rule).collect()
}

#[test_log::test]
fn test_empty_input_is_legit_with_half_point() {
    let report = check_url("");
    assert_eq!(report.features, FeatureSet::default());
    assert_eq!(report.features.entropy_score, 0.0);
    assert_eq!(report.score, 0.5);
    assert_eq!(report.verdict, Verdict::Legit);
    assert_eq!(rule_ids(""), vec![RuleId::NoWwwPrefix]);
}

#[test_log::test]
fn test_ip_address_with_login_keyword() {
    let report = check_url("http://192.168.1.1/login");
    let f = &report.features;
    assert!(f.has_ip_address);
    assert!(f.suspicious_keywords);
    assert_eq!(f.digit_count, 8);
    // ip (3) + keyword (2) + digits (1) + no www (0.5)
    assert_eq!(report.score, 6.5);
    assert_eq!(report.verdict, Verdict::Suspicious);
}

#[test_log::test]
fn test_suspicious_tld_with_free_keyword() {
    let report = check_url("http://freebies.xyz");
    assert!(report.features.suspicious_tld);
    assert!(report.features.suspicious_keywords);
    assert_eq!(report.score, 4.5);
    assert_eq!(report.verdict, Verdict::Suspicious);
}

#[test_log::test]
fn test_keyword_and_at_symbol_combo() {
    let url = "http://user@bank-login.com/verify";
    let report = check_url(url);
    let f = &report.features;

    assert_eq!(f.url_length, 33);
    assert_eq!(f.slash_count, 3);
    assert_eq!(f.dot_count, 1);
    assert_eq!(f.hyphen_count, 1);
    assert_eq!(f.digit_count, 0);
    assert_eq!(f.suspicious_chars, 0);
    assert!(f.has_at_symbol);
    assert!(f.suspicious_keywords);
    assert!(!f.starts_with_www);
    assert!(!f.has_port);
    assert!(!f.has_ip_address);
    assert!(!f.suspicious_tld);
    assert!((f.entropy_score - 4.5366702556565315).abs() < 1e-12);

    // at (3) + keyword (2) + length (2) + entropy (2) + no www (0.5)
    assert_eq!(report.score, 9.5);
    assert_eq!(report.verdict, Verdict::Phishing);
    assert_eq!(
        rule_ids(url),
        vec![
            RuleId::AtSymbol,
            RuleId::SuspiciousKeywords,
            RuleId::LongUrl,
            RuleId::HighEntropy,
            RuleId::NoWwwPrefix,
        ]
    );
}

#[test_log::test]
fn test_well_known_sites_are_legit() {
    let report = check_url("https://www.google.com");
    assert!(report.features.starts_with_www);
    assert_eq!(report.score, 0.0);
    assert_eq!(report.verdict, Verdict::Legit);

    let report = check_url("https://github.com/rust-lang/rust");
    assert_eq!(report.score, 2.5);
    assert_eq!(report.verdict, Verdict::Legit);
}

#[test_log::test]
fn test_port_in_host_is_extracted_but_not_scored() {
    let report = check_url("https://www.example.com:8080/path");
    assert!(report.features.has_port);
    assert_eq!(report.features.digit_count, 4);
    // Only the length rule fires.
    assert_eq!(report.score, 2.0);
}

#[test_log::test]
fn test_heavily_obfuscated_url_is_phishing() {
    let report = check_url("http://10.0.0.1:8080/a/b/c/d/e/f?id=12345&token=abc_def%20x");
    let f = &report.features;
    assert!(f.has_ip_address);
    assert!(f.has_port);
    assert_eq!(f.slash_count, 8);
    assert_eq!(f.digit_count, 16);
    assert_eq!(f.suspicious_chars, 5);
    assert_eq!(report.score, 11.5);
    assert_eq!(report.verdict, Verdict::Phishing);
}

#[test_log::test]
fn test_tld_with_trailing_path_does_not_match() {
    assert!(extract_features("http://freebies.xyz").suspicious_tld);
    assert!(!extract_features("http://freebies.xyz/page").suspicious_tld);
}

#[test_log::test]
fn test_scheme_less_www_url_is_penalized() {
    let report = check_url("www.google.com");
    assert!(!report.features.starts_with_www);
    assert_eq!(report.score, 0.5);
}

#[test_log::test]
fn test_malformed_ipv6_authority_degrades_gracefully() {
    let report = check_url("http://[::1/secure");
    assert!(!report.features.starts_with_www);
    assert!(!report.features.has_port);
    assert!(report.features.suspicious_keywords);
    // keyword (2) + no www (0.5)
    assert_eq!(report.score, 2.5);
}

#[test_log::test]
fn test_fullwidth_delimiter_in_authority_empties_host() {
    // U+FF20 normalizes to '@', so the authority is rejected.
    let report = check_url("http://www.\u{FF20}evil.com/");
    assert!(!report.features.starts_with_www);
    assert!(!report.features.has_ip_address);
    assert_eq!(report.score, 0.5);
    assert_eq!(report.verdict, Verdict::Legit);
}

#[test_log::test]
fn test_only_decimal_digits_count_toward_many_digits() {
    let report = check_url("http://\u{2460}\u{2461}\u{2462}\u{2463}\u{2464}\u{2465}.com/\u{00B2}\u{00B3}");
    assert_eq!(report.features.digit_count, 0);
    assert!(!rule_ids("http://\u{2460}\u{2461}\u{2462}\u{2463}\u{2464}\u{2465}.com/").contains(&RuleId::ManyDigits));
}

#[test_log::test]
fn test_determinism() {
    let urls = [
        "",
        "http://user@bank-login.com/verify",
        "http://secure-update-verify-login.account-confirm.xyz",
        "ftp://\u{00e9}\u{4e2d}\u{1f600}@x:1/%%%",
        "\u{0}\u{1}binary\u{7f}looking\u{fffd}",
    ];
    for url in urls {
        let a = check_url(url);
        let b = check_url(url);
        assert_eq!(a, b);
        assert_eq!(a.score.to_bits(), b.score.to_bits());
        assert_eq!(a.features.entropy_score.to_bits(), b.features.entropy_score.to_bits());
    }
}

#[test_log::test]
fn test_entropy_is_order_independent() {
    let original = "http://secure-update-verify-login.account-confirm.xyz";
    let mut chars: Vec<char> = original.chars().collect();
    chars.sort_unstable();
    let sorted: String = chars.iter().collect();
    let reversed: String = original.chars().rev().collect();

    let e = extract_features(original).entropy_score;
    assert_eq!(e.to_bits(), extract_features(&sorted).entropy_score.to_bits());
    assert_eq!(e.to_bits(), extract_features(&reversed).entropy_score.to_bits());
}

#[test_log::test]
fn test_arbitrary_unicode_and_long_input_never_panic() {
    let long = "a/".repeat(50_000);
    let report = check_url(&long);
    assert_eq!(report.features.url_length, 100_000);
    assert_eq!(report.features.slash_count, 50_000);
    assert!((report.features.entropy_score - 1.0).abs() < 1e-12);

    let (verdict, _, _) = evaluate_phishing("\u{202e}moc.elgoog//:sptth");
    assert_eq!(verdict, Verdict::Legit);
}

#[test_log::test]
fn test_kitchen_sink_reaches_maximum() {
    let url = "http://1.2.3.4/@/-/-/-/-/login/%/%/%/%/0123456789abcdefghijklmnopqrstuv.xyz";
    let report = check_url(url);
    assert_eq!(report.triggered_rules.len(), 11);
    assert_eq!(report.score, 20.5);
    assert_eq!(report.verdict, Verdict::Phishing);
}
