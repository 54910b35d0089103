//! End-to-end segmentation tests

use senpart_core::{
    compute_breakers, segment, BreakerCategory, LanguageProfile, SegmentError, SentenceSegmenter,
};

#[test]
fn english_example_yields_auxiliary_parts() {
    let parts = segment(
        "Even though it was raining, she was walking to school.",
        "en",
    )
    .unwrap();

    assert!(!parts.is_empty());
    assert!(parts
        .iter()
        .any(|part| part.text.contains("was") && part.auxiliaries.contains(&"was".to_string())));
    for part in &parts {
        assert!(!part.auxiliaries.is_empty());
    }
}

#[test]
fn excluded_nouns_are_not_gerund_breakers() {
    let profile = LanguageProfile::get("en").unwrap();
    let breakers = compute_breakers("the king was being kind.", profile);

    // "king" (position 4) and "being" both carry the suffix but are on
    // the exclusion list; "being" still appears as an auxiliary.
    assert!(breakers
        .iter()
        .all(|b| b.category != BreakerCategory::Gerund));
    assert!(breakers
        .iter()
        .any(|b| b.matched == "being" && b.category == BreakerCategory::Auxiliary));
    assert!(!breakers.iter().any(|b| b.matched == "king"));

    let parts = segment("The king was being kind.", "en").unwrap();
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].auxiliaries, vec!["was"]);
    assert_eq!(parts[1].auxiliaries, vec!["being"]);
}

#[test]
fn non_excluded_participle_is_a_gerund_breaker() {
    let profile = LanguageProfile::get("en").unwrap();
    let breakers = compute_breakers("she was walking to school.", profile);
    assert!(breakers
        .iter()
        .any(|b| b.matched == "walking" && b.category == BreakerCategory::Gerund));
}

#[test]
fn french_branch_uses_no_gerund_detection() {
    let sentence = "Bien qu'il ait plu, elle marchait.";

    let profile = LanguageProfile::get("fr").unwrap();
    let breakers = compute_breakers(&sentence.to_lowercase(), profile);
    assert!(!breakers.is_empty());
    assert!(breakers
        .iter()
        .all(|b| b.category != BreakerCategory::Gerund));

    let parts = segment(sentence, "fr").unwrap();
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].text, "ait plu");
    assert_eq!(parts[0].auxiliaries, vec!["ait"]);

    // The English profile knows nothing of French auxiliaries; the same
    // text yields nothing under "en".
    assert!(segment(sentence, "en").unwrap().is_empty());
}

#[test]
fn curly_apostrophes_match_straight_contractions() {
    let parts = segment("Bien qu\u{2019}il ait plu, elle marchait.", "fr").unwrap();
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].auxiliaries, vec!["ait"]);
}

#[test]
fn no_auxiliary_fast_path() {
    assert!(segment("The quick brown fox jumps over the lazy dog.", "en")
        .unwrap()
        .is_empty());
    assert!(segment("", "en").unwrap().is_empty());
    assert!(segment(" \t ", "fr").unwrap().is_empty());
}

#[test]
fn unsupported_language_is_an_error() {
    match segment("anything", "xx") {
        Err(SegmentError::UnsupportedLanguage { code }) => assert_eq!(code, "xx"),
        other => panic!("expected UnsupportedLanguage, got {other:?}"),
    }
}

#[test]
fn segmenter_is_shareable_across_threads() {
    let segmenter = SentenceSegmenter::for_language("en").unwrap();
    let sentence = "Even though it was raining, she was walking to school.";
    let expected = segmenter.segment(sentence);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let expected = expected.clone();
            std::thread::spawn(move || {
                let local = SentenceSegmenter::for_language("en").unwrap();
                for _ in 0..50 {
                    assert_eq!(local.segment(sentence), expected);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn breaker_positions_strictly_increasing(
            sentence in "[a-z ,.':]{0,80}",
            lang in prop_oneof![Just("en"), Just("fr")],
        ) {
            let profile = LanguageProfile::get(lang).unwrap();
            let breakers = compute_breakers(&sentence, profile);
            let positions: Vec<_> = breakers.iter().map(|b| b.position).collect();

            prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
            for breaker in breakers.iter() {
                prop_assert!(breaker.position < sentence.len());
                prop_assert!(breaker.position + breaker.matched.len() <= sentence.len());
            }
        }

        #[test]
        fn every_emitted_part_has_auxiliaries(
            sentence in "[a-zA-Z ,.':]{0,80}",
            lang in prop_oneof![Just("en"), Just("fr")],
        ) {
            for part in segment(&sentence, lang).unwrap() {
                prop_assert!(!part.auxiliaries.is_empty());
                prop_assert!(!part.text.trim().is_empty());
                prop_assert_eq!(part.text.trim(), part.text.as_str());
            }
        }

        #[test]
        fn segment_is_idempotent(
            sentence in "[a-zA-Z ,.':]{0,80}",
            lang in prop_oneof![Just("en"), Just("fr")],
        ) {
            prop_assert_eq!(
                segment(&sentence, lang).unwrap(),
                segment(&sentence, lang).unwrap()
            );
        }
    }
}
