//! End-to-end tests for the two analysis entry points.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use std::collections::HashSet;

use rhymeflow::clustering::legend;
use rhymeflow::lyrics::is_stopword;
use rhymeflow::similarity::{score, score_pair, traditional_score};
use rhymeflow::{
    analyze_rhyme_scheme, analyze_rhyme_statistics, extract_rhyme_keys, Statistics, Token,
    Vocabulary,
};

fn vocab(entries: &[(&str, &str)]) -> Vocabulary {
    entries
        .iter()
        .map(|(w, p)| ((*w).to_string(), (*p).to_string()))
        .collect()
}

fn song_vocab() -> Vocabulary {
    vocab(&[
        ("night", "N AY1 T"),
        ("light", "L AY1 T"),
        ("bright", "B R AY1 T"),
        ("sight", "S AY1 T"),
        ("day", "D EY1"),
        ("way", "W EY1"),
        ("stay", "S T EY1"),
        ("love", "L AH1 V"),
        ("above", "AH0 B AH1 V"),
        ("heart", "HH AA1 R T"),
        ("apart", "AH0 P AA1 R T"),
        ("singing", "S IH1 NG IH0 NG"),
        ("bringing", "B R IH1 NG IH0 NG"),
        ("shining", "SH AY1 N IH0 NG"),
        ("stars", "S T AA1 R Z"),
        ("the", "DH AH0"),
    ])
}

const SONG: &str = "Shining in the night,\n\
                    singing bringing light.\n\
                    Stay with me today, \n\
                    love will find a way\r\n\
                    \n\
                    Two hearts, never apart\n\
                    stars above my heart";

fn all_tokens(lines: &[Vec<Token>]) -> impl Iterator<Item = &Token> {
    lines.iter().flatten()
}

#[test]
fn scores_are_symmetric() {
    let v = song_vocab();
    let keys: Vec<_> = v.values().filter_map(|p| extract_rhyme_keys(p)).collect();
    for a in &keys {
        for b in &keys {
            assert_eq!(score(a, b), score(b, a), "{} / {}", a.full, b.full);
        }
    }
}

#[test]
fn every_word_scores_100_against_itself() {
    for phonemes in song_vocab().values() {
        let keys = extract_rhyme_keys(phonemes).unwrap();
        assert_eq!(score(&keys, &keys), 100, "{phonemes}");
    }
}

#[test]
fn missing_keys_never_rhyme() {
    let keys = extract_rhyme_keys("K AE1 T").unwrap();
    assert_eq!(score_pair(Some(&keys), None), 0);
    assert_eq!(score_pair(None, Some(&keys)), 0);
    assert_eq!(score_pair(None, None), 0);
}

#[test]
fn analysis_is_deterministic() {
    let v = song_vocab();
    assert_eq!(analyze_rhyme_scheme(SONG, &v), analyze_rhyme_scheme(SONG, &v));
    assert_eq!(analyze_rhyme_statistics(SONG, &v), analyze_rhyme_statistics(SONG, &v));
}

#[test]
fn tokens_reconstruct_the_lyrics() {
    let v = song_vocab();
    let samples = [
        SONG,
        "",
        "\n",
        "one line",
        "  leading\n\ntrailing  \n",
        "tabs\tand\r\nCRLF\r\n",
    ];
    for lyrics in samples {
        let joined: String = all_tokens(&analyze_rhyme_scheme(lyrics, &v))
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(joined, lyrics);
    }
}

#[test]
fn rhyme_groups_are_well_formed() {
    let v = song_vocab();
    let mut groups = analyze_rhyme_statistics(SONG, &v).rhyme_groups;
    groups.extend(legend(&analyze_rhyme_scheme(SONG, &v)));
    assert!(!groups.is_empty());

    for group in groups {
        assert_eq!(group.count, group.words.len());
        assert!(group.count >= 2);
        let distinct: HashSet<&String> = group.words.iter().collect();
        assert_eq!(distinct.len(), group.words.len(), "{:?}", group.words);
    }
}

#[test]
fn stopwords_are_never_rhymable() {
    // "the" has a vocabulary entry but is still excluded
    let v = song_vocab();
    let lines = analyze_rhyme_scheme(SONG, &v);
    for token in all_tokens(&lines).filter(|t| is_stopword(&t.clean)) {
        assert!(token.rhyme_keys.is_none(), "{}", token.clean);
        assert!(token.rhyme_group.is_none(), "{}", token.clean);
    }

    let stats = analyze_rhyme_statistics(SONG, &v);
    for group in &stats.rhyme_groups {
        assert!(group.words.iter().all(|w| !is_stopword(w)), "{:?}", group.words);
    }
}

#[test]
fn song_scheme_groups_rhyming_words() {
    let lines = analyze_rhyme_scheme(SONG, &song_vocab());
    let label = |word: &str| {
        all_tokens(&lines)
            .find(|t| t.clean == word)
            .and_then(|t| t.rhyme_group)
    };

    assert!(label("night").is_some());
    assert_eq!(label("night"), label("light"));
    assert!(label("shining").is_none());
    assert_eq!(label("stay"), label("way"));
    assert_eq!(label("apart"), label("heart"));
    assert_ne!(label("night"), label("heart"));
}

#[test]
fn scenario_a_three_perfect_rhymes_share_one_label() {
    let v = vocab(&[("cat", "K AE1 T"), ("hat", "HH AE1 T"), ("bat", "B AE1 T")]);
    let lines = analyze_rhyme_scheme("cat\nhat\nbat", &v);

    let labels: Vec<_> = all_tokens(&lines)
        .filter(|t| t.is_word())
        .map(|t| t.rhyme_group)
        .collect();
    assert_eq!(labels.len(), 3);
    assert!(labels[0].is_some());
    assert!(labels.iter().all(|l| *l == labels[0]));

    let groups = legend(&lines);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].count, 3);
    assert_eq!(groups[0].label.as_str(), "A");
}

#[test]
fn scenario_b_empty_lyrics() {
    let v = song_vocab();
    assert!(analyze_rhyme_scheme("", &v).is_empty());

    let stats = analyze_rhyme_statistics("", &v);
    assert_eq!(stats, Statistics::default());
    assert!(stats.rhyme_groups.is_empty());
    assert!(stats.rhyme_density.abs() < f64::EPSILON);
}

#[test]
fn scenario_c_unknown_words_are_inert() {
    let v = vocab(&[("cat", "K AE1 T"), ("hat", "HH AE1 T")]);
    let lyrics = "cat\nhat\nflat";

    let lines = analyze_rhyme_scheme(lyrics, &v);
    let flat = all_tokens(&lines).find(|t| t.clean == "flat").unwrap();
    assert!(flat.rhyme_keys.is_none());
    assert!(flat.rhyme_group.is_none());

    let stats = analyze_rhyme_statistics(lyrics, &v);
    assert_eq!(stats.total_rhymable_words, 2);
    assert!(stats.rhyme_groups.iter().all(|g| !g.words.contains(&"flat".to_string())));
}

#[test]
fn scenario_d_traditional_tiers() {
    let cat = extract_rhyme_keys("K AE1 T").unwrap();
    let hat = extract_rhyme_keys("HH AE1 T").unwrap();
    assert_eq!(score(&cat, &hat), 100);

    // only the final T is shared
    let boat = extract_rhyme_keys("B OW1 T").unwrap();
    assert_eq!(traditional_score(&cat, &boat), 45);
}

#[test]
fn scenario_e_only_stopwords() {
    let v = vocab(&[("the", "DH AH0"), ("and", "AH0 N D"), ("of", "AH1 V")]);
    let stats = analyze_rhyme_statistics("the and of", &v);
    assert_eq!(stats.total_rhymable_words, 0);
    assert!(stats.rhyme_groups.is_empty());

    let lines = analyze_rhyme_scheme("the and of", &v);
    assert!(all_tokens(&lines).all(|t| t.rhyme_keys.is_none()));
}

#[test]
fn statistics_serialize_camel_case() {
    let v = vocab(&[("cat", "K AE1 T"), ("hat", "HH AE1 T")]);
    let stats = analyze_rhyme_statistics("cat\nhat", &v);
    let json = serde_json::to_value(&stats).unwrap();

    for field in [
        "totalRhymableWords",
        "perfectRhymes",
        "nearRhymes",
        "soundsLike",
        "internalRhymes",
        "rhymeDensity",
        "rhymeGroups",
    ] {
        assert!(json.get(field).is_some(), "missing {field}");
    }
    assert_eq!(json["rhymeGroups"][0]["label"], "A");
    assert_eq!(json["rhymeGroups"][0]["count"], 2);
}
