use crate::command::Intent;
use crate::engine::{classify_keywords, classify_patterns};
use crate::rules::intent::{keywords, patterns};
use crate::{Entity, EntityKind, Value};

fn entity(kind: EntityKind, confidence: f64) -> Entity {
    Entity {
        kind,
        value: String::new(),
        normalized: Value::Text(String::new()),
        confidence,
        start: 0,
        end: 1,
        rule: "test".to_string(),
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn pattern_table_examples() {
    let rules = patterns::get();
    let cases: Vec<(&str, Intent, f64)> = vec![
        ("ahmet yılmaz için yeni bağış ekle 500 tl", Intent::Create, 0.9),
        ("bugün toplantı listele", Intent::List, 0.85),
        ("tümünü göster", Intent::List, 0.85),
        ("hak sahibi bilgilerini güncelle", Intent::Update, 0.9),
        ("05321234567 numaralı kişiyi sil", Intent::Delete, 0.95),
        ("son 7 gün rapor", Intent::Report, 0.8),
        ("bağış modülü aç", Intent::Navigate, 0.7),
        ("toplu sms", Intent::Automate, 0.8),
        ("verileri dışa aktar", Intent::Export, 0.9),
        ("üyelere mesaj gönder", Intent::Notify, 0.85),
        ("", Intent::Unknown, 0.0),
        ("merhaba", Intent::Unknown, 0.0),
    ];

    for (text, intent, confidence) in cases {
        let got = classify_patterns(text, &rules);
        assert_eq!(got.intent, intent, "intent for {text:?}");
        assert_eq!(got.confidence, confidence, "confidence for {text:?}");
        assert!(got.scores.is_empty());
    }
}

#[test]
fn pattern_table_order_shadows_later_intents() {
    // "çıkar" is both a delete and an export verb; DELETE is declared first.
    let got = classify_patterns("raporu çıkar", &patterns::get());
    assert_eq!(got.intent, Intent::Delete);
}

#[test]
fn keyword_scoring_create_with_entities() {
    let entities = vec![entity(EntityKind::Person, 0.8), entity(EntityKind::Money, 0.8)];
    let got = classify_keywords("ahmet yılmaz için yeni bağış ekle 500 tl", &entities, &keywords::DEFAULT);

    assert_eq!(got.intent, Intent::Create);
    assert!(approx(got.confidence, 0.8), "confidence {}", got.confidence);
    assert!(got.scores.contains(&(Intent::Create, 4.5)));
    assert!(got.scores.contains(&(Intent::Report, 0.5)));
}

#[test]
fn keyword_scoring_ties_go_to_earliest_intent() {
    let entities = vec![entity(EntityKind::Date, 0.7)];
    let got = classify_keywords("bugün toplantı listele", &entities, &keywords::DEFAULT);

    assert!(got.scores.contains(&(Intent::Read, 2.0)));
    assert!(got.scores.contains(&(Intent::Search, 2.0)));
    assert_eq!(got.intent, Intent::Read);

    let got = classify_keywords("verileri çıkar", &[], &keywords::DEFAULT);
    assert_eq!(got.intent, Intent::Delete);
}

#[test]
fn keyword_scoring_phone_delete() {
    let entities = vec![entity(EntityKind::Phone, 0.7)];
    let got = classify_keywords("05321234567 numaralı kişiyi sil", &entities, &keywords::DEFAULT);
    assert_eq!(got.intent, Intent::Delete);
    assert!(approx(got.confidence, 0.7));
}

#[test]
fn keyword_scoring_report_and_empty() {
    let entities = vec![entity(EntityKind::Date, 0.7)];
    let got = classify_keywords("son 7 gün rapor", &entities, &keywords::DEFAULT);
    assert_eq!(got.intent, Intent::Report);
    assert!(got.scores.contains(&(Intent::Report, 2.5)));

    let got = classify_keywords("", &[], &keywords::DEFAULT);
    assert_eq!(got.intent, Intent::Unknown);
    assert!(approx(got.confidence, 0.3));
    assert!(got.scores.iter().all(|(_, score)| *score == 0.0));
}
