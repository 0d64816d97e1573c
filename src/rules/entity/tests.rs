use crate::engine::extract_entities;
use crate::rules::entity;
use crate::value::{Currency, Money, Status, Value};
use crate::{Context, Entity, EntityKind};
use chrono::NaiveDate;

fn context() -> Context {
    let reference = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(12, 0, 0).unwrap();
    Context { reference_time: reference }
}

fn extract(input: &str) -> Vec<Entity> {
    let rules = entity::get();
    extract_entities(input, &context(), &rules)
}

fn kinds(entities: &[Entity]) -> Vec<EntityKind> {
    entities.iter().map(|e| e.kind).collect()
}

#[test]
fn person_and_money_in_donation_command() {
    let input = "Ahmet Yılmaz için yeni bağış ekle 500 TL";
    let entities = extract(input);

    assert_eq!(kinds(&entities), vec![EntityKind::Person, EntityKind::Money]);

    let person = &entities[0];
    assert_eq!(person.value, "Ahmet Yılmaz");
    assert_eq!((person.start, person.end), (0, "Ahmet Yılmaz".len()));
    assert_eq!(person.confidence, 0.8);
    let name = person.normalized.as_person().unwrap();
    assert_eq!(name.first_name, "Ahmet");
    assert_eq!(name.last_name, "Yılmaz");

    let money = &entities[1];
    assert_eq!(money.value, "500 TL");
    assert_eq!(&input[money.start..money.end], "500 TL");
    assert_eq!(money.normalized, Value::Money(Money { amount: 500.0, currency: Currency::Try }));
}

#[test]
fn relative_day_resolves_against_reference() {
    let entities = extract("bugün toplantı listele");
    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].kind, EntityKind::Date);
    assert_eq!(entities[0].normalized, Value::Date(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()));
    assert_eq!(entities[0].confidence, 0.7);
}

#[test]
fn national_phone_beats_number_and_partial_match() {
    let entities = extract("05321234567 numaralı kişiyi sil");
    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].kind, EntityKind::Phone);
    assert_eq!(entities[0].value, "05321234567");
    assert_eq!(entities[0].normalized, Value::Phone("+905321234567".to_string()));
    assert_eq!(entities[0].confidence, 0.7);
}

#[test]
fn grouped_international_phone() {
    let entities = extract("+90 532 123 45 67 numarasını ara");
    assert_eq!(kinds(&entities), vec![EntityKind::Phone]);
    assert_eq!(entities[0].value, "+90 532 123 45 67");
    assert_eq!(entities[0].normalized, Value::Phone("+905321234567".to_string()));
}

#[test]
fn spaced_national_phone() {
    let entities = extract("0532 123 45 67 numaralı kişiyi sil");
    assert_eq!(kinds(&entities), vec![EntityKind::Phone]);
    assert_eq!(entities[0].value, "0532 123 45 67");
    assert_eq!(entities[0].normalized, Value::Phone("+905321234567".to_string()));
}

#[test]
fn overlong_digit_run_stays_text() {
    let entities = extract("kayıt 123456789012345678901234 sil");
    assert_eq!(kinds(&entities), vec![EntityKind::Number]);
    assert_eq!(entities[0].normalized, Value::Text("123456789012345678901234".to_string()));
}

#[test]
fn empty_input_has_no_entities() {
    assert!(extract("").is_empty());
    assert!(extract("   ").is_empty());
}

#[test]
fn last_n_days_is_one_range() {
    let entities = extract("son 7 gün rapor");
    assert_eq!(kinds(&entities), vec![EntityKind::Date]);
    assert_eq!(entities[0].value, "son 7 gün");
    assert_eq!(
        entities[0].normalized,
        Value::DateRange {
            start: NaiveDate::from_ymd_opt(2024, 3, 8).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        }
    );
}

#[test]
fn numeric_date_swallows_its_numbers() {
    let entities = extract("15.03.2024 tarihli kayıtlar");
    assert_eq!(kinds(&entities), vec![EntityKind::Date]);
    assert_eq!(entities[0].confidence, 0.9);
    assert_eq!(entities[0].normalized.as_date(), NaiveDate::from_ymd_opt(2024, 3, 15));
}

#[test]
fn email_id_and_uuid() {
    let entities = extract("ali@ornek.com adresine mesaj gönder");
    assert_eq!(kinds(&entities), vec![EntityKind::Email]);
    assert_eq!(entities[0].confidence, 0.95);

    let entities = extract("id=ab12 kaydını sil");
    assert_eq!(kinds(&entities), vec![EntityKind::Id]);
    assert_eq!(entities[0].value, "id=ab12");
    assert_eq!(entities[0].confidence, 0.8);

    let entities = extract("kayıt 123e4567-e89b-12d3-a456-426614174000 göster");
    assert_eq!(kinds(&entities), vec![EntityKind::Id]);
    assert_eq!(entities[0].confidence, 0.95);
}

#[test]
fn decimal_amount_in_euro() {
    let entities = extract("250,50 € bağış");
    assert_eq!(kinds(&entities), vec![EntityKind::Money]);
    assert_eq!(entities[0].confidence, 0.9);
    assert_eq!(entities[0].normalized.as_money(), Some(Money { amount: 250.5, currency: Currency::Eur }));
}

#[test]
fn status_location_and_long_names() {
    let entities = extract("aktif hak sahiplerini listele");
    assert_eq!(kinds(&entities), vec![EntityKind::Status]);
    assert_eq!(entities[0].normalized, Value::Status(Status::Active));

    let entities = extract("yardımları Kadıköy ilçesi için göster");
    assert_eq!(kinds(&entities), vec![EntityKind::Location]);
    assert_eq!(entities[0].value, "Kadıköy ilçesi");

    let entities = extract("Mehmet Ali Kaya kaydını güncelle");
    assert_eq!(kinds(&entities), vec![EntityKind::Person]);
    assert_eq!(entities[0].confidence, 0.6);
}

#[test]
fn resolved_entities_are_sorted_and_disjoint() {
    let inputs = [
        "Ayşe Demir 15.03.2024 tarihinde 1500 TL bağış yaptı, tel 05321234567",
        "id: 42 ve kimlik=77 olan kişiler, son 3 ay",
        "Zeynep Kaya zeynep@ornek.org 2024-01-05 beklemede",
    ];
    for input in inputs {
        let entities = extract(input);
        assert!(!entities.is_empty(), "no entities for {input:?}");
        for entity in &entities {
            assert!(entity.start < entity.end);
            assert_eq!(&input[entity.start..entity.end], entity.value);
        }
        for pair in entities.windows(2) {
            assert!(pair[0].end <= pair[1].start, "overlap in {input:?}: {pair:?}");
        }
    }
}
