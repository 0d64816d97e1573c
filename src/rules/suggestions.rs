//! Follow-up prompts and example commands.

use crate::command::Intent;
use crate::{Entity, EntityKind};

const MAX_FOLLOW_UPS: usize = 3;
const MAX_COMMANDS: usize = 5;

/// Questions to ask when the analysis is missing something, most specific first.
pub(crate) fn follow_up(intent: Intent, entities: &[Entity]) -> Vec<String> {
    let mut out: Vec<&str> = Vec::new();

    match intent {
        Intent::Create => {
            out.push("Hangi modülde oluşturmak istiyorsunuz?");
            if !entities.iter().any(|e| e.kind == EntityKind::Person) {
                out.push("Kişi adı belirtir misiniz?");
            }
        }
        Intent::Search => {
            out.push("Aramayı hangi kriterlere göre yapalım?");
            out.push("Tarih aralığı belirtmek ister misiniz?");
        }
        Intent::Report => {
            out.push("Hangi tarih aralığı için rapor?");
            out.push("Hangi modül raporu: bağış, hak sahibi, görev?");
        }
        _ => {}
    }

    if entities.is_empty() {
        out.push("Daha spesifik bilgi verebilir misiniz?");
        out.push("Hangi modülle ilgili: bağış, hak sahibi, toplantı?");
    }

    out.into_iter().take(MAX_FOLLOW_UPS).map(str::to_string).collect()
}

static CANNED: &[&str] = &["Hak sahibi listele", "Yeni bağış ekle", "Toplantı oluştur", "Rapor al", "Mesaj gönder"];

/// `(triggers, suggestions)`; a group applies when the input contains any trigger.
static TRIGGERED: &[(&[&str], &[&str])] = &[
    (
        &["hak", "kişi"],
        &["Hak sahibi listele", "Yeni hak sahibi ekle", "Hak sahibi ara: ad soyad", "Hak sahibi belgesi yükle"],
    ),
    (&["bağış", "para"], &["Bağış listele", "Yeni bağış ekle", "Bağış raporu al", "Bağış dışa aktar"]),
    (
        &["rapor", "analiz"],
        &["Aylık rapor al", "Bağış analizi yap", "Dağıtım raporu oluştur", "İstatistik göster"],
    ),
];

pub(crate) fn command_suggestions(partial: &str) -> Vec<String> {
    if partial.chars().count() < 3 {
        return CANNED.iter().map(|s| s.to_string()).collect();
    }

    let lower = partial.to_lowercase();
    TRIGGERED
        .iter()
        .filter(|(triggers, _)| triggers.iter().any(|t| lower.contains(*t)))
        .flat_map(|(_, suggestions)| suggestions.iter())
        .take(MAX_COMMANDS)
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    fn person() -> Entity {
        Entity {
            kind: EntityKind::Person,
            value: "Ali Veli".to_string(),
            normalized: Value::Text("Ali Veli".to_string()),
            confidence: 0.8,
            start: 0,
            end: 8,
            rule: "person".to_string(),
        }
    }

    #[test]
    fn create_without_person_asks_for_a_name() {
        let out = follow_up(Intent::Create, &[]);
        assert_eq!(
            out,
            vec!["Hangi modülde oluşturmak istiyorsunuz?", "Kişi adı belirtir misiniz?", "Daha spesifik bilgi verebilir misiniz?"]
        );

        let out = follow_up(Intent::Create, &[person()]);
        assert_eq!(out, vec!["Hangi modülde oluşturmak istiyorsunuz?"]);
    }

    #[test]
    fn follow_ups_are_capped() {
        assert_eq!(follow_up(Intent::Report, &[]).len(), 3);
        assert_eq!(follow_up(Intent::Unknown, &[]).len(), 2);
        assert!(follow_up(Intent::Delete, &[person()]).is_empty());
    }

    #[test]
    fn short_input_gets_canned_commands() {
        assert_eq!(command_suggestions("").len(), 5);
        assert_eq!(command_suggestions("ha")[0], "Hak sahibi listele");
    }

    #[test]
    fn keyword_triggered_commands() {
        let out = command_suggestions("Bağış raporu");
        assert_eq!(out, vec!["Bağış listele", "Yeni bağış ekle", "Bağış raporu al", "Bağış dışa aktar", "Aylık rapor al"]);

        assert_eq!(command_suggestions("kişi").len(), 4);
        assert!(command_suggestions("toplantı").is_empty());
    }
}
