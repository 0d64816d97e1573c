use crate::IntentRule;
use crate::command::Intent;

fn rule_create() -> IntentRule {
    intent_rule! {
        intent: Intent::Create,
        confidence: 0.9,
        patterns: [
            r"(?i)(?:yeni|ekle|oluştur|kaydet|girdi)\s+(.+)",
            r"(?i)(.+)\s+(?:ekle|oluştur|kaydet|girdi)",
            r"(?i)(?:create|add|new)\s+(.+)",
        ],
    }
}

fn rule_list() -> IntentRule {
    intent_rule! {
        intent: Intent::List,
        confidence: 0.85,
        patterns: [
            r"(?i)(?:listele|göster|bul|ara|getir)\s+(.+)",
            r"(?i)(.+)\s+(?:listele|göster|bul|ara|getir)",
            r"(?i)(?:list|show|find|search|get)\s+(.+)",
            r"(?i)(?:tümünü|hepsini)\s+(?:göster|listele)",
        ],
    }
}

fn rule_update() -> IntentRule {
    intent_rule! {
        intent: Intent::Update,
        confidence: 0.9,
        patterns: [
            r"(?i)(?:güncelle|değiştir|düzenle)\s+(.+)",
            r"(?i)(.+)\s+(?:güncelle|değiştir|düzenle)",
            r"(?i)(?:update|modify|edit|change)\s+(.+)",
        ],
    }
}

fn rule_delete() -> IntentRule {
    intent_rule! {
        intent: Intent::Delete,
        confidence: 0.95,
        patterns: [
            r"(?i)(?:sil|kaldır|çıkar)\s+(.+)",
            r"(?i)(.+)\s+(?:sil|kaldır|çıkar)",
            r"(?i)(?:delete|remove)\s+(.+)",
        ],
    }
}

/// A bare "rapor" is enough: the trailing verb and subject are optional.
fn rule_report() -> IntentRule {
    intent_rule! {
        intent: Intent::Report,
        confidence: 0.8,
        patterns: [
            r"(?i)(?:rapor|analiz|istatistik|özet)\s*(?:al|çıkar|oluştur|göster)?\s*(.*)$",
            r"(?i)(.+)\s+(?:raporu|analizi|istatistiği|özeti)",
            r"(?i)(?:report|analysis|stats|summary)\s+(.+)",
        ],
    }
}

fn rule_navigate() -> IntentRule {
    intent_rule! {
        intent: Intent::Navigate,
        confidence: 0.7,
        patterns: [
            r"(?i)(?:git|aç|geç)\s+(.+)",
            r"(?i)(.+)\s+(?:sayfası|modülü|bölümü)(?:\s+aç)?",
            r"(?i)(?:go to|open|navigate to)\s+(.+)",
        ],
    }
}

fn rule_automate() -> IntentRule {
    intent_rule! {
        intent: Intent::Automate,
        confidence: 0.8,
        patterns: [
            r"(?i)(?:otomatik|toplu|hep birden)\s+(.+)",
            r"(?i)(.+)\s+(?:otomatik|toplu|hep birden)(?:\s+yap)?",
            r"(?i)(?:automate|bulk|batch)\s+(.+)",
        ],
    }
}

fn rule_export() -> IntentRule {
    intent_rule! {
        intent: Intent::Export,
        confidence: 0.9,
        patterns: [
            r"(?i)(?:dışa aktar|export|indir|çıkar)\s+(.+)",
            r"(?i)(.+)\s+(?:dışa aktar|export|indir|çıkar)",
        ],
    }
}

fn rule_notify() -> IntentRule {
    intent_rule! {
        intent: Intent::Notify,
        confidence: 0.85,
        patterns: [
            r"(?i)(?:bildir|gönder|mesaj|sms|email)\s+(.+)",
            r"(?i)(.+)\s+(?:bildir|gönder|mesaj gönder)",
            r"(?i)(?:notify|send|message)\s+(.+)",
        ],
    }
}

/// Command table in match order. Earlier intents shadow later ones: "çıkar"
/// reads as DELETE before EXPORT is tried.
pub(crate) fn get() -> Vec<IntentRule> {
    vec![
        rule_create(),
        rule_list(),
        rule_update(),
        rule_delete(),
        rule_report(),
        rule_navigate(),
        rule_automate(),
        rule_export(),
        rule_notify(),
    ]
}
