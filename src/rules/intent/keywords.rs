//! Keyword-scoring table.
//!
//! Every whitespace token of the normalized text that appears in a rule's
//! keyword list adds the rule's boosts. Extracted entities then add their own
//! boosts by kind. A token may feed several intents ("listele" counts for READ
//! and SEARCH, "çıkar" for DELETE and EXPORT).

use crate::EntityKind;
use crate::command::Intent;

#[derive(Debug)]
pub(crate) struct KeywordRule {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub boosts: &'static [(Intent, f64)],
}

#[derive(Debug)]
pub(crate) struct EntityBoost {
    pub kind: EntityKind,
    pub boosts: &'static [(Intent, f64)],
}

#[derive(Debug)]
pub(crate) struct KeywordTable {
    /// Scored intents; the order breaks ties.
    pub intents: &'static [Intent],
    pub words: &'static [KeywordRule],
    pub entity_boosts: &'static [EntityBoost],
}

pub(crate) static DEFAULT: KeywordTable = KeywordTable {
    intents: &[
        Intent::Create,
        Intent::Read,
        Intent::Update,
        Intent::Delete,
        Intent::Search,
        Intent::Report,
        Intent::Navigate,
        Intent::Export,
        Intent::Notify,
    ],
    words: &[
        KeywordRule {
            name: "create",
            keywords: &["ekle", "oluştur", "yap", "kaydet", "gir", "add", "create", "save", "new", "yeni"],
            boosts: &[(Intent::Create, 2.0)],
        },
        KeywordRule {
            name: "read",
            keywords: &["göster", "listele", "bul", "ara", "getir", "show", "list", "find", "search", "get"],
            boosts: &[(Intent::Read, 2.0), (Intent::Search, 1.5)],
        },
        KeywordRule {
            name: "update",
            keywords: &["güncelle", "değiştir", "düzenle", "revize", "update", "edit", "modify", "change"],
            boosts: &[(Intent::Update, 2.0)],
        },
        KeywordRule {
            name: "delete",
            keywords: &["sil", "kaldır", "çıkar", "iptal", "delete", "remove", "cancel"],
            boosts: &[(Intent::Delete, 2.0)],
        },
        KeywordRule {
            name: "report",
            keywords: &["rapor", "analiz", "özet", "istatistik", "report", "analysis", "summary", "stats"],
            boosts: &[(Intent::Report, 2.0)],
        },
        KeywordRule {
            name: "navigate",
            keywords: &["git", "aç", "geç", "go", "open", "navigate"],
            boosts: &[(Intent::Navigate, 1.5)],
        },
        KeywordRule {
            name: "export",
            keywords: &["dışa", "aktar", "indir", "çıkar", "export", "download"],
            boosts: &[(Intent::Export, 2.0)],
        },
        KeywordRule {
            name: "notify",
            keywords: &["gönder", "bildir", "ilet", "send", "notify", "mesaj"],
            boosts: &[(Intent::Notify, 2.0)],
        },
    ],
    entity_boosts: &[
        EntityBoost { kind: EntityKind::Person, boosts: &[(Intent::Search, 0.5), (Intent::Update, 0.5)] },
        EntityBoost { kind: EntityKind::Date, boosts: &[(Intent::Report, 0.5), (Intent::Search, 0.5)] },
        EntityBoost { kind: EntityKind::Money, boosts: &[(Intent::Create, 0.5), (Intent::Report, 0.5)] },
    ],
};
