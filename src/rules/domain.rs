//! Module and operation lexicons.
//!
//! Each entry maps a tag to the keywords that select it. Detection walks the
//! table in order and returns the first tag with a keyword contained in the
//! normalized text, so ordering matters: "kişi" must come before "iş".

use crate::command::{Module, Operation};

/// Ordered `(tag, keywords)` table.
pub(crate) type Lexicon<T> = &'static [(T, &'static [&'static str])];

pub(crate) static MODULES: Lexicon<Module> = &[
    (Module::Beneficiaries, &["hak sahibi", "haksahibi", "beneficiary", "kişi", "muhtaç", "yardım alan"]),
    (Module::Donations, &["bağış", "donation", "para", "ödeme", "tahsilat", "gelir"]),
    (Module::Aid, &["yardım", "aid", "dağıtım", "distribution", "malzeme", "gıda", "nakdi"]),
    (Module::Meetings, &["toplantı", "meeting", "görüşme", "randevu", "buluşma"]),
    (Module::Tasks, &["görev", "task", "yapılacak", "iş", "atama", "assignment"]),
    (Module::Messages, &["mesaj", "message", "iletişim", "duyuru", "bilgilendirme", "haber"]),
    (Module::Scholarship, &["burs", "scholarship", "eğitim", "öğrenci", "okul", "üniversite"]),
    (Module::Fund, &["fon", "fund", "bütçe", "mali", "finansal", "muhasebe"]),
    (Module::System, &["sistem", "system", "kullanıcı", "user", "yetki", "permission", "ayar", "setting"]),
];

pub(crate) static OPERATIONS: Lexicon<Operation> = &[
    (Operation::Add, &["ekle", "oluştur", "yeni", "kaydet", "add", "create", "new", "save"]),
    (Operation::Edit, &["düzenle", "güncelle", "değiştir", "edit", "update", "modify", "change"]),
    (Operation::Delete, &["sil", "kaldır", "çıkar", "delete", "remove"]),
    (Operation::View, &["göster", "listele", "bul", "ara", "view", "show", "list", "find", "search"]),
    (Operation::Export, &["dışa aktar", "indir", "çıkar", "export", "download"]),
    (Operation::Send, &["gönder", "bildir", "ilet", "send", "notify"]),
    (Operation::Approve, &["onayla", "kabul et", "approve", "accept"]),
    (Operation::Reject, &["reddet", "geri çevir", "reject", "decline"]),
];
