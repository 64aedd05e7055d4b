//! Static translation tables for Thai and English.
//!
//! Lookups never fail: a key missing from the active table echoes back, so an
//! incomplete translation shows its key instead of breaking the page.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use crate::state::language::Language;

const TH: &[(&str, &str)] = &[
    ("nav.logo", "เว็บไซต์"),
    ("nav.home", "หน้าแรก"),
    ("nav.about", "เกี่ยวกับ"),
    ("nav.services", "บริการ"),
    ("nav.contact", "ติดต่อ"),
    ("theme.light", "โหมดสว่าง"),
    ("theme.dark", "โหมดมืด"),
    ("lang.th", "ไทย"),
    ("lang.en", "English"),
    ("page.welcome", "ยินดีต้อนรับ"),
    ("page.description", "นี่คือหน้าหลักของเว็บไซต์"),
    ("page.getStarted", "เริ่มต้นใช้งาน"),
    ("page.learnMore", "เรียนรู้เพิ่มเติมเกี่ยวกับเราและสิ่งที่เราทำ"),
    ("page.contact", "ติดต่อเราหากคุณมีคำถาม"),
    ("page.contactDescription", "ติดต่อเราหากคุณมีคำถาม"),
    ("page.contactButton", "ติดต่อเรา"),
    ("page.contactButtonDescription", "ติดต่อเราหากคุณมีคำถาม"),
];

const EN: &[(&str, &str)] = &[
    ("nav.logo", "Website"),
    ("nav.home", "Home"),
    ("nav.about", "About"),
    ("nav.services", "Services"),
    ("nav.contact", "Contact"),
    ("theme.light", "Light Mode"),
    ("theme.dark", "Dark Mode"),
    ("lang.th", "ไทย"),
    ("lang.en", "English"),
    ("page.welcome", "Welcome"),
    ("page.description", "This is the main page of the website"),
    ("page.getStarted", "Get Started"),
    ("page.learnMore", "Learn more about us and what we do"),
    ("page.contact", "Contact us if you have any questions"),
    ("page.contactDescription", "Contact us if you have any questions"),
    ("page.contactButton", "Contact us"),
    ("page.contactButtonDescription", "Contact us if you have any questions"),
];

fn table(language: Language) -> &'static [(&'static str, &'static str)] {
    match language {
        Language::Th => TH,
        Language::En => EN,
    }
}

/// Mapped string for `key`, if the language's table has one.
#[must_use]
pub fn lookup(language: Language, key: &str) -> Option<&'static str> {
    table(language).iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Mapped string for `key`, or `key` itself when unmapped.
#[must_use]
pub fn translate<'a>(language: Language, key: &'a str) -> &'a str {
    lookup(language, key).unwrap_or(key)
}
