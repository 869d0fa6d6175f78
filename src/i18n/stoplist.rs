//! Common UI phrases that are dropped from every optimized bundle.
//!
//! The front end ships these from a shared component dictionary, so
//! repeating them in each namespace only inflates the download.

use std::collections::HashSet;
use std::sync::OnceLock;

const COMMON_PHRASES: &[&str] = &[
    // Arabic
    "حفظ",
    "إلغاء",
    "تأكيد",
    "حذف",
    "تعديل",
    "إغلاق",
    "نعم",
    "لا",
    "موافق",
    "التالي",
    "السابق",
    "بحث",
    "تحميل...",
    // English
    "Save",
    "Cancel",
    "Confirm",
    "Delete",
    "Edit",
    "Close",
    "Yes",
    "No",
    "OK",
    "Next",
    "Previous",
    "Search",
    "Loading...",
];

static STOPLIST: OnceLock<HashSet<&'static str>> = OnceLock::new();

/// Whether `value` is a stop-listed common phrase (exact match).
pub fn is_common_phrase(value: &str) -> bool {
    STOPLIST
        .get_or_init(|| COMMON_PHRASES.iter().copied().collect())
        .contains(value)
}

/// The stop-listed phrases, in declaration order.
pub fn common_phrases() -> &'static [&'static str] {
    COMMON_PHRASES
}
