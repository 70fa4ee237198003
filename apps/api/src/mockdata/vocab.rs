//! Shared word pools for synthesised people and organisations.

use rand::seq::SliceRandom;
use rand::Rng;

const FIRST_NAMES_EN: &[&str] = &[
    "Ahmed", "Mohammed", "Omar", "Khalid", "Faisal", "Yousef", "Saad", "Abdullah", "Fahad",
    "Nasser", "Sara", "Noura", "Reem", "Lama", "Hessa", "Aisha", "Maha", "Dana", "James",
    "Priya", "Ravi", "Maria", "John", "Fatima", "Layla", "Hassan", "Tariq", "Ziad", "Rana",
    "Joud",
];

const LAST_NAMES_EN: &[&str] = &[
    "Al-Farsi", "Al-Qahtani", "Al-Otaibi", "Al-Ghamdi", "Al-Zahrani", "Al-Harbi", "Al-Shehri",
    "Al-Dosari", "Al-Mutairi", "Al-Shammari", "Al-Anazi", "Al-Subaie", "Haddad", "Nair",
    "Fernandes", "Khan", "Smith", "Rahman", "Siddiqui", "Mansour",
];

const FIRST_NAMES_AR: &[&str] = &[
    "أحمد", "محمد", "عمر", "خالد", "فيصل", "يوسف", "سعد", "عبدالله", "فهد", "ناصر", "سارة",
    "نورة", "ريم", "لمى", "حصة", "عائشة", "مها", "دانة", "فاطمة", "ليلى", "حسن", "طارق",
];

const LAST_NAMES_AR: &[&str] = &[
    "الفارسي", "القحطاني", "العتيبي", "الغامدي", "الزهراني", "الحربي", "الشهري", "الدوسري",
    "المطيري", "الشمري", "العنزي", "السبيعي", "المنصور", "الحداد",
];

const COMPANY_PREFIXES: &[&str] = &[
    "Al", "Saudi", "Gulf", "Arabian", "Najd", "Red Sea", "Desert", "Vision", "Kingdom",
    "Peninsula", "Eastern", "Hijaz", "Green", "United", "National", "Future",
];

const COMPANY_CORES: &[&str] = &[
    "Noor", "Falcon", "Oasis", "Palm", "Horizon", "Summit", "Pearl", "Crescent", "Dune",
    "Star", "Bridge", "Harbor", "Cedar", "Atlas", "Unity", "Zenith", "Nakheel", "Rawabi",
    "Sahara", "Waha",
];

const COMPANY_SUFFIXES: &[&str] = &[
    "Contracting Co.", "Holding", "Group", "Trading Est.", "Industries", "Logistics",
    "Technologies", "Services", "Development Co.", "Solutions", "Partners", "Ventures",
];

/// Uniform pick from a static pool. Pools are non-empty constants.
pub fn choose<'a, R: Rng + ?Sized>(rng: &mut R, pool: &'a [&'a str]) -> &'a str {
    pool.choose(rng).copied().unwrap_or_default()
}

pub fn english_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{} {}", choose(rng, FIRST_NAMES_EN), choose(rng, LAST_NAMES_EN))
}

pub fn arabic_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{} {}", choose(rng, FIRST_NAMES_AR), choose(rng, LAST_NAMES_AR))
}

pub fn company_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{} {} {}",
        choose(rng, COMPANY_PREFIXES),
        choose(rng, COMPANY_CORES),
        choose(rng, COMPANY_SUFFIXES)
    )
}

/// `count` distinct company names. A numeric branch suffix is appended once
/// the word pools start repeating.
pub fn unique_company_names<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<String> {
    let mut seen = std::collections::HashSet::with_capacity(count);
    let mut names = Vec::with_capacity(count);
    while names.len() < count {
        let mut name = company_name(rng);
        if seen.contains(&name) {
            name = format!("{name} {}", names.len() + 1);
        }
        if seen.insert(name.clone()) {
            names.push(name);
        }
    }
    names
}
