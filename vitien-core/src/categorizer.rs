//! Deterministic category matching over free-text descriptions.
//!
//! No AI involved — a special-case check, an ordered keyword table, and a
//! fuzzy name search cover the common phrasings; everything else falls into
//! the "khác" bucket when the user has one.

use crate::Category;

/// Fuel / vehicle / transport vocabulary routed straight to "di chuyển".
///
/// Checked before the keyword table on purpose: "xăng" contains the
/// substring "ăn" and would otherwise land in the food row.
const TRANSPORT_KEYWORDS: &[&str] = &[
    "xăng",
    "đổ xăng",
    "rửa xe",
    "sửa xe",
    "vá xe",
    "bơm xe",
    "thay nhớt",
    "bảo dưỡng xe",
    "gửi xe",
    "giữ xe",
    "grab",
    "taxi",
    "xe ôm",
    "xe buýt",
    "xe bus",
    "vé xe",
    "vé tàu",
    "vé máy bay",
    "tàu xe",
    "đi lại",
];

/// Category name → activity keywords, highest priority first.
/// Matching order is part of the contract, so this stays an ordered slice.
const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "ăn uống",
        &[
            "ăn", "uống", "cơm", "phở", "bún", "cháo", "bánh", "chè", "trà sữa", "cà phê", "cafe",
            "nước", "bia", "nhậu", "quán", "nhà hàng", "đồ ăn", "thức ăn", "sữa",
        ],
    ),
    (
        "mua sắm",
        &[
            "mua", "sắm", "quần áo", "áo", "quần", "giày", "dép", "túi", "mỹ phẩm", "siêu thị",
            "chợ", "shopee", "lazada", "tiki", "đồ dùng",
        ],
    ),
    (
        "giải trí",
        &[
            "phim", "game", "nhạc", "karaoke", "du lịch", "chơi", "netflix", "spotify", "sách",
            "truyện", "vé xem",
        ],
    ),
    (
        "di chuyển",
        &["xăng", "xe", "grab", "taxi", "vé", "tàu", "máy bay", "đi lại"],
    ),
    (
        "sức khỏe",
        &[
            "thuốc", "khám", "bệnh viện", "bác sĩ", "nha khoa", "gym", "thể dục", "vitamin",
        ],
    ),
    (
        "tiền lương",
        &["lương", "thưởng", "thu nhập", "phụ cấp", "trợ cấp"],
    ),
];

/// Minimum fuzzy similarity for a category name to count as a match.
const FUZZY_THRESHOLD: f64 = 0.3;

/// Resolve a description to a category from the caller's snapshot.
///
/// Deterministic and side-effect-free; `None` means the caller keeps the
/// transaction uncategorized, it never drops the line.
pub fn match_category<'a>(description: &str, categories: &'a [Category]) -> Option<&'a Category> {
    let desc = description.to_lowercase();

    if TRANSPORT_KEYWORDS.iter().any(|k| desc.contains(k)) {
        if let Some(cat) = find_by_name(categories, "di chuyển") {
            return Some(cat);
        }
    }

    for (name, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|k| desc.contains(k)) {
            if let Some(cat) = find_by_name(categories, name) {
                return Some(cat);
            }
        }
    }

    if let Some(cat) = fuzzy_match(&desc, categories) {
        return Some(cat);
    }

    find_by_name(categories, "khác")
}

fn find_by_name<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
    categories.iter().find(|c| c.name.to_lowercase() == name)
}

fn fuzzy_match<'a>(desc: &str, categories: &'a [Category]) -> Option<&'a Category> {
    let mut best: Option<(f64, &Category)> = None;
    for cat in categories {
        let score = similarity(desc, &cat.name.to_lowercase());
        if score >= FUZZY_THRESHOLD && best.is_none_or(|(b, _)| score > b) {
            best = Some((score, cat));
        }
    }
    best.map(|(_, cat)| cat)
}

/// Best token-window match of `needle` anywhere in `haystack`.
/// 1.0 is exact, 0.0 shares nothing; position inside the text is irrelevant.
fn similarity(haystack: &str, needle: &str) -> f64 {
    let tokens: Vec<&str> = haystack.split_whitespace().collect();
    if tokens.is_empty() || needle.is_empty() {
        return 0.0;
    }
    let width = needle.split_whitespace().count().max(1);
    let windows = if tokens.len() > width {
        tokens.len() - width + 1
    } else {
        1
    };

    let mut best = 0.0f64;
    for start in 0..windows {
        let end = (start + width).min(tokens.len());
        let window = tokens[start..end].join(" ");
        best = best.max(levenshtein_ratio(&window, needle));
    }
    best
}

fn levenshtein_ratio(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / longest as f64
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut row = vec![0usize; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitute = prev[j] + usize::from(ca != cb);
            row[j + 1] = substitute.min(prev[j + 1] + 1).min(row[j] + 1);
        }
        std::mem::swap(&mut prev, &mut row);
    }
    prev[b.len()]
}
