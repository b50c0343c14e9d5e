use chrono::NaiveDate;
use vitien_core::{BatchCreateRequest, Category, TransactionType};
use vitien_parse::BatchParser;

fn categories() -> Vec<Category> {
    vec![
        Category::new("cat-an-uong", "Ăn uống"),
        Category::new("cat-mua-sam", "Mua sắm"),
        Category::new("cat-giai-tri", "Giải trí"),
        Category::new("cat-di-chuyen", "Di chuyển"),
        Category::new("cat-suc-khoe", "Sức khỏe"),
        Category::new("cat-luong", "Tiền lương"),
        Category::new("cat-khac", "Khác"),
    ]
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
}

/// Typed and dictated lines mixed together, the way a review screen gets
/// them: digits with suffixes, spelled-out numerals, an explicit date, a
/// line with nothing extractable.
#[test]
fn test_mixed_batch_end_to_end() {
    let _ = env_logger::builder().is_test(true).try_init();

    let input = "\
chi 50 nghìn ăn sáng
thu 5 triệu tiền lương 15/03
một triệu hai trăm nghìn chi sửa xe
hôm nay trời đẹp quá
200k đi chợ mua rau";

    let parser = BatchParser::new().unwrap();
    let txns = parser.parse_at(input, &categories(), today());

    // the small-talk line is dropped, order preserved
    assert_eq!(txns.len(), 4);

    assert_eq!(txns[0].kind, TransactionType::Expense);
    assert_eq!(txns[0].amount, 50_000.0);
    assert_eq!(txns[0].description, "ăn sáng");
    assert_eq!(txns[0].date, today());
    assert_eq!(txns[0].category.as_ref().unwrap().name, "Ăn uống");

    assert_eq!(txns[1].kind, TransactionType::Income);
    assert_eq!(txns[1].amount, 5_000_000.0);
    assert_eq!(txns[1].date, NaiveDate::from_ymd_opt(2026, 3, 15).unwrap());
    assert_eq!(txns[1].category.as_ref().unwrap().name, "Tiền lương");

    assert_eq!(txns[2].amount, 1_200_000.0);
    assert_eq!(txns[2].description, "sửa xe");
    assert_eq!(txns[2].category.as_ref().unwrap().name, "Di chuyển");

    assert_eq!(txns[3].amount, 200_000.0);
    assert_eq!(txns[3].kind, TransactionType::Expense);
}

#[test]
fn test_batch_request_wire_shape() {
    let parser = BatchParser::new().unwrap();
    let txns = parser.parse_at("chi 50 nghìn ăn sáng", &categories(), today());
    let request = BatchCreateRequest::new(&txns);

    let json = serde_json::to_value(&request).unwrap();
    let entry = &json["transactions"][0];
    assert_eq!(entry["type"], "EXPENSE");
    assert_eq!(entry["amount"], 50_000.0);
    assert_eq!(entry["description"], "ăn sáng");
    assert_eq!(entry["date"], "2026-08-06");
    assert_eq!(entry["categoryId"], "cat-an-uong");
}

#[test]
fn test_lines_parse_independently() {
    let parser = BatchParser::new().unwrap();
    let cats = categories();

    let together = parser.parse_at("mua thuốc 30k\ngrab về nhà 45k", &cats, today());
    let first = parser.parse_at("mua thuốc 30k", &cats, today());
    let second = parser.parse_at("grab về nhà 45k", &cats, today());

    assert_eq!(together.len(), 2);
    assert_eq!(together[0], first[0]);
    assert_eq!(together[1], second[0]);
}
