//! Additive fraud-risk heuristic.
//!
//! Every rule adds a fixed number of points when its condition holds; the sum
//! starts at [`BASE_SCORE`] and is clamped to `0..=100`. A score at or above
//! [`BLOCK_THRESHOLD`] blocks the integration.
//!
//! | Condition                                              | Points |
//! |--------------------------------------------------------|--------|
//! | base score                                             | 10     |
//! | email has an invalid format                            | 40     |
//! | email domain is a disposable-mail provider             | 50     |
//! | email domain longer than 30 characters                 | 10     |
//! | document number ends in an odd digit                   | 25     |
//! | category electronics                                   | 30     |
//! | category jewelery                                      | 40     |
//! | category men's / women's clothing                      | 10     |
//! | price >= 500                                           | 35     |
//! | price >= 100                                           | 20     |
//! | price >= 50                                            | 10     |
//! | name contains unusual characters                       | 8      |
//! | first token of the email local part absent from name   | 5      |

use crate::domain::model::{
    Category, Decision, DocumentNumber, Product, RiskAssessment, RiskFactor, User,
};
use regex::Regex;
use std::sync::OnceLock;

pub const BASE_SCORE: u32 = 10;
pub const BLOCK_THRESHOLD: u8 = 70;
pub const MAX_SCORE: u32 = 100;

pub const INVALID_EMAIL_POINTS: u32 = 40;
pub const DISPOSABLE_DOMAIN_POINTS: u32 = 50;
pub const LONG_DOMAIN_POINTS: u32 = 10;
pub const LONG_DOMAIN_LEN: usize = 30;
pub const ODD_DOCUMENT_POINTS: u32 = 25;
pub const UNUSUAL_NAME_POINTS: u32 = 8;
pub const NAME_EMAIL_MISMATCH_POINTS: u32 = 5;

pub const DISPOSABLE_DOMAINS: [&str; 4] = [
    "mailinator.com",
    "tempmail.com",
    "10minutemail.com",
    "disposablemail.com",
];

/// Price tiers, highest first. The first tier the price reaches applies.
pub const PRICE_TIERS: [(f64, u32, &str); 3] = [
    (500.0, 35, "very high price"),
    (100.0, 20, "high price"),
    (50.0, 10, "moderate price"),
];

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$")
            .expect("email pattern is valid")
    })
}

fn unusual_name_char_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-zÀ-ÿ \-.]").expect("name pattern is valid"))
}

pub fn category_points(category: Category) -> u32 {
    match category {
        Category::Electronics => 30,
        Category::Jewelery => 40,
        Category::MensClothing | Category::WomensClothing => 10,
    }
}

impl Decision {
    pub fn from_score(score: u8) -> Self {
        if score >= BLOCK_THRESHOLD {
            Decision::Blocked
        } else {
            Decision::Approved
        }
    }
}

#[derive(Default)]
struct Tally {
    total: u32,
    factors: Vec<RiskFactor>,
}

impl Tally {
    fn add(&mut self, points: u32, reason: impl Into<String>) {
        if points == 0 {
            return;
        }
        self.total += points;
        self.factors.push(RiskFactor {
            reason: reason.into(),
            points,
        });
    }
}

/// Scores a validated pair. Pure: equal inputs always give equal assessments.
pub fn assess(user: &User, product: &Product, document: &DocumentNumber) -> RiskAssessment {
    let mut tally = Tally {
        total: BASE_SCORE,
        ..Tally::default()
    };

    score_email(&mut tally, &user.email);

    if document.last_digit() % 2 == 1 {
        tally.add(ODD_DOCUMENT_POINTS, "synthetic document ends in an odd digit");
    }

    tally.add(
        category_points(product.category),
        format!("category {}", product.category),
    );

    if let Some((_, points, reason)) = PRICE_TIERS
        .iter()
        .find(|(floor, _, _)| product.price >= *floor)
    {
        tally.add(*points, *reason);
    }

    if unusual_name_char_regex().is_match(&user.name) {
        tally.add(UNUSUAL_NAME_POINTS, "user name contains unusual characters");
    }

    if name_email_mismatch(&user.name, &user.email) {
        tally.add(
            NAME_EMAIL_MISMATCH_POINTS,
            "name and email local part do not match",
        );
    }

    let score = tally.total.min(MAX_SCORE);
    if score != tally.total {
        tally.factors.push(RiskFactor {
            reason: "score clamped to 0-100 range".to_string(),
            points: 0,
        });
    }

    let score = score as u8;
    RiskAssessment {
        score,
        decision: Decision::from_score(score),
        factors: tally.factors,
    }
}

fn score_email(tally: &mut Tally, email: &str) {
    if !email_regex().is_match(email) {
        tally.add(INVALID_EMAIL_POINTS, "invalid email format");
        return;
    }

    let domain = match email.split_once('@') {
        Some((_, domain)) => domain.to_lowercase(),
        None => return,
    };

    if DISPOSABLE_DOMAINS.contains(&domain.as_str()) {
        tally.add(
            DISPOSABLE_DOMAIN_POINTS,
            format!("disposable email domain ({})", domain),
        );
    } else if domain.len() > LONG_DOMAIN_LEN {
        tally.add(LONG_DOMAIN_POINTS, "unusually long email domain");
    }
}

fn name_email_mismatch(name: &str, email: &str) -> bool {
    let Some((local, _)) = email.split_once('@') else {
        return false;
    };
    let token = local.split('.').next().unwrap_or_default().to_lowercase();
    let name = name.replace('.', " ").to_lowercase();
    !name.contains(&token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::document::with_check_digits;

    // 000.000.006-04
    const EVEN_ENDING_BASE: [u8; 9] = [0, 0, 0, 0, 0, 0, 0, 0, 6];
    // 111.444.777-35
    const ODD_ENDING_BASE: [u8; 9] = [1, 1, 1, 4, 4, 4, 7, 7, 7];

    fn even_document() -> DocumentNumber {
        let doc = with_check_digits(EVEN_ENDING_BASE);
        assert_eq!(doc.last_digit() % 2, 0);
        doc
    }

    fn odd_document() -> DocumentNumber {
        let doc = with_check_digits(ODD_ENDING_BASE);
        assert_eq!(doc.last_digit() % 2, 1);
        doc
    }

    fn user(name: &str, email: &str) -> User {
        User {
            id: 4,
            name: name.to_string(),
            email: email.to_string(),
            city: None,
        }
    }

    fn product(category: Category, price: f64) -> Product {
        Product {
            id: 2,
            title: "Mens Casual Premium Slim Fit T-Shirts".to_string(),
            category,
            price,
        }
    }

    fn reasons(assessment: &RiskAssessment) -> Vec<&str> {
        assessment.factors.iter().map(|f| f.reason.as_str()).collect()
    }

    fn patricia() -> User {
        user("Patricia Lebsack", "Julianne.OConner@kory.org")
    }

    #[test]
    fn test_reference_pair_is_approved() {
        let shirt = product(Category::MensClothing, 22.3);

        let even = assess(&patricia(), &shirt, &even_document());
        assert_eq!(even.score, 25);
        assert_eq!(even.decision, Decision::Approved);
        assert_eq!(
            reasons(&even),
            vec![
                "category men's clothing",
                "name and email local part do not match"
            ]
        );

        let odd = assess(&patricia(), &shirt, &odd_document());
        assert_eq!(odd.score, 50);
        assert_eq!(odd.decision, Decision::Approved);
    }

    #[test]
    fn test_disposable_domain_and_expensive_jewelery_block() {
        let assessment = assess(
            &user("Ann Smith", "ann@Mailinator.com"),
            &product(Category::Jewelery, 695.0),
            &even_document(),
        );
        // 10 + 50 + 40 + 35
        assert_eq!(assessment.score, 100);
        assert!(assessment.is_blocked());
        assert_eq!(
            assessment.factors.last().unwrap().reason,
            "score clamped to 0-100 range"
        );
    }

    #[test]
    fn test_invalid_email_scores_without_domain_rules() {
        let assessment = assess(
            &user("Ann Smith", "ann at example"),
            &product(Category::MensClothing, 10.0),
            &even_document(),
        );
        // 10 + 40 + 10; no '@' so the mismatch rule does not apply
        assert_eq!(assessment.score, 60);
        assert_eq!(reasons(&assessment)[0], "invalid email format");
    }

    #[test]
    fn test_long_domain() {
        let assessment = assess(
            &user("Ann Smith", "ann@a-really-long-corporate-domain-name.com"),
            &product(Category::WomensClothing, 15.99),
            &even_document(),
        );
        assert_eq!(assessment.score, 10 + 10 + 10);
        assert!(reasons(&assessment).contains(&"unusually long email domain"));
    }

    #[test]
    fn test_price_tiers() {
        let cases = [
            (49.99, 0),
            (50.0, 10),
            (99.99, 10),
            (100.0, 20),
            (499.0, 20),
            (500.0, 35),
        ];
        for (price, points) in cases {
            let assessment = assess(
                &user("Ann Smith", "ann@example.com"),
                &product(Category::MensClothing, price),
                &even_document(),
            );
            assert_eq!(
                u32::from(assessment.score),
                BASE_SCORE + 10 + points,
                "price {}",
                price
            );
        }
    }

    #[test]
    fn test_unusual_name_characters() {
        let plain = assess(
            &user("Mrs. Dennis Schulist", "dennis@example.com"),
            &product(Category::MensClothing, 10.0),
            &even_document(),
        );
        assert_eq!(plain.score, 20);

        let accented = assess(
            &user("José Müller-Lüdenscheidt", "jose@example.com"),
            &product(Category::MensClothing, 10.0),
            &even_document(),
        );
        assert!(!reasons(&accented).contains(&"user name contains unusual characters"));

        let digits = assess(
            &user("Ann Smith 2", "ann@example.com"),
            &product(Category::MensClothing, 10.0),
            &even_document(),
        );
        assert_eq!(digits.score, 20 + UNUSUAL_NAME_POINTS as u8);
    }

    #[test]
    fn test_threshold_boundary() {
        assert_eq!(Decision::from_score(69), Decision::Approved);
        assert_eq!(Decision::from_score(70), Decision::Blocked);
        assert_eq!(Decision::from_score(100), Decision::Blocked);
        assert_eq!(Decision::from_score(0), Decision::Approved);
    }

    #[test]
    fn test_score_always_in_range_and_consistent_with_decision() {
        let emails = [
            "ann@example.com",
            "bad email",
            "x@tempmail.com",
            "Julianne.OConner@kory.org",
        ];
        let names = ["Ann Smith", "Patricia Lebsack", "R2-D2"];
        let prices = [0.01, 55.0, 109.95, 999.99];
        let documents = [even_document(), odd_document()];

        for email in emails {
            for name in names {
                for category in Category::ALL {
                    for price in prices {
                        for document in &documents {
                            let u = user(name, email);
                            let p = product(category, price);
                            let a = assess(&u, &p, document);
                            assert!(a.score <= 100);
                            assert_eq!(a.score >= BLOCK_THRESHOLD, a.is_blocked());
                            assert_eq!(a, assess(&u, &p, document));
                        }
                    }
                }
            }
        }
    }
}
