use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// User record as served by the users service. Fields stay untyped JSON so a
/// missing or mistyped field surfaces as a validation error naming the field,
/// rather than failing the whole decode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPayload {
    pub id: Option<Value>,
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub address: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPayload {
    pub id: Option<Value>,
    pub title: Option<Value>,
    pub category: Option<Value>,
    pub price: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub city: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub category: Category,
    pub price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Electronics,
    Jewelery,
    MensClothing,
    WomensClothing,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Electronics,
        Category::Jewelery,
        Category::MensClothing,
        Category::WomensClothing,
    ];

    /// Label used by the products service.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Jewelery => "jewelery",
            Category::MensClothing => "men's clothing",
            Category::WomensClothing => "women's clothing",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Locally generated CPF-style placeholder. Has no validity outside this program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentNumber {
    digits: [u8; 11],
}

impl DocumentNumber {
    pub(crate) fn from_digits(digits: [u8; 11]) -> Self {
        Self { digits }
    }

    pub fn last_digit(&self) -> u8 {
        self.digits[10]
    }
}

impl fmt::Display for DocumentNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, digit) in self.digits.iter().enumerate() {
            match i {
                3 | 6 => f.write_str(".")?,
                9 => f.write_str("-")?,
                _ => {}
            }
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approved,
    Blocked,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Approved => f.write_str("APPROVED"),
            Decision::Blocked => f.write_str("BLOCKED"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskFactor {
    pub reason: String,
    pub points: u32,
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.points > 0 {
            write!(f, "{} (+{})", self.reason, self.points)
        } else {
            f.write_str(&self.reason)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskAssessment {
    pub score: u8,
    pub decision: Decision,
    pub factors: Vec<RiskFactor>,
}

impl RiskAssessment {
    pub fn is_blocked(&self) -> bool {
        self.decision == Decision::Blocked
    }
}
