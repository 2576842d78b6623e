use crate::core::{document, scorer, validator};
use crate::domain::model::{DocumentNumber, Product, RiskAssessment, User};
use crate::domain::ports::RecordSource;
use crate::utils::error::Result;
use chrono::{DateTime, Local};

/// Everything produced by one check, handed to the reporter.
#[derive(Debug, Clone)]
pub struct IntegrationReport {
    pub user: User,
    pub product: Product,
    pub document: DocumentNumber,
    pub assessment: RiskAssessment,
    pub checked_at: DateTime<Local>,
}

pub struct IntegrationEngine<S: RecordSource> {
    source: S,
}

impl<S: RecordSource> IntegrationEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch, validate and score one (user, product) pair. The first error
    /// aborts the check; nothing is scored for a partial pair.
    pub async fn run(&self, user_id: i64, product_id: i64) -> Result<IntegrationReport> {
        tracing::info!(user_id, product_id, "Starting integration check");

        let (user_payload, product_payload) = tokio::try_join!(
            self.source.fetch_user(user_id),
            self.source.fetch_product(product_id)
        )?;

        let user = validator::validate_user(user_id, user_payload)?;
        let product = validator::validate_product(product_id, product_payload)?;
        tracing::debug!(?user, ?product, "Records validated");

        let document = document::generate_for_user(user.id);
        let assessment = scorer::assess(&user, &product, &document);

        if assessment.is_blocked() {
            tracing::warn!(
                user_id,
                product_id,
                score = assessment.score,
                "Integration blocked"
            );
        } else {
            tracing::info!(
                user_id,
                product_id,
                score = assessment.score,
                "Integration approved"
            );
        }

        Ok(IntegrationReport {
            user,
            product,
            document,
            assessment,
            checked_at: Local::now(),
        })
    }
}
