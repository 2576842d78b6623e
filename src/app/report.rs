use crate::core::engine::IntegrationReport;
use crate::core::scorer::BLOCK_THRESHOLD;
use crate::domain::model::Decision;
use std::fmt;

const RULE_WIDTH: usize = 80;

pub fn banner(users_endpoint: &str, products_endpoint: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!(
        "{rule}\nAPI INTEGRATION CHECK with simulated fraud screening\n{rule}\n\
         Users    -> {users_endpoint}\n\
         Products -> {products_endpoint}\n\
         Block threshold = {BLOCK_THRESHOLD}\n{rule}"
    )
}

/// Fixed-layout summary of one check.
pub struct ReportView<'a>(pub &'a IntegrationReport);

impl fmt::Display for ReportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let user = &report.user;
        let product = &report.product;
        let assessment = &report.assessment;

        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(
            f,
            "Checked at: {}",
            report.checked_at.format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(f, "User:     {} | {}", user.name, user.email)?;
        if let Some(city) = &user.city {
            writeln!(f, "City:     {}", city)?;
        }
        writeln!(f, "Product:  {}", product.title)?;
        writeln!(
            f,
            "Price:    {:.2} | Category: {}",
            product.price, product.category
        )?;
        writeln!(f, "Document: {}", report.document)?;
        writeln!(f)?;
        writeln!(f, "Risk score: {}/100", assessment.score)?;
        if !assessment.factors.is_empty() {
            let reasons: Vec<String> =
                assessment.factors.iter().map(ToString::to_string).collect();
            writeln!(f, "Reasons: {}", reasons.join(", "))?;
        }
        writeln!(f)?;
        match assessment.decision {
            Decision::Blocked => writeln!(
                f,
                "Integration {}: risk at or above threshold ({}).",
                assessment.decision, BLOCK_THRESHOLD
            )?,
            Decision::Approved => writeln!(f, "Integration {}.", assessment.decision)?,
        }
        write!(f, "{}", "-".repeat(RULE_WIDTH))
    }
}

pub fn render(report: &IntegrationReport) -> String {
    ReportView(report).to_string()
}
