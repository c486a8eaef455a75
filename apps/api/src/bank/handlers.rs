use axum::Json;
use serde::Serialize;

use crate::bank::{self, Category};

/// Company catalog entry for the interview setup page.
#[derive(Serialize)]
pub struct CompanySummary {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    pub logo: &'static str,
    pub technical_questions: usize,
    pub hr_questions: usize,
}

/// GET /api/v1/companies
pub async fn handle_list_companies() -> Json<Vec<CompanySummary>> {
    let companies = bank::COMPANIES
        .iter()
        .map(|c| CompanySummary {
            id: c.id,
            name: c.name,
            color: c.color,
            logo: c.logo,
            technical_questions: bank::questions_for(c.id, Category::Technical).len(),
            hr_questions: bank::questions_for(c.id, Category::Hr).len(),
        })
        .collect();
    Json(companies)
}
