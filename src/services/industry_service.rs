// src/services/industry_service.rs

use std::sync::Arc;

use crate::{
    common::{error::AppError, slug::slug_code},
    db::IndustryRepository,
    models::industry::{CreateIndustryPayload, Industry, IndustryCompanies},
};

#[derive(Clone)]
pub struct IndustryService {
    repo: Arc<dyn IndustryRepository>,
}

impl IndustryService {
    pub fn new(repo: Arc<dyn IndustryRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_industries(&self) -> Result<Vec<IndustryCompanies>, AppError> {
        Ok(self.repo.list_industries().await?)
    }

    pub async fn get_industry(&self, code: &str) -> Result<IndustryCompanies, AppError> {
        self.repo
            .find_industry(code)
            .await?
            .ok_or_else(|| AppError::record_not_found(code))
    }

    pub async fn create_industry(&self, mut input: CreateIndustryPayload) -> Result<Industry, AppError> {
        input.code = slug_code(&input.code)?;

        let industry = self.repo.create_industry(&input).await?;
        tracing::info!(code = %industry.code, "industry created");

        Ok(industry)
    }

    pub async fn delete_industry(&self, code: &str) -> Result<(), AppError> {
        if !self.repo.delete_industry(code).await? {
            return Err(AppError::record_not_found(code));
        }
        tracing::info!(code, "industry deleted");
        Ok(())
    }
}
