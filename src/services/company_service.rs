// src/services/company_service.rs

use std::sync::Arc;

use crate::{
    common::{error::AppError, slug::slug_code},
    db::{
        store::{COMPANIES_INDUSTRIES_COMP_FKEY, COMPANIES_INDUSTRIES_IND_FKEY},
        CompanyRepository, StoreError,
    },
    models::company::{
        Company, CompanyDetail, CompanyIndustries, CompanySummary, CreateCompanyPayload,
        UpdateCompanyPayload,
    },
};

#[derive(Clone)]
pub struct CompanyService {
    repo: Arc<dyn CompanyRepository>,
}

impl CompanyService {
    pub fn new(repo: Arc<dyn CompanyRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_companies(&self) -> Result<Vec<CompanySummary>, AppError> {
        Ok(self.repo.list_companies().await?)
    }

    pub async fn get_company(&self, code: &str) -> Result<CompanyDetail, AppError> {
        self.repo
            .find_company(code)
            .await?
            .ok_or_else(|| AppError::record_not_found(code))
    }

    /// The code is stored in slug form; a clash with an existing code or name
    /// surfaces as a store error.
    pub async fn create_company(&self, mut input: CreateCompanyPayload) -> Result<Company, AppError> {
        input.code = slug_code(&input.code)?;

        let company = self.repo.create_company(&input).await?;
        tracing::info!(code = %company.code, "company created");

        Ok(company)
    }

    /// An unknown code is a 404 whether or not a body was sent.
    pub async fn update_company(
        &self,
        code: &str,
        input: Option<UpdateCompanyPayload>,
    ) -> Result<Company, AppError> {
        let Some(input) = input else {
            self.get_company(code).await?;
            return Err(AppError::BadRequest(
                "Request body must be JSON with a name".into(),
            ));
        };

        self.repo
            .update_company(code, &input)
            .await?
            .ok_or_else(|| AppError::record_not_found(code))
    }

    /// Associates an industry with a company.
    ///
    /// A missing company or industry is a 404 naming which side is missing;
    /// an association that already exists is a 400.
    pub async fn add_industry(
        &self,
        code: &str,
        ind_code: &str,
    ) -> Result<CompanyIndustries, AppError> {
        match self.repo.add_industry(code, ind_code).await {
            Ok(company) => {
                tracing::info!(code, ind_code, "industry added to company");
                Ok(company)
            }
            Err(StoreError::ForeignKeyViolation { constraint })
                if constraint == COMPANIES_INDUSTRIES_IND_FKEY =>
            {
                Err(AppError::NotFound("Could not find industry".into()))
            }
            Err(StoreError::ForeignKeyViolation { constraint })
                if constraint == COMPANIES_INDUSTRIES_COMP_FKEY =>
            {
                Err(AppError::NotFound("Could not find company".into()))
            }
            Err(StoreError::UniqueViolation { .. }) => Err(AppError::BadRequest(
                "The industry has already been added to this company.".into(),
            )),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn delete_company(&self, code: &str) -> Result<(), AppError> {
        if !self.repo.delete_company(code).await? {
            return Err(AppError::record_not_found(code));
        }
        tracing::info!(code, "company deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{IndustryRepository, MemoryStore};
    use crate::models::industry::CreateIndustryPayload;
    use axum::http::StatusCode;

    async fn seeded() -> (MemoryStore, CompanyService) {
        let store = MemoryStore::new();
        let service = CompanyService::new(Arc::new(store.clone()));
        service
            .create_company(CreateCompanyPayload {
                code: "IBM".into(),
                name: "IBM".into(),
                description: Some("Big Blue".into()),
            })
            .await
            .unwrap();
        store
            .create_industry(&CreateIndustryPayload {
                code: "tech".into(),
                industry: "Technology".into(),
            })
            .await
            .unwrap();
        (store, service)
    }

    #[tokio::test]
    async fn create_slugifies_the_code() {
        let (_, service) = seeded().await;
        let company = service
            .create_company(CreateCompanyPayload {
                code: "Acme Co".into(),
                name: "Acme".into(),
                description: Some("x".into()),
            })
            .await
            .unwrap();

        assert_eq!(company.code, "acme-co");
        assert_eq!(service.get_company("acme-co").await.unwrap().company, company);
    }

    #[tokio::test]
    async fn add_industry_distinguishes_missing_sides() {
        let (_, service) = seeded().await;

        let err = service.add_industry("ibm", "invalid").await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Could not find industry");

        let err = service.add_industry("nobody", "tech").await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Could not find company");
    }

    #[tokio::test]
    async fn duplicate_association_is_bad_request() {
        let (_, service) = seeded().await;

        let company = service.add_industry("ibm", "tech").await.unwrap();
        assert_eq!(company.industries, vec!["Technology"]);

        let err = service.add_industry("ibm", "tech").await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_company_is_not_found_everywhere() {
        let (_, service) = seeded().await;

        let update = UpdateCompanyPayload {
            name: "X".into(),
            description: None,
        };
        for err in [
            service.get_company("INVALID_CODE").await.unwrap_err(),
            service.update_company("INVALID_CODE", Some(update)).await.unwrap_err(),
            service.update_company("INVALID_CODE", None).await.unwrap_err(),
            service.delete_company("INVALID_CODE").await.unwrap_err(),
        ] {
            assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        }
        assert_eq!(service.list_companies().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_without_body_is_bad_request_for_known_company() {
        let (_, service) = seeded().await;

        let err = service.update_company("ibm", None).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(service.get_company("ibm").await.unwrap().company.name, "IBM");
    }

    #[tokio::test]
    async fn code_without_letters_or_digits_is_rejected() {
        let (_, service) = seeded().await;

        let err = service
            .create_company(CreateCompanyPayload {
                code: "!!".into(),
                name: "Bang".into(),
                description: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(service.list_companies().await.unwrap().len(), 1);
    }
}
