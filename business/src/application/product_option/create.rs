use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product_option::errors::ProductOptionError;
use crate::domain::product_option::model::ProductOption;
use crate::domain::product_option::repository::ProductOptionRepository;
use crate::domain::product_option::use_cases::create::{
    CreateProductOptionParams, CreateProductOptionUseCase,
};

pub struct CreateProductOptionUseCaseImpl {
    pub repository: Arc<dyn ProductOptionRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductOptionUseCase for CreateProductOptionUseCaseImpl {
    async fn execute(
        &self,
        params: CreateProductOptionParams,
    ) -> Result<ProductOption, ProductOptionError> {
        self.logger.info(&format!(
            "Creating option for product: {}",
            params.product_id
        ));

        let props = params
            .validate()
            .map_err(ProductOptionError::Validation)?;

        // The parent must exist before anything is written.
        if !self.product_repository.exists(props.product_id).await? {
            self.logger.warn(&format!(
                "Rejected option for missing product: {}",
                props.product_id
            ));
            return Err(ProductOptionError::ProductNotFound(props.product_id));
        }

        let option = ProductOption::new(props);
        self.repository.insert(&option).await?;

        self.logger
            .info(&format!("Option created with id: {}", option.id));
        Ok(option)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use uuid::Uuid;

    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::{Product, ProductChanges};
    use crate::domain::product_option::model::ProductOptionChanges;

    mock! {
        pub OptionRepo {}

        #[async_trait]
        impl ProductOptionRepository for OptionRepo {
            async fn get_all_by_product_id(&self, product_id: Uuid) -> Result<Vec<ProductOption>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid, product_id: Uuid) -> Result<Option<ProductOption>, RepositoryError>;
            async fn insert(&self, option: &ProductOption) -> Result<(), RepositoryError>;
            async fn update(&self, id: Uuid, product_id: Uuid, changes: &ProductOptionChanges) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid, product_id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError>;
            async fn search_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError>;
            async fn exists(&self, id: Uuid) -> Result<bool, RepositoryError>;
            async fn insert(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn update(&self, id: Uuid, changes: &ProductChanges) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn valid_params(product_id: Uuid) -> CreateProductOptionParams {
        CreateProductOptionParams {
            product_id,
            name: Some("Rosemary infusion".to_string()),
            description: Some("Infused with fresh rosemary".to_string()),
        }
    }

    #[tokio::test]
    async fn should_create_option_when_parent_product_exists() {
        let product_id = Uuid::new_v4();
        let mut mock_option_repo = MockOptionRepo::new();
        mock_option_repo
            .expect_insert()
            .withf(move |option| option.product_id == product_id && !option.id.is_nil())
            .returning(|_| Ok(()));
        let mut mock_product_repo = MockProductRepo::new();
        mock_product_repo
            .expect_exists()
            .withf(move |id| *id == product_id)
            .returning(|_| Ok(true));

        let use_case = CreateProductOptionUseCaseImpl {
            repository: Arc::new(mock_option_repo),
            product_repository: Arc::new(mock_product_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(valid_params(product_id)).await;

        let option = result.unwrap();
        assert_eq!(option.product_id, product_id);
        assert_eq!(option.name, "Rosemary infusion");
    }

    #[tokio::test]
    async fn should_reject_option_when_parent_product_is_missing() {
        let product_id = Uuid::new_v4();
        let mut mock_option_repo = MockOptionRepo::new();
        mock_option_repo.expect_insert().never();
        let mut mock_product_repo = MockProductRepo::new();
        mock_product_repo.expect_exists().returning(|_| Ok(false));

        let use_case = CreateProductOptionUseCaseImpl {
            repository: Arc::new(mock_option_repo),
            product_repository: Arc::new(mock_product_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(valid_params(product_id)).await;

        match result {
            Err(ProductOptionError::ProductNotFound(id)) => assert_eq!(id, product_id),
            other => panic!("expected ProductNotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn should_reject_option_before_touching_storage_when_name_is_empty() {
        let mut mock_option_repo = MockOptionRepo::new();
        mock_option_repo.expect_insert().never();
        let mut mock_product_repo = MockProductRepo::new();
        mock_product_repo.expect_exists().never();

        let use_case = CreateProductOptionUseCaseImpl {
            repository: Arc::new(mock_option_repo),
            product_repository: Arc::new(mock_product_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductOptionParams {
                product_id: Uuid::new_v4(),
                name: Some(String::new()),
                description: Some("Infused with fresh rosemary".to_string()),
            })
            .await;

        match result {
            Err(ProductOptionError::Validation(errors)) => {
                assert!(errors.fields().contains_key("Name"));
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn should_propagate_repository_error_when_existence_check_fails() {
        let mut mock_option_repo = MockOptionRepo::new();
        mock_option_repo.expect_insert().never();
        let mut mock_product_repo = MockProductRepo::new();
        mock_product_repo
            .expect_exists()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = CreateProductOptionUseCaseImpl {
            repository: Arc::new(mock_option_repo),
            product_repository: Arc::new(mock_product_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(valid_params(Uuid::new_v4())).await;

        assert!(matches!(result, Err(ProductOptionError::Repository(_))));
    }
}
