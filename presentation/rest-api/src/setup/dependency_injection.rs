use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::product_option::repository::ProductOptionRepositoryPostgres;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::search::SearchProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::product_option::create::CreateProductOptionUseCaseImpl;
use business::application::product_option::delete::DeleteProductOptionUseCaseImpl;
use business::application::product_option::get_all::GetAllProductOptionsUseCaseImpl;
use business::application::product_option::get_by_id::GetProductOptionByIdUseCaseImpl;
use business::application::product_option::update::UpdateProductOptionUseCaseImpl;

pub struct DependencyContainer {
    pub product_api: crate::api::product::routes::ProductApi,
    pub product_option_api: crate::api::product_option::routes::ProductOptionApi,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let option_repository = Arc::new(ProductOptionRepositoryPostgres::new(pool));

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let search_use_case = Arc::new(SearchProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });

        // Product option use cases; create also needs the product
        // repository for the parent existence probe
        let create_option_use_case = Arc::new(CreateProductOptionUseCaseImpl {
            repository: option_repository.clone(),
            product_repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_options_use_case = Arc::new(GetAllProductOptionsUseCaseImpl {
            repository: option_repository.clone(),
            logger: logger.clone(),
        });
        let get_option_by_id_use_case = Arc::new(GetProductOptionByIdUseCaseImpl {
            repository: option_repository.clone(),
            logger: logger.clone(),
        });
        let update_option_use_case = Arc::new(UpdateProductOptionUseCaseImpl {
            repository: option_repository.clone(),
            logger: logger.clone(),
        });
        let delete_option_use_case = Arc::new(DeleteProductOptionUseCaseImpl {
            repository: option_repository,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            search_use_case,
            update_use_case,
            delete_use_case,
        );

        let product_option_api = crate::api::product_option::routes::ProductOptionApi::new(
            create_option_use_case,
            get_all_options_use_case,
            get_option_by_id_use_case,
            update_option_use_case,
            delete_option_use_case,
        );

        Ok(Self {
            product_api,
            product_option_api,
        })
    }
}
