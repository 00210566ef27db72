use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::product_option::errors::ProductOptionError;
use business::domain::product_option::use_cases::create::{
    CreateProductOptionParams, CreateProductOptionUseCase,
};
use business::domain::product_option::use_cases::delete::{
    DeleteProductOptionParams, DeleteProductOptionUseCase,
};
use business::domain::product_option::use_cases::get_all::{
    GetAllProductOptionsParams, GetAllProductOptionsUseCase,
};
use business::domain::product_option::use_cases::get_by_id::{
    GetProductOptionByIdParams, GetProductOptionByIdUseCase,
};
use business::domain::product_option::use_cases::update::{
    UpdateProductOptionParams, UpdateProductOptionUseCase,
};

use crate::api::error::{ErrorResponse, FieldErrors, IntoErrorResponse};
use crate::api::product_option::dto::{
    CreateProductOptionRequest, ProductOptionResponse, UpdateProductOptionRequest,
};
use crate::api::tags::ApiTags;

pub struct ProductOptionApi {
    create_use_case: Arc<dyn CreateProductOptionUseCase>,
    get_all_use_case: Arc<dyn GetAllProductOptionsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductOptionByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductOptionUseCase>,
    delete_use_case: Arc<dyn DeleteProductOptionUseCase>,
}

impl ProductOptionApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductOptionUseCase>,
        get_all_use_case: Arc<dyn GetAllProductOptionsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductOptionByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductOptionUseCase>,
        delete_use_case: Arc<dyn DeleteProductOptionUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

fn invalid_product_id() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "ValidationError".to_string(),
        message: "product.invalid_id".to_string(),
    })
}

fn invalid_option_id() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "ValidationError".to_string(),
        message: "product_option.invalid_id".to_string(),
    })
}

/// Product option API
///
/// Options are always addressed through their owning product; an option id
/// paired with the wrong product behaves as if it did not exist.
#[OpenApi]
impl ProductOptionApi {
    /// Create an option for a product
    ///
    /// The product must exist; otherwise nothing is written and the response
    /// names the missing product.
    #[oai(
        path = "/products/:product_id/options",
        method = "post",
        tag = "ApiTags::ProductOptions"
    )]
    async fn create_option(
        &self,
        product_id: Path<String>,
        body: Json<CreateProductOptionRequest>,
    ) -> CreateProductOptionResponse {
        let product_uuid = match Uuid::parse_str(&product_id.0) {
            Ok(uuid) => uuid,
            Err(_) => return CreateProductOptionResponse::BadRequest(invalid_product_id()),
        };

        let params = CreateProductOptionParams {
            product_id: product_uuid,
            name: body.0.name,
            description: body.0.description,
        };

        match self.create_use_case.execute(params).await {
            Ok(_) => CreateProductOptionResponse::Created,
            Err(ProductOptionError::Validation(errors)) => {
                CreateProductOptionResponse::ValidationFailed(Json(errors.into_fields()))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => CreateProductOptionResponse::NotFound(json),
                    _ => CreateProductOptionResponse::InternalError(json),
                }
            }
        }
    }

    /// List the options of a product
    ///
    /// A product without options (or an unknown product id) yields an empty
    /// list, not a 404.
    #[oai(
        path = "/products/:product_id/options",
        method = "get",
        tag = "ApiTags::ProductOptions"
    )]
    async fn get_all_options(&self, product_id: Path<String>) -> GetAllProductOptionsResponse {
        let product_uuid = match Uuid::parse_str(&product_id.0) {
            Ok(uuid) => uuid,
            Err(_) => return GetAllProductOptionsResponse::BadRequest(invalid_product_id()),
        };

        match self
            .get_all_use_case
            .execute(GetAllProductOptionsParams {
                product_id: product_uuid,
            })
            .await
        {
            Ok(options) => {
                let responses: Vec<ProductOptionResponse> =
                    options.into_iter().map(|o| o.into()).collect();
                GetAllProductOptionsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductOptionsResponse::InternalError(json)
            }
        }
    }

    /// Get one option of a product
    #[oai(
        path = "/products/:product_id/options/:option_id",
        method = "get",
        tag = "ApiTags::ProductOptions"
    )]
    async fn get_option_by_id(
        &self,
        product_id: Path<String>,
        option_id: Path<String>,
    ) -> GetProductOptionByIdResponse {
        let product_uuid = match Uuid::parse_str(&product_id.0) {
            Ok(uuid) => uuid,
            Err(_) => return GetProductOptionByIdResponse::BadRequest(invalid_product_id()),
        };
        let option_uuid = match Uuid::parse_str(&option_id.0) {
            Ok(uuid) => uuid,
            Err(_) => return GetProductOptionByIdResponse::BadRequest(invalid_option_id()),
        };

        match self
            .get_by_id_use_case
            .execute(GetProductOptionByIdParams {
                id: option_uuid,
                product_id: product_uuid,
            })
            .await
        {
            Ok(option) => GetProductOptionByIdResponse::Ok(Json(option.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductOptionByIdResponse::NotFound(json),
                    _ => GetProductOptionByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update an option of a product
    ///
    /// Fields left out of the body keep their stored values. A pair that
    /// matches nothing still returns 204.
    #[oai(
        path = "/products/:product_id/options/:option_id",
        method = "put",
        tag = "ApiTags::ProductOptions"
    )]
    async fn update_option(
        &self,
        product_id: Path<String>,
        option_id: Path<String>,
        body: Json<UpdateProductOptionRequest>,
    ) -> UpdateProductOptionResponse {
        let product_uuid = match Uuid::parse_str(&product_id.0) {
            Ok(uuid) => uuid,
            Err(_) => return UpdateProductOptionResponse::BadRequest(invalid_product_id()),
        };
        let option_uuid = match Uuid::parse_str(&option_id.0) {
            Ok(uuid) => uuid,
            Err(_) => return UpdateProductOptionResponse::BadRequest(invalid_option_id()),
        };

        let params = UpdateProductOptionParams {
            id: option_uuid,
            product_id: product_uuid,
            name: body.0.name,
            description: body.0.description,
        };

        match self.update_use_case.execute(params).await {
            Ok(()) => UpdateProductOptionResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                UpdateProductOptionResponse::InternalError(json)
            }
        }
    }

    /// Delete an option of a product
    ///
    /// A pair that matches nothing still returns 204.
    #[oai(
        path = "/products/:product_id/options/:option_id",
        method = "delete",
        tag = "ApiTags::ProductOptions"
    )]
    async fn delete_option(
        &self,
        product_id: Path<String>,
        option_id: Path<String>,
    ) -> DeleteProductOptionResponse {
        let product_uuid = match Uuid::parse_str(&product_id.0) {
            Ok(uuid) => uuid,
            Err(_) => return DeleteProductOptionResponse::BadRequest(invalid_product_id()),
        };
        let option_uuid = match Uuid::parse_str(&option_id.0) {
            Ok(uuid) => uuid,
            Err(_) => return DeleteProductOptionResponse::BadRequest(invalid_option_id()),
        };

        match self
            .delete_use_case
            .execute(DeleteProductOptionParams {
                id: option_uuid,
                product_id: product_uuid,
            })
            .await
        {
            Ok(()) => DeleteProductOptionResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                DeleteProductOptionResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductOptionResponse {
    #[oai(status = 201)]
    Created,
    #[oai(status = 400)]
    ValidationFailed(Json<FieldErrors>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductOptionsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductOptionResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductOptionByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductOptionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductOptionResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductOptionResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use mockall::mock;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem::{Endpoint, Route};
    use poem_openapi::OpenApiService;
    use serde_json::json;

    use business::domain::product_option::model::{NewProductOptionProps, ProductOption};

    use super::*;

    mock! {
        pub Create {}
        #[async_trait]
        impl CreateProductOptionUseCase for Create {
            async fn execute(&self, params: CreateProductOptionParams) -> Result<ProductOption, ProductOptionError>;
        }
    }

    mock! {
        pub GetAll {}
        #[async_trait]
        impl GetAllProductOptionsUseCase for GetAll {
            async fn execute(&self, params: GetAllProductOptionsParams) -> Result<Vec<ProductOption>, ProductOptionError>;
        }
    }

    mock! {
        pub GetById {}
        #[async_trait]
        impl GetProductOptionByIdUseCase for GetById {
            async fn execute(&self, params: GetProductOptionByIdParams) -> Result<ProductOption, ProductOptionError>;
        }
    }

    mock! {
        pub Update {}
        #[async_trait]
        impl UpdateProductOptionUseCase for Update {
            async fn execute(&self, params: UpdateProductOptionParams) -> Result<(), ProductOptionError>;
        }
    }

    mock! {
        pub Delete {}
        #[async_trait]
        impl DeleteProductOptionUseCase for Delete {
            async fn execute(&self, params: DeleteProductOptionParams) -> Result<(), ProductOptionError>;
        }
    }

    struct MockSet {
        create: MockCreate,
        get_all: MockGetAll,
        get_by_id: MockGetById,
        update: MockUpdate,
        delete: MockDelete,
    }

    impl MockSet {
        fn new() -> Self {
            Self {
                create: MockCreate::new(),
                get_all: MockGetAll::new(),
                get_by_id: MockGetById::new(),
                update: MockUpdate::new(),
                delete: MockDelete::new(),
            }
        }

        fn into_client(self) -> TestClient<impl Endpoint> {
            let api = ProductOptionApi::new(
                Arc::new(self.create),
                Arc::new(self.get_all),
                Arc::new(self.get_by_id),
                Arc::new(self.update),
                Arc::new(self.delete),
            );
            let service = OpenApiService::new(api, "options-under-test", "0.0.0");
            TestClient::new(Route::new().nest("/api", service))
        }
    }

    fn sample_option(id: Uuid, product_id: Uuid) -> ProductOption {
        ProductOption::from_repository(
            id,
            product_id,
            "Rosemary infusion".to_string(),
            "Infused with fresh rosemary".to_string(),
        )
    }

    #[tokio::test]
    async fn should_return_201_when_option_is_created() {
        let product_id = Uuid::new_v4();
        let mut mocks = MockSet::new();
        mocks
            .create
            .expect_execute()
            .withf(move |params| params.product_id == product_id)
            .returning(move |_| {
                Ok(ProductOption::new(NewProductOptionProps {
                    product_id,
                    name: "Rosemary infusion".to_string(),
                    description: "Infused with fresh rosemary".to_string(),
                }))
            });

        let cli = mocks.into_client();
        let resp = cli
            .post(format!("/api/products/{product_id}/options"))
            .body_json(&json!({
                "name": "Rosemary infusion",
                "description": "Infused with fresh rosemary",
            }))
            .send()
            .await;

        resp.assert_status(StatusCode::CREATED);
    }

    #[tokio::test]
    async fn should_return_404_naming_the_product_when_parent_is_missing() {
        let product_id = Uuid::new_v4();
        let mut mocks = MockSet::new();
        mocks
            .create
            .expect_execute()
            .returning(move |_| Err(ProductOptionError::ProductNotFound(product_id)));

        let cli = mocks.into_client();
        let resp = cli
            .post(format!("/api/products/{product_id}/options"))
            .body_json(&json!({
                "name": "Rosemary infusion",
                "description": "Infused with fresh rosemary",
            }))
            .send()
            .await;

        resp.assert_status(StatusCode::NOT_FOUND);
        resp.assert_json(json!({
            "name": "NotFound",
            "message": format!("Product: {product_id} does not exist"),
        }))
        .await;
    }

    #[tokio::test]
    async fn should_return_field_error_map_when_option_body_is_incomplete() {
        let mut mocks = MockSet::new();
        mocks.create.expect_execute().returning(|params| {
            Err(ProductOptionError::Validation(
                params.validate().unwrap_err(),
            ))
        });

        let cli = mocks.into_client();
        let resp = cli
            .post(format!("/api/products/{}/options", Uuid::new_v4()))
            .body_json(&json!({ "name": "" }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(json!({
            "Description": ["The Description field is required."],
            "Name": ["The Name field is required."],
        }))
        .await;
    }

    #[tokio::test]
    async fn should_return_400_when_parent_path_id_is_not_a_uuid() {
        let cli = MockSet::new().into_client();

        let resp = cli
            .post("/api/products/not-a-uuid/options")
            .body_json(&json!({ "name": "x", "description": "y" }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(json!({
            "name": "ValidationError",
            "message": "product.invalid_id",
        }))
        .await;
    }

    #[tokio::test]
    async fn should_return_empty_list_when_product_has_no_options() {
        let product_id = Uuid::new_v4();
        let mut mocks = MockSet::new();
        mocks.get_all.expect_execute().returning(|_| Ok(vec![]));

        let cli = mocks.into_client();
        let resp = cli
            .get(format!("/api/products/{product_id}/options"))
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.assert_json(json!([])).await;
    }

    #[tokio::test]
    async fn should_return_options_scoped_to_the_product() {
        let product_id = Uuid::new_v4();
        let option_id = Uuid::new_v4();
        let mut mocks = MockSet::new();
        mocks
            .get_all
            .expect_execute()
            .withf(move |params| params.product_id == product_id)
            .returning(move |_| Ok(vec![sample_option(option_id, product_id)]));

        let cli = mocks.into_client();
        let resp = cli
            .get(format!("/api/products/{product_id}/options"))
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.assert_json(json!([{
            "id": option_id.to_string(),
            "product_id": product_id.to_string(),
            "name": "Rosemary infusion",
            "description": "Infused with fresh rosemary",
        }]))
        .await;
    }

    #[tokio::test]
    async fn should_return_option_when_pair_matches() {
        let product_id = Uuid::new_v4();
        let option_id = Uuid::new_v4();
        let mut mocks = MockSet::new();
        mocks
            .get_by_id
            .expect_execute()
            .withf(move |params| params.id == option_id && params.product_id == product_id)
            .returning(move |_| Ok(sample_option(option_id, product_id)));

        let cli = mocks.into_client();
        let resp = cli
            .get(format!("/api/products/{product_id}/options/{option_id}"))
            .send()
            .await;

        resp.assert_status_is_ok();
    }

    #[tokio::test]
    async fn should_return_404_naming_the_option_when_pair_matches_nothing() {
        let product_id = Uuid::new_v4();
        let option_id = Uuid::new_v4();
        let mut mocks = MockSet::new();
        mocks
            .get_by_id
            .expect_execute()
            .returning(move |_| Err(ProductOptionError::NotFound(option_id)));

        let cli = mocks.into_client();
        let resp = cli
            .get(format!("/api/products/{product_id}/options/{option_id}"))
            .send()
            .await;

        resp.assert_status(StatusCode::NOT_FOUND);
        resp.assert_json(json!({
            "name": "NotFound",
            "message": format!("Product option: {option_id} does not exist"),
        }))
        .await;
    }

    #[tokio::test]
    async fn should_return_400_when_option_path_id_is_not_a_uuid() {
        let cli = MockSet::new().into_client();

        let resp = cli
            .get(format!("/api/products/{}/options/garbage", Uuid::new_v4()))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(json!({
            "name": "ValidationError",
            "message": "product_option.invalid_id",
        }))
        .await;
    }

    #[tokio::test]
    async fn should_return_204_when_option_update_succeeds() {
        let product_id = Uuid::new_v4();
        let option_id = Uuid::new_v4();
        let mut mocks = MockSet::new();
        mocks
            .update
            .expect_execute()
            .withf(move |params| {
                params.id == option_id
                    && params.product_id == product_id
                    && params.name.as_deref() == Some("Large")
                    && params.description.is_none()
            })
            .returning(|_| Ok(()));

        let cli = mocks.into_client();
        let resp = cli
            .put(format!("/api/products/{product_id}/options/{option_id}"))
            .body_json(&json!({ "name": "Large" }))
            .send()
            .await;

        resp.assert_status(StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn should_return_204_when_deleting_an_option_pair() {
        let product_id = Uuid::new_v4();
        let option_id = Uuid::new_v4();
        let mut mocks = MockSet::new();
        mocks.delete.expect_execute().returning(|_| Ok(()));

        let cli = mocks.into_client();
        let resp = cli
            .delete(format!("/api/products/{product_id}/options/{option_id}"))
            .send()
            .await;

        resp.assert_status(StatusCode::NO_CONTENT);
    }
}
