use http::StatusCode;

use super::{bind_and_validate, parse_id, respond, service_failure, success, ControllerResponse};
use crate::pagination::{parse_query_number, DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::requests::product::{CreateProductRequest, UpdateProductRequest};
use crate::responses::product::{ProductResponse, ProductsListResponse};
use crate::services::product_service::ProductServiceInterface;

const NAME: &str = "Product";
const ENTITY: &str = "product";

/// Handlers for the `/products` resource.
pub struct ProductController {
    service: Box<dyn ProductServiceInterface>,
}

impl ProductController {
    pub fn new(service: Box<dyn ProductServiceInterface>) -> Self {
        Self { service }
    }

    /// `POST /products`
    pub fn create(&self, body: &str) -> ControllerResponse {
        respond(|| {
            let req: CreateProductRequest = bind_and_validate(body)?;
            let product = self
                .service
                .create(&req)
                .map_err(|err| service_failure(err, NAME, "Failed to create product"))?;
            success(
                StatusCode::CREATED,
                "Product created successfully",
                &ProductResponse::from(&product),
            )
        })
    }

    /// `GET /products?page=&limit=`
    pub fn list(&self, page: Option<&str>, limit: Option<&str>) -> ControllerResponse {
        respond(|| {
            let page = parse_query_number(page, DEFAULT_PAGE);
            let limit = parse_query_number(limit, DEFAULT_LIMIT);
            let listing = self
                .service
                .list(page, limit)
                .map_err(|err| service_failure(err, NAME, "Failed to fetch products"))?;
            success(
                StatusCode::OK,
                "Products retrieved successfully",
                &ProductsListResponse::new(&listing.items, listing.total, listing.page, listing.limit),
            )
        })
    }

    /// `GET /products/{id}`
    pub fn get(&self, id: &str) -> ControllerResponse {
        respond(|| {
            let id = parse_id(id, ENTITY)?;
            let product = self
                .service
                .get_by_id(id)
                .map_err(|err| service_failure(err, NAME, "Failed to fetch product"))?;
            success(
                StatusCode::OK,
                "Product retrieved successfully",
                &ProductResponse::from(&product),
            )
        })
    }

    /// `PUT /products/{id}`
    pub fn update(&self, id: &str, body: &str) -> ControllerResponse {
        respond(|| {
            let id = parse_id(id, ENTITY)?;
            let req: UpdateProductRequest = bind_and_validate(body)?;
            let product = self
                .service
                .update(id, &req)
                .map_err(|err| service_failure(err, NAME, "Failed to update product"))?;
            success(
                StatusCode::OK,
                "Product updated successfully",
                &ProductResponse::from(&product),
            )
        })
    }

    /// `DELETE /products/{id}`
    pub fn delete(&self, id: &str) -> ControllerResponse {
        respond(|| {
            let id = parse_id(id, ENTITY)?;
            self.service
                .delete(id)
                .map_err(|err| service_failure(err, NAME, "Failed to delete product"))?;
            Ok(ControllerResponse::message(
                StatusCode::OK,
                "Product deleted successfully",
            ))
        })
    }

    /// `GET /products/stats`
    pub fn stats(&self) -> ControllerResponse {
        respond(|| {
            let stats = self
                .service
                .stats()
                .map_err(|err| service_failure(err, NAME, "Failed to fetch product stats"))?;
            success(StatusCode::OK, "Product stats retrieved successfully", &stats)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::product::ProductRepository;
    use crate::services::product_service::ProductService;
    use serde_json::json;

    fn controller() -> ProductController {
        ProductController::new(Box::new(ProductService::new(Box::new(
            ProductRepository::default(),
        ))))
    }

    fn create(controller: &ProductController, name: &str) -> ControllerResponse {
        controller.create(&json!({ "name": name, "description": "A useful product" }).to_string())
    }

    #[test]
    fn test_create_returns_201_with_data() {
        let controller = controller();
        let response = create(&controller, "Widget");
        assert_eq!(response.status, StatusCode::CREATED);
        assert_eq!(response.body["success"], true);
        assert_eq!(response.body["message"], "Product created successfully");
        assert_eq!(response.body["data"]["id"], 1);
        assert_eq!(response.body["data"]["name"], "Widget");
    }

    #[test]
    fn test_get_statuses() {
        let controller = controller();
        create(&controller, "Widget");

        assert_eq!(controller.get("1").status, StatusCode::OK);

        let missing = controller.get("9");
        assert_eq!(missing.status, StatusCode::NOT_FOUND);
        assert_eq!(missing.body["message"], "Product not found");

        let zero = controller.get("0");
        assert_eq!(zero.status, StatusCode::BAD_REQUEST);
        assert_eq!(zero.body["message"], "Invalid product ID");

        let garbage = controller.get("one");
        assert_eq!(garbage.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_update_partial_body() {
        let controller = controller();
        create(&controller, "Widget");

        let response = controller.update("1", &json!({ "name": "Gadget" }).to_string());
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["data"]["name"], "Gadget");
        assert_eq!(response.body["data"]["description"], "A useful product");

        let invalid = controller.update("1", &json!({ "name": "G" }).to_string());
        assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
        assert_eq!(invalid.body["message"], "Validation failed");

        let missing = controller.update("4", "{}");
        assert_eq!(missing.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_list_defaults_and_pagination() {
        let controller = controller();
        for i in 0..3 {
            create(&controller, &format!("Item {i}"));
        }
        let response = controller.list(None, Some("not-a-number"));
        assert_eq!(response.status, StatusCode::OK);
        let pagination = &response.body["data"]["pagination"];
        assert_eq!(pagination["page"], 1);
        assert_eq!(pagination["limit"], 10);
        assert_eq!(pagination["total"], 3);
        assert_eq!(pagination["total_pages"], 1);
        assert_eq!(response.body["data"]["data"].as_array().map(Vec::len), Some(3));

        let second = controller.list(Some("2"), Some("2"));
        assert_eq!(second.body["data"]["pagination"]["has_prev"], true);
        assert_eq!(second.body["data"]["pagination"]["has_next"], false);
    }

    #[test]
    fn test_delete_then_missing() {
        let controller = controller();
        create(&controller, "Widget");
        let response = controller.delete("1");
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(
            response.body,
            json!({ "success": true, "message": "Product deleted successfully" })
        );
        assert_eq!(controller.delete("1").status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_stats() {
        let controller = controller();
        create(&controller, "Widget");
        let response = controller.stats();
        assert_eq!(response.body["data"], json!({ "total_products": 1 }));
    }
}
