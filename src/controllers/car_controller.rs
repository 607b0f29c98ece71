use http::StatusCode;

use super::{bind_and_validate, parse_id, respond, service_failure, success, ControllerResponse};
use crate::pagination::{parse_query_number, DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::requests::car::{CreateCarRequest, UpdateCarRequest};
use crate::responses::car::{CarResponse, CarsListResponse};
use crate::services::car_service::CarServiceInterface;

const NAME: &str = "Car";
const ENTITY: &str = "car";

/// Handlers for the `/cars` resource.
pub struct CarController {
    service: Box<dyn CarServiceInterface>,
}

/// `available=true|false`; any other value disables the filter.
fn parse_available(raw: Option<&str>) -> Option<bool> {
    match raw {
        Some("true") => Some(true),
        Some("false") => Some(false),
        _ => None,
    }
}

impl CarController {
    pub fn new(service: Box<dyn CarServiceInterface>) -> Self {
        Self { service }
    }

    /// `POST /cars`
    pub fn create(&self, body: &str) -> ControllerResponse {
        respond(|| {
            let req: CreateCarRequest = bind_and_validate(body)?;
            let car = self
                .service
                .create(&req)
                .map_err(|err| service_failure(err, NAME, "Failed to create car"))?;
            success(
                StatusCode::CREATED,
                "Car created successfully",
                &CarResponse::from(&car),
            )
        })
    }

    /// `GET /cars?page=&limit=&available=`
    pub fn list(
        &self,
        page: Option<&str>,
        limit: Option<&str>,
        available: Option<&str>,
    ) -> ControllerResponse {
        respond(|| {
            let page = parse_query_number(page, DEFAULT_PAGE);
            let limit = parse_query_number(limit, DEFAULT_LIMIT);
            let listing = self
                .service
                .list(page, limit, parse_available(available))
                .map_err(|err| service_failure(err, NAME, "Failed to fetch cars"))?;
            success(
                StatusCode::OK,
                "Cars retrieved successfully",
                &CarsListResponse::new(&listing.items, listing.total, listing.page, listing.limit),
            )
        })
    }

    /// `GET /cars/{id}`
    pub fn get(&self, id: &str) -> ControllerResponse {
        respond(|| {
            let id = parse_id(id, ENTITY)?;
            let car = self
                .service
                .get_by_id(id)
                .map_err(|err| service_failure(err, NAME, "Failed to fetch car"))?;
            success(
                StatusCode::OK,
                "Car retrieved successfully",
                &CarResponse::from(&car),
            )
        })
    }

    /// `PUT /cars/{id}`
    pub fn update(&self, id: &str, body: &str) -> ControllerResponse {
        respond(|| {
            let id = parse_id(id, ENTITY)?;
            let req: UpdateCarRequest = bind_and_validate(body)?;
            let car = self
                .service
                .update(id, &req)
                .map_err(|err| service_failure(err, NAME, "Failed to update car"))?;
            success(
                StatusCode::OK,
                "Car updated successfully",
                &CarResponse::from(&car),
            )
        })
    }

    /// `DELETE /cars/{id}`
    pub fn delete(&self, id: &str) -> ControllerResponse {
        respond(|| {
            let id = parse_id(id, ENTITY)?;
            self.service
                .delete(id)
                .map_err(|err| service_failure(err, NAME, "Failed to delete car"))?;
            Ok(ControllerResponse::message(
                StatusCode::OK,
                "Car deleted successfully",
            ))
        })
    }

    /// `GET /cars/stats`
    pub fn stats(&self) -> ControllerResponse {
        respond(|| {
            let stats = self
                .service
                .stats()
                .map_err(|err| service_failure(err, NAME, "Failed to fetch car stats"))?;
            success(StatusCode::OK, "Car stats retrieved successfully", &stats)
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::repositories::car::CarRepository;
    use crate::services::car_service::CarService;
    use serde_json::{json, Value};

    fn controller() -> CarController {
        CarController::new(Box::new(CarService::new(Box::new(CarRepository::default()))))
    }

    fn body(plate: &str, is_available: bool) -> String {
        json!({
            "name": "Brio Satya",
            "description": "Compact city hatchback",
            "category": "LCGC",
            "price_per_day": 250000.0,
            "price_per_week": 1500000.0,
            "price_per_month": 5500000.0,
            "brand": "Honda",
            "model": "Brio",
            "transmission": "Automatic",
            "year": 2021,
            "license_plate": plate,
            "machine_number": "L12B-0001",
            "is_available": is_available
        })
        .to_string()
    }

    #[test]
    fn test_create_and_get() {
        let controller = controller();
        let created = controller.create(&body("D 1 AB", true));
        assert_eq!(created.status, StatusCode::CREATED);
        assert_eq!(created.body["data"]["category"], "LCGC");

        let fetched = controller.get("1");
        assert_eq!(fetched.status, StatusCode::OK);
        assert_eq!(fetched.body["data"]["brand"], "Honda");
    }

    #[test]
    fn test_create_rejects_unknown_category() {
        let mut payload: Value = serde_json::from_str(&body("D 1 AB", true)).unwrap();
        payload["category"] = json!("Limousine");
        let response = controller().create(&payload.to_string());
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["message"], "Invalid JSON format");
    }

    #[test]
    fn test_create_validates_ranges() {
        let mut payload: Value = serde_json::from_str(&body("D 1 AB", true)).unwrap();
        payload["year"] = json!(1850);
        payload["license_plate"] = json!("TOO LONG PLATE");
        let response = controller().create(&payload.to_string());
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        let error = response.body["error"].as_str().unwrap();
        assert!(error.starts_with("Invalid input data: license_plate must be between 3 and 10"));
        assert!(error.contains(", year must be between 1900"));
    }

    #[test]
    fn test_list_with_availability() {
        let controller = controller();
        controller.create(&body("D 1 AB", true));
        controller.create(&body("D 2 AB", false));
        controller.create(&body("D 3 AB", false));

        let rented = controller.list(None, None, Some("false"));
        assert_eq!(rented.body["data"]["pagination"]["total"], 2);

        let unfiltered = controller.list(None, None, Some("maybe"));
        assert_eq!(unfiltered.body["data"]["pagination"]["total"], 3);
    }

    #[test]
    fn test_update_and_delete() {
        let controller = controller();
        controller.create(&body("D 1 AB", true));

        let updated = controller.update("1", &json!({ "is_available": false }).to_string());
        assert_eq!(updated.status, StatusCode::OK);
        assert_eq!(updated.body["data"]["is_available"], false);
        assert_eq!(updated.body["data"]["license_plate"], "D 1 AB");

        assert_eq!(controller.delete("1").status, StatusCode::OK);
        assert_eq!(controller.get("1").status, StatusCode::NOT_FOUND);
        assert_eq!(controller.delete("x").status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_parse_available() {
        assert_eq!(parse_available(Some("true")), Some(true));
        assert_eq!(parse_available(Some("false")), Some(false));
        assert_eq!(parse_available(Some("")), None);
        assert_eq!(parse_available(None), None);
    }
}
