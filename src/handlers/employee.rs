use actix_web::{web, HttpResponse};
use log::{info, warn};
use std::fmt;
use uuid::Uuid;

use crate::db::EmployeeStore;
use crate::errors::{AppError, PublishError, CREATE_FAILED, UPDATE_FAILED};
use crate::models::employee::Employee;
use crate::models::event::{
    SAVE_EMPLOYEE_DATA_VERSION, SAVE_EMPLOYEE_EVENT_TYPE, SAVE_EMPLOYEE_SUBJECT,
};
use crate::utils::event_grid::EventPublisher;
use crate::utils::validation::validate_employee;

// The cause is logged here and never reaches the client.
fn infrastructure_failure<E: fmt::Display>(message: &'static str, err: E) -> AppError {
    warn!("{} ({})", message, err);
    AppError::Infrastructure(message.to_string())
}

// Invalid UTF-8 is replaced with U+FFFD, never rejected.
fn decode_body(body: &web::Bytes) -> String {
    String::from_utf8_lossy(body).into_owned()
}

async fn announce_save(publisher: &dyn EventPublisher, body: &str) -> Result<(), PublishError> {
    publisher
        .publish(
            SAVE_EMPLOYEE_SUBJECT,
            SAVE_EMPLOYEE_EVENT_TYPE,
            SAVE_EMPLOYEE_DATA_VERSION,
            body,
        )
        .await
}

/// POST / : validates the payload, stores it under a fresh id and announces it.
pub async fn create_employee(
    body: web::Bytes,
    store: web::Data<dyn EmployeeStore>,
    publisher: web::Data<dyn EventPublisher>,
) -> Result<HttpResponse, AppError> {
    info!("CreateEmployee processed a request.");
    let body = decode_body(&body);
    info!("Request Payload: {}", body);

    let mut employee = Employee::from_body(&body);
    validate_employee(&employee)?;

    employee.id = Uuid::new_v4().to_string();

    store
        .insert(&employee)
        .await
        .map_err(|err| infrastructure_failure(CREATE_FAILED, err))?;

    // Not atomic with the insert: a failed publish leaves the record saved.
    announce_save(publisher.get_ref(), &body)
        .await
        .map_err(|err| infrastructure_failure(CREATE_FAILED, err))?;

    info!("Employee: {} has been created.", employee.id);
    Ok(HttpResponse::Ok().finish())
}

/// PUT /UpdateEmployee : replaces the business fields of an existing record.
pub async fn update_employee(
    body: web::Bytes,
    store: web::Data<dyn EmployeeStore>,
    publisher: web::Data<dyn EventPublisher>,
) -> Result<HttpResponse, AppError> {
    info!("UpdateEmployee processed a request.");
    let body = decode_body(&body);
    info!("Request Payload: {}", body);

    let incoming = Employee::from_body(&body);
    if incoming.id.trim().is_empty() {
        return Err(AppError::NotFound);
    }

    info!("Searching for: {}", incoming.id);
    let mut employee = store
        .read_by_id(&incoming.id)
        .await
        .map_err(|err| infrastructure_failure(UPDATE_FAILED, err))?
        .ok_or(AppError::NotFound)?;

    validate_employee(&incoming)?;

    employee.overwrite_details(&incoming);
    store
        .upsert(&employee)
        .await
        .map_err(|err| infrastructure_failure(UPDATE_FAILED, err))?;
    info!("Employee: {} has been updated.", employee.id);

    // The event carries the request as received, not the stored record.
    announce_save(publisher.get_ref(), &body)
        .await
        .map_err(|err| infrastructure_failure(UPDATE_FAILED, err))?;

    Ok(HttpResponse::Ok().finish())
}
