use utoipa::OpenApi;

use crate::application::http::{
    appointment::router::AppointmentApiDoc, options::router::OptionsApiDoc,
    property::router::PropertyApiDoc, staff::router::StaffApiDoc,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "AcornArranger API",
    description = "List endpoints for appointments, properties and staff"
))]
pub struct ApiDoc;

pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.merge(AppointmentApiDoc::openapi());
    doc.merge(PropertyApiDoc::openapi());
    doc.merge(StaffApiDoc::openapi());
    doc.merge(OptionsApiDoc::openapi());
    doc
}
