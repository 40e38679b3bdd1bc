use crate::{
    abstract_trait::DynReportExportService, domain::requests::export::ExportReportRequest,
    state::AppState,
};
use axum::{
    Extension,
    http::{
        StatusCode,
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    },
    response::IntoResponse,
    routing::post,
};
use shared::{errors::HttpError, middleware::SimpleValidatedJson};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/reports/export",
    request_body = ExportReportRequest,
    responses(
        (status = 200, description = "xlsx attachment named relatorio_{kind}_{start}_{end}.xlsx"),
        (status = 400, description = "Invalid report payload"),
        (status = 500, description = "Spreadsheet could not be written")
    ),
    tag = "Report"
)]
pub async fn export_report_handler(
    Extension(service): Extension<DynReportExportService>,
    SimpleValidatedJson(body): SimpleValidatedJson<ExportReportRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let exported = service.export(&body).await?;

    let disposition = format!("attachment; filename=\"{}\"", exported.filename);

    Ok((
        StatusCode::OK,
        [
            (CONTENT_TYPE, exported.mime_type.to_string()),
            (CONTENT_DISPOSITION, disposition),
        ],
        exported.bytes,
    ))
}

pub fn report_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/reports/export", post(export_report_handler))
        .layer(Extension(
            app_state.di_container.report_export_service.clone(),
        ))
        .with_state(app_state)
}
