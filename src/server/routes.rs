//! Enrutado de `/api/molecules/*`.

use serde::Deserialize;
use serde_json::json;

use super::http::{Request, Response};
use super::service::MoleculeService;
use crate::errors::CoreError;

pub const API_PREFIX: &str = "/api/molecules";

/// Rutas conocidas y el único método que aceptan.
const ROUTES: &[(&str, &str)] = &[("/parse", "POST"),
                                  ("/health", "GET"),
                                  ("/image", "GET"),
                                  ("/descriptors", "GET")];

#[derive(Debug, Default, Deserialize)]
struct ParseBody {
    #[serde(default)]
    smiles: Option<String>,
}

fn failure(err: CoreError) -> Response {
    let status = err.status_code();
    if status >= 500 {
        log::error!("request failed ({status}): {err}");
    } else {
        log::warn!("request rejected ({status}): {err}");
    }
    Response::error(status, &err.client_message())
}

pub async fn route(service: &dyn MoleculeService, req: &Request) -> Response {
    let Some(endpoint) = req.path.strip_prefix(API_PREFIX) else {
        return Response::error(404, "not found");
    };
    let endpoint = endpoint.trim_end_matches('/');
    let Some(&(_, allowed)) = ROUTES.iter().find(|(p, _)| *p == endpoint) else {
        return Response::error(404, "not found");
    };
    if req.method == "OPTIONS" {
        return Response::no_content();
    }
    if req.method != allowed {
        return Response::error(405, &format!("method {} not allowed, use {allowed}", req.method));
    }
    log::debug!("{} {}", req.method, req.path);

    match endpoint {
        "/parse" => parse(service, req).await,
        "/health" => Response::json(200, &json!({ "status": "UP", "message": "Molecule descriptor API is running" })),
        "/image" => image(service, req).await,
        _ => Response::json(200, &service.descriptors()),
    }
}

async fn parse(service: &dyn MoleculeService, req: &Request) -> Response {
    let body: ParseBody = if req.body.iter().all(u8::is_ascii_whitespace) {
        ParseBody::default()
    } else {
        match serde_json::from_slice(&req.body) {
            Ok(b) => b,
            Err(e) => return failure(CoreError::BadRequest(format!("invalid JSON body: {e}"))),
        }
    };
    match service.parse(body.smiles.unwrap_or_default()).await {
        Ok(json) => Response::json(200, &json),
        Err(e) => failure(e),
    }
}

async fn image(service: &dyn MoleculeService, req: &Request) -> Response {
    let smiles = req.query_param("smiles").unwrap_or_default().to_string();
    match service.image(smiles).await {
        Ok(svg) => Response::svg(svg),
        Err(e) => failure(e),
    }
}
