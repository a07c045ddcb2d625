//! Action result types.

use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use super::model_state::ModelState;

/// A rendered page selection: view name, bound model, and model state.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewResult<M> {
    /// Name of the view to render.
    pub name: &'static str,
    /// Model bound to the view, if any.
    pub model: Option<M>,
    /// Validation errors to show next to the form fields.
    pub model_state: ModelState,
}

/// Outcome of a page-oriented action.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult<M> {
    /// Render a view.
    View(ViewResult<M>),
    /// Redirect to another action by name.
    RedirectToAction(&'static str),
    /// Respond 404.
    NotFound,
}

impl<M> ActionResult<M> {
    /// Render `name` bound to `model`.
    pub fn view(name: &'static str, model: M) -> Self {
        Self::View(ViewResult {
            name,
            model: Some(model),
            model_state: ModelState::new(),
        })
    }

    /// Render `name` without a model.
    pub fn empty_view(name: &'static str) -> Self {
        Self::View(ViewResult {
            name,
            model: None,
            model_state: ModelState::new(),
        })
    }

    /// Re-render `name` with the submitted model and its errors.
    pub fn invalid_view(name: &'static str, model: M, model_state: ModelState) -> Self {
        Self::View(ViewResult {
            name,
            model: Some(model),
            model_state,
        })
    }

    /// The view selection, if this is a view result.
    pub fn into_view(self) -> Option<ViewResult<M>> {
        match self {
            Self::View(view) => Some(view),
            _ => None,
        }
    }

    /// The redirect target, if this is a redirect.
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            Self::RedirectToAction(action) => Some(action),
            _ => None,
        }
    }

    /// Whether this is a not-found result.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Outcome of a REST action.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiReply<T> {
    /// 200 with a body.
    Ok(T),
    /// 201 pointing at the route that reads the new resource.
    Created {
        /// Name of the action that serves `location`.
        route: &'static str,
        /// URI of the created resource.
        location: String,
        /// The created resource.
        body: T,
    },
    /// 204.
    NoContent,
    /// 404.
    NotFound,
    /// 400.
    BadRequest,
}

impl<T> ApiReply<T> {
    /// HTTP status of this reply.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Ok(_) => StatusCode::OK,
            Self::Created { .. } => StatusCode::CREATED,
            Self::NoContent => StatusCode::NO_CONTENT,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::BadRequest => StatusCode::BAD_REQUEST,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiReply<T> {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Ok(body) => (status, Json(body)).into_response(),
            Self::Created { location, body, .. } => {
                (status, [(header::LOCATION, location)], Json(body)).into_response()
            }
            Self::NoContent | Self::NotFound | Self::BadRequest => status.into_response(),
        }
    }
}
