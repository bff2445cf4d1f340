use std::fmt::Debug;

use axum::response::{Html, IntoResponse, Response};
use handlebars::Handlebars;
use http::StatusCode;
use serde::Serialize;

use crate::{handlebars::create_handlebars, Config};

pub struct State {
    pub config: Config,
    pub handlebars: Handlebars<'static>,
}

impl Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl State {
    pub fn new(config: Config) -> color_eyre::Result<Self> {
        Ok(Self {
            handlebars: create_handlebars()?,
            config,
        })
    }

    pub fn render_template<T: Serialize>(&self, path: &'static str, data: T) -> Response {
        match self.handlebars.render(path, &data) {
            Ok(response) => Html(response).into_response(),
            Err(error) => {
                tracing::error!("failed to render template {path}: {error:#?}");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("failed to render template. this is a bug.\n{error}"),
                )
                    .into_response()
            }
        }
    }
}
