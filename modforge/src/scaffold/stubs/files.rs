//! Built-in stub contents
//!
//! Projects override any of these by dropping a file with the same name in
//! their stub directory.

/// Migration stub (SQL)
pub const MIGRATION_STUB: &str = r"-- {{ class }}: create the {{ table_name }} table for {{ module }}
CREATE TABLE {{ table_name }} (
    id BIGSERIAL PRIMARY KEY,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

/// Model stub
pub const MODEL_STUB: &str = r#"//! {{ title }} model for the `{{ module }}` module

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A row of the `{{ table_name }}` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct {{ class }} {
    /// Primary key
    pub id: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl {{ class }} {
    /// Backing table
    pub const TABLE: &'static str = "{{ table_name }}";
}
"#;

/// Resource controller stub
pub const CONTROLLER_STUB: &str = r#"//! `{{ namespace }}::{{ class }}`

use axum::{extract::Path, http::StatusCode, response::IntoResponse, Json};

use {{ full_model_class }};

/// Resource handlers for [`{{ model_class }}`], mounted under `/{{ route_prefix }}`
pub struct {{ class }};

impl {{ class }} {
    /// List {{ route_prefix }}
    pub async fn index() -> impl IntoResponse {
        Json(Vec::<{{ model_class }}>::new())
    }

    /// Store a new {{ model_snake }}
    pub async fn store(Json({{ model_snake }}): Json<{{ model_class }}>) -> impl IntoResponse {
        (StatusCode::CREATED, Json({{ model_snake }}))
    }

    /// Show the {{ model_snake }} bound to `{{ "{" ~ model_variable ~ "}" }}`
    pub async fn show(Path({{ model_snake }}_id): Path<i64>) -> impl IntoResponse {
        let _ = {{ model_snake }}_id;
        StatusCode::NOT_FOUND
    }

    /// Update the {{ model_snake }} bound to `{{ "{" ~ model_variable ~ "}" }}`
    pub async fn update(
        Path({{ model_snake }}_id): Path<i64>,
        Json({{ model_snake }}): Json<{{ model_class }}>,
    ) -> impl IntoResponse {
        let _ = {{ model_snake }}_id;
        Json({{ model_snake }})
    }

    /// Delete the {{ model_snake }} bound to `{{ "{" ~ model_variable ~ "}" }}`
    pub async fn destroy(Path({{ model_snake }}_id): Path<i64>) -> impl IntoResponse {
        let _ = {{ model_snake }}_id;
        StatusCode::NO_CONTENT
    }
}
"#;

/// JSON API controller stub
pub const API_CONTROLLER_STUB: &str = r#"//! `{{ namespace }}::{{ class }}` (JSON API)

use axum::{extract::Path, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use {{ full_model_class }};

/// JSON handlers for [`{{ model_class }}`], mounted under `/api/.../{{ route_prefix }}`
pub struct {{ class }};

impl {{ class }} {
    /// List {{ route_prefix }}
    pub async fn index() -> impl IntoResponse {
        Json(json!({ "data": Vec::<{{ model_class }}>::new() }))
    }

    /// Store a new {{ model_snake }}
    pub async fn store(Json({{ model_snake }}): Json<{{ model_class }}>) -> impl IntoResponse {
        (StatusCode::CREATED, Json(json!({ "data": {{ model_snake }} })))
    }

    /// Show the {{ model_snake }} bound to `{{ "{" ~ model_variable ~ "}" }}`
    pub async fn show(Path({{ model_snake }}_id): Path<i64>) -> impl IntoResponse {
        (StatusCode::NOT_FOUND, Json(json!({ "id": {{ model_snake }}_id })))
    }

    /// Update the {{ model_snake }} bound to `{{ "{" ~ model_variable ~ "}" }}`
    pub async fn update(
        Path({{ model_snake }}_id): Path<i64>,
        Json({{ model_snake }}): Json<{{ model_class }}>,
    ) -> impl IntoResponse {
        let _ = {{ model_snake }}_id;
        Json(json!({ "data": {{ model_snake }} }))
    }

    /// Delete the {{ model_snake }} bound to `{{ "{" ~ model_variable ~ "}" }}`
    pub async fn destroy(Path({{ model_snake }}_id): Path<i64>) -> impl IntoResponse {
        let _ = {{ model_snake }}_id;
        StatusCode::NO_CONTENT
    }
}
"#;

/// Web routes stub
pub const ROUTES_WEB_STUB: &str = r#"//! Web routes for the `{{ module }}` module

use axum::{routing::get, Router};

use {{ namespace }}::{{ controller }};

/// Routes mounted under the module prefix
pub fn routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/{{ route_prefix }}",
            get({{ controller }}::index).post({{ controller }}::store),
        )
        .route(
            "/{{ route_prefix }}/{{ "{" ~ model_variable ~ "}" }}",
            get({{ controller }}::show)
                .put({{ controller }}::update)
                .delete({{ controller }}::destroy),
        )
}
"#;

/// API routes stub
pub const ROUTES_API_STUB: &str = r#"//! API routes for the `{{ module }}` module

use axum::{routing::get, Router};

use {{ namespace }}::{{ controller }};

/// Routes mounted under `/api/<module>`
pub fn routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/{{ route_prefix }}",
            get({{ controller }}::index).post({{ controller }}::store),
        )
        .route(
            "/{{ route_prefix }}/{{ "{" ~ model_variable ~ "}" }}",
            get({{ controller }}::show)
                .put({{ controller }}::update)
                .delete({{ controller }}::destroy),
        )
}
"#;

/// View stub (Askama)
pub const VIEW_STUB: &str = r#"{% raw %}{% extends "layouts/app.html" %}

{% block title %}{% endraw %}{{ title }} - {{ view }}{% raw %}{% endblock %}

{% block content %}{% endraw %}
<section id="{{ route_prefix }}-{{ view }}">
    <h1>{{ title }}</h1>
</section>
{% raw %}{% endblock %}{% endraw %}
"#;

/// UI component stub (Vue single-file component)
pub const VUE_COMPONENT_STUB: &str = r"<template>
  <div class='{{ component }}'>
    <h1>{% raw %}{{ heading }}{% endraw %}</h1>
  </div>
</template>

<script>
export default {
  name: '{{ class }}',
  data() {
    return { heading: '{{ title }}' };
  },
};
</script>
";
