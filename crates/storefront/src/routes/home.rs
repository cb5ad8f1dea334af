//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tower_sessions::Session;
use tracing::instrument;

use crate::filters;
use crate::models::Flash;
use crate::models::flash::take_flashes;
use crate::models::session::load_cart;

/// A selling point shown on the landing page.
#[derive(Clone)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

/// Static landing-page features.
fn get_features() -> Vec<Feature> {
    let feature = |title: &str, description: &str| Feature {
        title: title.to_string(),
        description: description.to_string(),
    };

    vec![
        feature(
            "Maximum Support",
            "Advanced support technology for high-impact activities",
        ),
        feature(
            "Ultimate Comfort",
            "Seamless construction with premium moisture-wicking fabric",
        ),
        feature(
            "Performance Ready",
            "Built for athletes who demand the best from their gear",
        ),
    ]
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home/index.html")]
pub struct HomeTemplate {
    pub features: Vec<Feature>,
    pub cart_count: u32,
    pub flashes: Vec<Flash>,
}

/// Display the home page.
#[instrument(skip(session))]
pub async fn home(session: Session) -> impl IntoResponse {
    let cart = load_cart(&session).await;

    HomeTemplate {
        features: get_features(),
        cart_count: cart.item_count(),
        flashes: take_flashes(&session).await,
    }
}
