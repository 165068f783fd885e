//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;

use crate::filters;

/// A service offered by the shop.
pub struct Service {
    pub name: &'static str,
    pub duration_minutes: u32,
    pub price_rupees: u32,
}

/// The shop's service menu.
pub const SERVICES: [Service; 4] = [
    Service {
        name: "Regular Haircut",
        duration_minutes: 30,
        price_rupees: 200,
    },
    Service {
        name: "Styling",
        duration_minutes: 25,
        price_rupees: 250,
    },
    Service {
        name: "Beard Trim",
        duration_minutes: 15,
        price_rupees: 120,
    },
    Service {
        name: "Shave",
        duration_minutes: 20,
        price_rupees: 150,
    },
];

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub services: &'static [Service],
}

/// Display the home page.
pub async fn home() -> HomeTemplate {
    HomeTemplate {
        services: &SERVICES,
    }
}
