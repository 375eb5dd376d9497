//! Server-side rendering of the dashboard routes
//!
//! Each route renders its screen component with the entity the server
//! fetched, wrapped in the page shell. The shell embeds the client
//! configuration and that entity as a [`ScreenSeed`], then boots the wasm
//! bundle, which takes over the `#continuum` element without fetching the
//! entity again.

use continuum_app::api::{Macrozone, Region};
use continuum_app::app::MAIN_STYLE;
use continuum_app::config::CONFIG_ELEMENT_ID;
use continuum_app::context::ConfigScope;
use continuum_app::nav::Route;
use continuum_app::pages::macrozone_dashboard::MacrozoneScreen;
use continuum_app::pages::main_dashboard::RegionsScreen;
use continuum_app::pages::region_dashboard::RegionScreen;
use continuum_app::seed::{ScreenSeed, SEED_ELEMENT_ID};
use continuum_app::state::Screen;
use continuum_app::{ClientConfig, ROOT_ELEMENT_ID};
use leptos::prelude::*;
use reactive_graph::owner::Owner;
use serde::Serialize;

const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const BOOTSTRAP_ICONS_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css";

/// Loads the bundle built from `continuum-app` with the `csr` feature
const BOOT_SCRIPT: &str =
    "import init, { mount } from '/pkg/continuum-dashboard.js'; init().then(() => mount());";

pub fn regions_page(config: &ClientConfig, screen: Screen<Vec<Region>>) -> String {
    let seed = ScreenSeed::new(&Route::Regions, &screen);
    render_page("Sensor Continuum", config, seed, move || {
        view! { <RegionsScreen screen=screen /> }.into_any()
    })
}

pub fn region_page(config: &ClientConfig, name: &str, screen: Screen<Region>) -> String {
    let route = Route::Region {
        name: name.to_string(),
    };
    let seed = ScreenSeed::new(&route, &screen);
    render_page(&format!("{name} - Sensor Continuum"), config, seed, move || {
        view! { <RegionScreen screen=screen /> }.into_any()
    })
}

pub fn macrozone_page(
    config: &ClientConfig,
    region: &str,
    macrozone: &str,
    screen: Screen<Macrozone>,
) -> String {
    let title = format!("{macrozone} - Sensor Continuum");
    let (region, macrozone) = (region.to_string(), macrozone.to_string());
    let route = Route::Macrozone {
        region: region.clone(),
        macrozone: macrozone.clone(),
    };
    let seed = ScreenSeed::new(&route, &screen);
    render_page(&title, config, seed, move || {
        view! { <MacrozoneScreen region=region macrozone=macrozone screen=screen /> }.into_any()
    })
}

/// `value` as JSON that is safe inside a `<script>` element
fn embedded_json<T: Serialize>(value: &T) -> Option<String> {
    match serde_json::to_string(value) {
        Ok(json) => Some(json.replace("</", "<\\/")),
        Err(e) => {
            tracing::warn!("failed to serialise embedded data: {}", e);
            None
        }
    }
}

fn render_page(
    title: &str,
    config: &ClientConfig,
    seed: Option<ScreenSeed>,
    screen: impl FnOnce() -> AnyView + Send + 'static,
) -> String {
    let title = title.to_string();
    let config_json = embedded_json(config).unwrap_or_else(|| "{}".to_string());
    let seed_json = seed.as_ref().and_then(embedded_json);
    let config = config.clone();

    let owner = Owner::new_root(None);
    let html = owner.with(move || {
        view! {
            <html lang="it">
                <head>
                    <meta charset="utf-8" />
                    <meta name="viewport" content="width=device-width, initial-scale=1" />
                    <title>{title}</title>
                    <link rel="stylesheet" href=BOOTSTRAP_CSS />
                    <link rel="stylesheet" href=BOOTSTRAP_ICONS_CSS />
                    <script id=CONFIG_ELEMENT_ID type="application/json" inner_html=config_json></script>
                    {seed_json.map(|json| view! {
                        <script id=SEED_ELEMENT_ID type="application/json" inner_html=json></script>
                    })}
                </head>
                <body>
                    <div id=ROOT_ELEMENT_ID>
                        <main class="app" style=MAIN_STYLE>
                            <ConfigScope config=config>{screen()}</ConfigScope>
                        </main>
                    </div>
                    <script type="module" inner_html=BOOT_SCRIPT></script>
                </body>
            </html>
        }
        .into_view()
        .to_html()
    });
    format!("<!DOCTYPE html>{html}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ClientConfig {
        ClientConfig {
            timezone: "UTC".to_string(),
            ..ClientConfig::default()
        }
    }

    #[test]
    fn shell_embeds_config_and_boot_script() {
        let html = region_page(&config(), "Lazio", Screen::Loading);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"id="continuum-config""#), "{html}");
        assert!(html.contains(r#""timezone":"UTC""#), "{html}");
        assert!(html.contains("/pkg/continuum-dashboard.js"));
        assert!(html.contains(r#"id="continuum""#));
    }

    #[test]
    fn embedded_config_cannot_close_its_script() {
        let mut config = config();
        config.timezone = "</script><script>alert(1)".to_string();

        let json = embedded_json(&config).unwrap();
        assert!(!json.contains("</script>"));
        assert!(json.contains(r"<\/script>"));
    }

    #[test]
    fn regions_are_rendered_as_cards() {
        let regions = vec![
            Region {
                name: "Lazio".to_string(),
                macrozone_count: 2,
                macrozones: vec![],
                hubs: vec![],
            },
            Region {
                name: "Umbria".to_string(),
                macrozone_count: 1,
                macrozones: vec![],
                hubs: vec![],
            },
        ];

        let html = regions_page(&config(), Screen::Ready(regions));
        assert!(html.contains("Sensor Continuum"));
        assert!(html.contains("Lazio"));
        assert!(html.contains("Umbria"));
        assert!(html.contains("/region/Lazio"));
    }

    #[test]
    fn failed_region_renders_not_found() {
        let html = region_page(&config(), "Lazio", Screen::NotFound);
        assert!(html.contains("Regione non trovata."));
        assert!(!html.contains("macrozone-card"));
    }

    #[test]
    fn titles_are_escaped() {
        let html = region_page(&config(), "<b>Lazio</b>", Screen::Loading);
        assert!(!html.contains("<title><b>"));
    }

    fn seed_of(html: &str) -> Option<ScreenSeed> {
        let marker = r#"id="continuum-seed" type="application/json">"#;
        let start = html.find(marker)? + marker.len();
        let end = start + html[start..].find("</script>")?;
        serde_json::from_str(&html[start..end].replace(r"<\/", "</")).ok()
    }

    #[test]
    fn page_embeds_fetched_entity_for_its_route() {
        let region = Region {
            name: "Lazio".to_string(),
            macrozone_count: 1,
            macrozones: vec![],
            hubs: vec![],
        };
        let html = region_page(&config(), "Lazio", Screen::Ready(region.clone()));

        let seed = seed_of(&html).expect("seed element");
        assert_eq!(seed.path, "/region/Lazio");
        let restored: Region = serde_json::from_value(seed.entity.unwrap()).unwrap();
        assert_eq!(restored, region);
    }

    #[test]
    fn not_found_page_seeds_the_failure() {
        let html = macrozone_page(&config(), "Lazio", "Roma Nord", Screen::NotFound);

        let seed = seed_of(&html).expect("seed element");
        assert_eq!(seed.path, "/macrozone/Lazio/Roma%20Nord");
        assert_eq!(seed.entity, None);
    }

    #[test]
    fn loading_page_has_no_seed() {
        let html = region_page(&config(), "Lazio", Screen::Loading);
        assert!(!html.contains("continuum-seed"));
    }

    #[test]
    fn seeded_entity_cannot_close_its_script() {
        let region = Region {
            name: "</script><script>alert(1)".to_string(),
            macrozone_count: 0,
            macrozones: vec![],
            hubs: vec![],
        };
        let html = regions_page(&config(), Screen::Ready(vec![region]));

        let seed = seed_of(&html).expect("seed element");
        assert_eq!(seed.path, "/");
        assert!(!html.contains("</script><script>alert(1)"));
    }
}
