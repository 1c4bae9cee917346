use std::rc::Rc;

use bella_scene::SiteConfig;
use yew::prelude::*;

use crate::sections::{About, Contact, Footer, Hero, Menu, Navbar};
use crate::viewport::ViewportProvider;

/// Id of the optional `<script type="application/json">` holding config overrides
const CONFIG_ELEMENT_ID: &str = "site-config";

/// Read config overrides embedded in the page, falling back to the defaults
fn load_site_config() -> SiteConfig {
    let text = gloo::utils::document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());

    let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
        return SiteConfig::default();
    };

    match SiteConfig::from_json(&text) {
        Ok(config) => {
            tracing::debug!(?config, "loaded site config overrides");
            config
        }
        Err(err) => {
            tracing::warn!(error = %err, "ignoring malformed site config");
            SiteConfig::default()
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SiteConfigProviderProps {
    pub config: Rc<SiteConfig>,
    #[prop_or_default]
    pub children: Html,
}

/// Provides the site config to every section below it
#[function_component(SiteConfigProvider)]
pub fn site_config_provider(props: &SiteConfigProviderProps) -> Html {
    html! {
        <ContextProvider<Rc<SiteConfig>> context={props.config.clone()}>
            { props.children.clone() }
        </ContextProvider<Rc<SiteConfig>>>
    }
}

/// Site config from the nearest provider, or the defaults outside one
#[hook]
pub fn use_site_config() -> Rc<SiteConfig> {
    use_context::<Rc<SiteConfig>>().unwrap_or_default()
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| load_site_config());

    html! {
        <SiteConfigProvider config={config}>
            <ViewportProvider>
                <Navbar />
                <main>
                    <Hero />
                    <About />
                    <Menu />
                    <Contact />
                </main>
                <Footer />
            </ViewportProvider>
        </SiteConfigProvider>
    }
}
