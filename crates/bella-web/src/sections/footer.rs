use yew::prelude::*;

use crate::app::use_site_config;

#[function_component(Footer)]
pub fn footer() -> Html {
    let config = use_site_config();
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="footer">
            <hr />
            <p>{ config.copyright(year) }</p>
        </footer>
    }
}
