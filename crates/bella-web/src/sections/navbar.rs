use bella_scene::SectionId;
use yew::prelude::*;

use crate::app::use_site_config;
use crate::viewport::use_viewport;

/// Link text for a section anchor
fn nav_label(section: SectionId) -> &'static str {
    match section {
        SectionId::Hero => "Home",
        SectionId::About => "About",
        SectionId::Menu => "Menu",
        SectionId::Contact => "Contact",
    }
}

fn nav_links(sections: &[SectionId], onclick: Callback<MouseEvent>) -> Html {
    sections
        .iter()
        .map(|section| {
            html! {
                <li key={section.anchor()}>
                    <a class="nav-link" href={format!("#{}", section.anchor())} onclick={onclick.clone()}>
                        { nav_label(*section) }
                    </a>
                </li>
            }
        })
        .collect()
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let config = use_site_config();
    let viewport = use_viewport();
    let compact = viewport.is_compact(config.nav_breakpoint);
    let scrolled = viewport.is_scrolled(config.scroll_threshold);
    let menu_open = use_state_eq(|| false);

    // Leaving compact mode closes the drop-down list
    {
        let menu_open = menu_open.clone();
        use_effect_with(compact, move |compact| {
            if !*compact {
                menu_open.set(false);
            }
            || ()
        });
    }

    let on_toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let on_navigate = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <nav class={classes!("navbar", scrolled.then_some("navbar-scrolled"))}>
            <div class="navbar-inner">
                <h1 class="brand">{ config.brand.clone() }</h1>
                if !compact {
                    <ul class="nav-links">
                        { nav_links(&config.nav_sections, on_navigate.clone()) }
                    </ul>
                }
                <div class="nav-actions">
                    if compact {
                        <button
                            type="button"
                            class="nav-toggle"
                            aria-expanded={(*menu_open).to_string()}
                            onclick={on_toggle}
                        >
                            { "Menu" }
                        </button>
                    } else {
                        <a class="btn btn-primary" href="#contact">{ "Book Table" }</a>
                    }
                </div>
            </div>
            if compact && *menu_open {
                <ul class="nav-links nav-links-compact">
                    { nav_links(&config.nav_sections, on_navigate) }
                    <li>
                        <a class="btn btn-primary" href="#contact">{ "Book Table" }</a>
                    </li>
                </ul>
            }
        </nav>
    }
}
