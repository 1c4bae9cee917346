use bella_scene::SectionId;
use yew::prelude::*;

use crate::app::use_site_config;
use crate::components::OrnamentCanvas;

/// Intro animation delays: title, subtitle, call-to-action buttons
const INTRO_DELAYS_MS: [u32; 3] = [0, 400, 1000];

fn intro_style(delay_ms: u32) -> String {
    format!("animation-delay: {}ms;", delay_ms)
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let config = use_site_config();
    let [title_delay, subtitle_delay, cta_delay] = INTRO_DELAYS_MS;

    html! {
        <section id={SectionId::Hero.anchor()} class="section hero">
            <OrnamentCanvas section={SectionId::Hero} />
            <div class="overlay hero-overlay" />

            <div class="hero-content">
                <h1 class="hero-title intro-drop" style={intro_style(title_delay)}>
                    { "Fine Dining Experience" }
                </h1>
                <p class="hero-subtitle intro-rise" style={intro_style(subtitle_delay)}>
                    { "Welcome to " }
                    <span class="accent">{ config.brand.clone() }</span>
                    { ", where culinary artistry meets ambiance." }
                </p>
                <div class="hero-actions intro-grow" style={intro_style(cta_delay)}>
                    <a class="btn btn-primary" href={format!("#{}", SectionId::Menu.anchor())}>
                        { "Explore Menu" }
                    </a>
                    <a class="btn btn-outline" href={format!("#{}", SectionId::Contact.anchor())}>
                        { "Book a Table" }
                    </a>
                </div>
            </div>
        </section>
    }
}
