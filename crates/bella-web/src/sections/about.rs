use bella_scene::SectionId;
use yew::prelude::*;

use crate::app::use_site_config;
use crate::components::{OrnamentCanvas, Reveal};

const INTERIOR_IMAGE: &str = "img/about-interior.jpg";

#[function_component(About)]
pub fn about() -> Html {
    let config = use_site_config();
    let show_more = use_state_eq(|| false);

    let on_learn_more = {
        let show_more = show_more.clone();
        Callback::from(move |_: MouseEvent| show_more.set(!*show_more))
    };

    html! {
        <section id={SectionId::About.anchor()} class="section about">
            <div class="overlay about-overlay" />
            <OrnamentCanvas section={SectionId::About} />
            <div class="overlay about-texture" />

            <div class="section-content about-grid">
                <div class="about-text">
                    <Reveal>
                        <h2 class="section-title">{ format!("About {}", config.brand) }</h2>
                        <p class="section-copy">
                            { "At " }
                            <span class="accent">{ config.brand.clone() }</span>
                            { ", every plate tells a story of passion and precision. Our chefs \
                               blend the finest ingredients with modern artistry to deliver \
                               dishes that are as visually stunning as they are flavorful." }
                        </p>
                        if *show_more {
                            <div class="section-copy about-more">
                                { "From handcrafted sauces to locally sourced produce, every \
                                   detail reflects our dedication to excellence. Whether it's a \
                                   romantic dinner or a casual gathering, " }
                                { config.brand.clone() }
                                { " promises an unforgettable dining experience." }
                            </div>
                        }
                        <div class="about-actions">
                            <button
                                type="button"
                                class="btn btn-primary"
                                aria-expanded={(*show_more).to_string()}
                                onclick={on_learn_more}
                            >
                                { "Learn More" }
                            </button>
                            <a class="btn btn-ghost" href={format!("#{}", SectionId::Menu.anchor())}>
                                { "Our Menu" }
                            </a>
                        </div>
                    </Reveal>
                </div>

                <div class="about-media">
                    <Reveal delay_ms={100}>
                        <div class="about-frame">
                            <img src={INTERIOR_IMAGE} alt="Restaurant interior" />
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
