use bella_scene::menu::{self, Dish};
use bella_scene::SectionId;
use yew::prelude::*;

use crate::components::{OrnamentCanvas, Reveal};

#[derive(Properties, PartialEq)]
pub struct DishCardProps {
    pub dish: Dish,
}

#[function_component(DishCard)]
pub fn dish_card(props: &DishCardProps) -> Html {
    let dish = props.dish;
    html! {
        <article class="dish-card">
            <div class="dish-media">
                <img src={dish.image} alt={dish.name} loading="lazy" />
                <div class="dish-hover">{ dish.name }</div>
            </div>
            <div class="dish-body">
                <h3 class="dish-name">{ dish.name }</h3>
                <div class="dish-footer">
                    <p class="dish-price">{ dish.price }</p>
                    <a class="btn btn-primary btn-small" href={format!("#{}", SectionId::Contact.anchor())}>
                        { "Order" }
                    </a>
                </div>
            </div>
        </article>
    }
}

#[function_component(Menu)]
pub fn menu() -> Html {
    html! {
        <section id={SectionId::Menu.anchor()} class="section menu">
            <OrnamentCanvas section={SectionId::Menu} />
            <div class="overlay menu-texture" />

            <div class="section-content centered">
                <Reveal>
                    <h2 class="section-title">{ "Our Signature Menu" }</h2>
                    <p class="section-lead">{ "A delightful selection of dishes made to perfection." }</p>
                </Reveal>

                <div class="dish-grid">
                    { for menu::dishes().iter().enumerate().map(|(i, dish)| html! {
                        <Reveal key={dish.name} delay_ms={menu::reveal_delay_ms(i)}>
                            <DishCard dish={*dish} />
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}
