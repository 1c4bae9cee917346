use bella_scene::SectionId;
use yew::prelude::*;

use crate::components::{OrnamentCanvas, Reveal};

/// Table booking form.
///
/// Submitting only suppresses the browser's default navigation; bookings are
/// not sent anywhere.
#[function_component(BookingForm)]
pub fn booking_form() -> Html {
    let on_submit = Callback::from(|event: SubmitEvent| {
        event.prevent_default();
        tracing::debug!("booking form submitted");
    });

    html! {
        <form class="booking-form" onsubmit={on_submit}>
            <div class="field">
                <input type="text" name="name" placeholder="Your Name" />
            </div>
            <div class="field">
                <input type="email" name="email" placeholder="Your Email" />
            </div>
            <div class="field">
                <input type="datetime-local" name="datetime" placeholder="Date & Time" />
            </div>
            <div class="field">
                <textarea name="requests" placeholder="Special Requests" />
            </div>
            <button type="submit" class="btn btn-primary btn-block">{ "Reserve Now" }</button>
        </form>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id={SectionId::Contact.anchor()} class="section contact">
            <OrnamentCanvas section={SectionId::Contact} />
            <div class="overlay contact-texture" />

            <div class="section-content centered">
                <Reveal>
                    <h2 class="section-title">{ "Book a Table" }</h2>
                    <p class="section-lead">
                        { "Reserve your table and enjoy an unforgettable dining experience." }
                    </p>
                </Reveal>
                <Reveal delay_ms={200}>
                    <BookingForm />
                </Reveal>
            </div>
        </section>
    }
}
