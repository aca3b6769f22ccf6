/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Full-bleed gradient banner at the top of the page.

use yew::prelude::*;

use crate::theme::Theme;

#[derive(Properties, Debug, PartialEq)]
pub struct HeroSectionProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    pub cta_label: AttrValue,
    /// Used verbatim as the call-to-action `href`.
    pub cta_href: AttrValue,
    pub theme: &'static Theme,
}

/// Centered heading, sub-heading and a single call-to-action link over the
/// primary-to-secondary gradient.
#[function_component(HeroSection)]
pub fn hero_section(props: &HeroSectionProps) -> Html {
    let style = format!("background: {};", props.theme.hero_gradient());

    html! {
        <section class="hero" {style}>
            <div class="container">
                <div class="stack hero-stack">
                    <h1 class="hero-title">{ props.title.clone() }</h1>
                    <p class="hero-subtitle">{ props.subtitle.clone() }</p>
                    <a class="btn btn-cta" href={props.cta_href.clone()}>
                        { props.cta_label.clone() }
                    </a>
                </div>
            </div>
        </section>
    }
}
