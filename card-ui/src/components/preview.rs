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

use yew::prelude::*;

use crate::components::card_mockup::CardMockup;
use crate::content::PreviewMetric;
use crate::theme::Theme;

#[derive(Properties, Debug, PartialEq)]
pub struct PreviewSectionProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    pub metrics: Vec<PreviewMetric>,
    pub theme: &'static Theme,
}

/// Two columns: copy and metric tiles on one side, the demo card on the
/// other. Both collapse to a single column on narrow screens.
#[function_component(PreviewSection)]
pub fn preview_section(props: &PreviewSectionProps) -> Html {
    html! {
        <section class="preview" id="preview">
            <div class="container">
                <div class="preview-grid">
                    <div class="stack preview-copy">
                        <h2 class="section-title">{ props.title.clone() }</h2>
                        <p class="text-secondary preview-subtitle">{ props.subtitle.clone() }</p>
                        <hr class="divider" />
                        <div class="metric-row">
                            { for props.metrics.iter().map(|metric| html! {
                                <div class="metric-tile">
                                    <div class="metric-value">{ metric.value.clone() }</div>
                                    <div class="metric-label">{ metric.label.clone() }</div>
                                </div>
                            }) }
                        </div>
                    </div>
                    <div class="preview-card">
                        <CardMockup theme={props.theme} />
                    </div>
                </div>
            </div>
        </section>
    }
}
