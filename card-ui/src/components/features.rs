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

use crate::content::Feature;

const SECTION_TITLE: &str = "چرا کارت دیجیتال؟";
const SECTION_SUBTITLE: &str =
    "با ابزارهای هوشمند ما، ارتباطات خود را موثرتر و حرفه‌ای‌تر مدیریت کن.";

#[derive(Properties, Debug, PartialEq)]
pub struct FeatureCardProps {
    pub title: AttrValue,
    pub description: AttrValue,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <article class="feature-card">
            <h3 class="feature-title">{ props.title.clone() }</h3>
            <p class="feature-description">{ props.description.clone() }</p>
        </article>
    }
}

#[derive(Properties, Debug, PartialEq)]
pub struct FeaturesSectionProps {
    pub features: Vec<Feature>,
}

/// One [`FeatureCard`] per feature, in the order given. An empty list still
/// renders the section heading and an empty grid.
#[function_component(FeaturesSection)]
pub fn features_section(props: &FeaturesSectionProps) -> Html {
    html! {
        <section class="features" id="features">
            <div class="container">
                <div class="stack features-stack">
                    <div class="stack section-heading">
                        <h2 class="section-title">{ SECTION_TITLE }</h2>
                        <p class="text-secondary">{ SECTION_SUBTITLE }</p>
                    </div>
                    <div class="feature-grid">
                        { for props.features.iter().map(|feature| html! {
                            <FeatureCard
                                title={feature.title.clone()}
                                description={feature.description.clone()}
                            />
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
