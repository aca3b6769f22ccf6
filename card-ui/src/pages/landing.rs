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
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use yew::prelude::*;

use crate::components::features::FeaturesSection;
use crate::components::footer::FooterSection;
use crate::components::hero::HeroSection;
use crate::components::preview::PreviewSection;
use crate::components::top_bar::TopBar;
use crate::content;
use crate::theme::Theme;

#[derive(Properties, Debug, PartialEq)]
pub struct LandingPageProps {
    pub theme: &'static Theme,
}

/// The whole page: header, then hero, features and preview inside `<main>`,
/// then the footer. `<main>` grows so the footer sits at the bottom of short
/// viewports.
#[function_component(LandingPage)]
pub fn landing_page(props: &LandingPageProps) -> Html {
    let theme = props.theme;
    let hero = content::hero();
    let preview = content::preview();
    let footer = content::footer();

    html! {
        <div class="landing-page">
            <TopBar links={content::nav_links()} />
            <main class="main-content">
                <HeroSection
                    title={hero.title}
                    subtitle={hero.subtitle}
                    cta_label={hero.cta_label}
                    cta_href={hero.cta_href}
                    {theme}
                />
                <FeaturesSection features={content::features()} />
                <PreviewSection
                    title={preview.title}
                    subtitle={preview.subtitle}
                    metrics={content::preview_metrics()}
                    {theme}
                />
            </main>
            <FooterSection company={footer.company} contact_email={footer.contact_email} />
        </div>
    }
}
