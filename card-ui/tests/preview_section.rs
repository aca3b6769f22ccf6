// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Component tests for PreviewSection and the embedded CardMockup.
//
// Metric tiles show label and value verbatim, in input order. The mock card
// never changes with the section's inputs.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use support::{cleanup, count, create_mount_point, texts};
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;

use card_ui::components::card_mockup::{MOCK_NAME, SAVE_CONTACT_LABEL, SHARE_LABEL};
use card_ui::components::preview::PreviewSection;
use card_ui::content::PreviewMetric;
use card_ui::theme::theme;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

async fn render_mockup_html<C: yew::html::BaseComponent<Properties = ()>>() -> String {
    let mount = create_mount_point();
    yew::Renderer::<C>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;
    let html = mount
        .query_selector(".card-mockup")
        .unwrap()
        .expect("mock card should render")
        .outer_html();
    cleanup(&mount);
    html
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn metric_tiles_render_verbatim_in_order() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        let metrics = vec![
            PreviewMetric::new("بازدید هفتگی", "۳۲۰+"),
            PreviewMetric::new("  spaced  ", "<b>raw</b>"),
            PreviewMetric::new("", "0"),
        ];
        html! {
            <PreviewSection
                title="عنوان"
                subtitle="زیرعنوان"
                {metrics}
                theme={theme()}
            />
        }
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    assert_eq!(count(&mount, ".metric-tile"), 3);
    assert_eq!(
        texts(&mount, ".metric-tile .metric-value"),
        ["۳۲۰+", "<b>raw</b>", "0"]
    );
    assert_eq!(
        texts(&mount, ".metric-tile .metric-label"),
        ["بازدید هفتگی", "  spaced  ", ""]
    );
    // Values are text, never markup.
    assert!(mount.query_selector(".metric-value b").unwrap().is_none());

    assert_eq!(texts(&mount, ".preview-copy .section-title"), ["عنوان"]);
    assert_eq!(texts(&mount, ".preview-subtitle"), ["زیرعنوان"]);

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn no_metrics_renders_empty_row() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        html! {
            <PreviewSection title="" subtitle="" metrics={Vec::<PreviewMetric>::new()} theme={theme()} />
        }
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    assert!(mount.query_selector("section#preview .metric-row").unwrap().is_some());
    assert_eq!(count(&mount, ".metric-tile"), 0);
    assert!(mount.query_selector(".card-mockup").unwrap().is_some());

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn mockup_is_independent_of_inputs() {
    #[function_component(First)]
    fn first() -> Html {
        html! {
            <PreviewSection
                title="a"
                subtitle="b"
                metrics={vec![PreviewMetric::new("x", "1")]}
                theme={theme()}
            />
        }
    }

    #[function_component(Second)]
    fn second() -> Html {
        html! {
            <PreviewSection
                title="something else entirely"
                subtitle=""
                metrics={vec![
                    PreviewMetric::new("y", "2"),
                    PreviewMetric::new("z", "3"),
                ]}
                theme={theme()}
            />
        }
    }

    let first_html = render_mockup_html::<First>().await;
    let second_html = render_mockup_html::<Second>().await;
    assert_eq!(first_html, second_html);
}

#[wasm_bindgen_test]
async fn mockup_shows_demo_contact_and_actions() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        html! { <PreviewSection title="" subtitle="" metrics={Vec::<PreviewMetric>::new()} theme={theme()} /> }
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let card = mount
        .query_selector(".card-mockup")
        .unwrap()
        .expect("mock card should render");
    let text = card.text_content().unwrap_or_default();
    assert!(text.contains(MOCK_NAME), "name missing");
    assert!(text.contains("hello@mahsa.co"), "email missing");

    assert_eq!(
        texts(&card, ".card-actions button"),
        [SAVE_CONTACT_LABEL, SHARE_LABEL]
    );

    let style = card.get_attribute("style").unwrap_or_default();
    assert!(
        style.contains("linear-gradient(160deg, #9bd0cb 0%, #ffffff 90%)"),
        "mock card should use the light secondary gradient, got {style}"
    );

    cleanup(&mount);
}
