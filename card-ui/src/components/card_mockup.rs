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

//! Demo business card shown next to the preview metrics.
//!
//! The card is placeholder content: it does not depend on any section input.

use yew::prelude::*;

use crate::theme::Theme;

pub const MOCK_INITIAL: &str = "م";
pub const MOCK_NAME: &str = "مهسا عباسی";
pub const MOCK_ROLE: &str = "مدیر توسعه بازار | Mahsa.co";
pub const MOCK_CONTACT_TITLE: &str = "اطلاعات تماس";
pub const MOCK_CONTACT_LINES: [&str; 3] = [
    "تلفن: ۰۹۱۲۱۲۳۴۵۶۷",
    "ایمیل: hello@mahsa.co",
    "وب‌سایت: mahsa.co",
];
pub const MOCK_QUOTE: &str =
    "«با کارت دیجیتال ایران‌پروس در کمتر از یک دقیقه ارتباط برقرار کن و همیشه یک قدم جلوتر باش!»";
pub const SAVE_CONTACT_LABEL: &str = "ذخیره در مخاطبین";
pub const SHARE_LABEL: &str = "اشتراک‌گذاری";

#[derive(Properties, Debug, PartialEq)]
pub struct CardMockupProps {
    pub theme: &'static Theme,
}

#[function_component(CardMockup)]
pub fn card_mockup(props: &CardMockupProps) -> Html {
    let style = format!("background: {};", props.theme.mockup_gradient());

    html! {
        <div class="card-mockup" {style}>
            <div class="card-identity">
                <div class="card-avatar">{ MOCK_INITIAL }</div>
                <div class="stack">
                    <h6 class="card-name">{ MOCK_NAME }</h6>
                    <p class="text-secondary">{ MOCK_ROLE }</p>
                </div>
            </div>
            <hr class="divider" />
            <div class="stack card-contact">
                <p class="card-contact-title">{ MOCK_CONTACT_TITLE }</p>
                <div class="stack card-contact-lines">
                    { for MOCK_CONTACT_LINES.iter().map(|line| html! { <p>{ *line }</p> }) }
                </div>
            </div>
            <hr class="divider" />
            <p class="text-secondary card-quote">{ MOCK_QUOTE }</p>
            <div class="card-actions">
                <button type="button" class="btn btn-contained btn-block">
                    { SAVE_CONTACT_LABEL }
                </button>
                <button type="button" class="btn btn-outlined btn-block">
                    { SHARE_LABEL }
                </button>
            </div>
        </div>
    }
}
