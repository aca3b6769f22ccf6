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

const RIGHTS_NOTICE: &str = "همهٔ حقوق محفوظ است.";
const CONTACT_PREFIX: &str = "تماس: ";

/// Calendar year of the host clock, read on every call.
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

pub fn copyright_line(year: u32, company: &str) -> String {
    format!("© {year} {company}. {RIGHTS_NOTICE}")
}

/// `mailto:` link for `email`. The address is not escaped or validated.
pub fn mailto_href(email: &str) -> String {
    format!("mailto:{email}")
}

#[derive(Properties, Debug, PartialEq)]
pub struct FooterSectionProps {
    pub company: AttrValue,
    pub contact_email: AttrValue,
}

#[function_component(FooterSection)]
pub fn footer_section(props: &FooterSectionProps) -> Html {
    let copyright = copyright_line(current_year(), &props.company);
    let href = mailto_href(&props.contact_email);

    html! {
        <footer class="footer">
            <div class="container">
                <div class="footer-row">
                    <p class="footer-copyright">{ copyright }</p>
                    <a class="footer-contact" {href}>
                        { CONTACT_PREFIX }{ props.contact_email.clone() }
                    </a>
                </div>
            </div>
        </footer>
    }
}
