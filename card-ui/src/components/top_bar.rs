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

use crate::constants::BRAND_LABEL;
use crate::content::NavigationLink;

const LOGIN_LABEL: &str = "ورود";
const LOGIN_HREF: &str = "#login";
const SIGNUP_LABEL: &str = "ثبت‌نام";
const SIGNUP_HREF: &str = "#signup";

#[derive(Properties, Debug, PartialEq)]
pub struct TopBarProps {
    pub links: Vec<NavigationLink>,
}

/// Sticky header: brand, one button per navigation link (hidden on small
/// screens), and the login / sign-up actions.
#[function_component(TopBar)]
pub fn top_bar(props: &TopBarProps) -> Html {
    html! {
        <header class="app-bar">
            <div class="toolbar">
                <span class="brand">{ BRAND_LABEL }</span>
                <nav class="nav-links">
                    { for props.links.iter().map(|link| html! {
                        <a class="btn btn-text btn-nav" href={link.href.clone()}>
                            { link.label.clone() }
                        </a>
                    }) }
                </nav>
                <div class="toolbar-actions">
                    <a class="btn btn-text btn-login" href={LOGIN_HREF}>{ LOGIN_LABEL }</a>
                    <a class="btn btn-contained btn-pill btn-signup" href={SIGNUP_HREF}>
                        { SIGNUP_LABEL }
                    </a>
                </div>
            </div>
        </header>
    }
}
