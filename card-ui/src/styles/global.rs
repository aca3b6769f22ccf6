// SPDX-License-Identifier: MIT OR Apache-2.0

//! Baseline and section styles for the landing page, derived from the theme.
//!
//! Authored left-to-right; the style cache mirrors them when the theme runs
//! right-to-left.

use super::sheet::{Rule, StyleSheet};
use crate::constants::{BREAKPOINT_MD, BREAKPOINT_SM, CONTAINER_MAX_WIDTH};
use crate::theme::Theme;

/// Build the full stylesheet of the page.
pub fn page_stylesheet(theme: &Theme) -> StyleSheet {
    let sheet = baseline(StyleSheet::new(), theme);
    let sheet = layout(sheet, theme);
    let sheet = buttons(sheet, theme);
    let sheet = sections(sheet, theme);
    responsive(sheet)
}

fn baseline(sheet: StyleSheet, theme: &Theme) -> StyleSheet {
    let p = &theme.palette;
    sheet
        .rule(Rule::new("*, *::before, *::after").decl("box-sizing", "inherit"))
        .rule(
            Rule::new("html")
                .decl("box-sizing", "border-box")
                .decl("-webkit-font-smoothing", "antialiased")
                .decl("-moz-osx-font-smoothing", "grayscale")
                .decl("-webkit-text-size-adjust", "100%"),
        )
        .rule(
            Rule::new("body")
                .decl("margin", "0")
                .decl("font-family", theme.typography.font_family)
                .decl("background-color", p.background_default.to_string())
                .decl("color", p.body_text.to_string())
                .decl("line-height", "1.5"),
        )
        .rule(
            Rule::new("a")
                .decl("text-decoration", "none")
                .decl("color", "inherit"),
        )
        .rule(Rule::new("h1, h2, h3, h6, p").decl("margin", "0"))
}

fn layout(sheet: StyleSheet, theme: &Theme) -> StyleSheet {
    let p = &theme.palette;
    sheet
        .rule(
            Rule::new(".landing-page")
                .decl("min-height", "100vh")
                .decl("display", "flex")
                .decl("flex-direction", "column")
                .decl("background-color", p.background_default.to_string())
                .decl("color", p.text_primary.to_string()),
        )
        .rule(Rule::new(".main-content").decl("flex-grow", "1"))
        .rule(
            Rule::new(".container")
                .decl("width", "100%")
                .decl("max-width", format!("{CONTAINER_MAX_WIDTH}px"))
                .decl("margin", "0 auto")
                .decl("padding-left", theme.spacing(2.0))
                .decl("padding-right", theme.spacing(2.0)),
        )
        .rule(
            Rule::new(".stack")
                .decl("display", "flex")
                .decl("flex-direction", "column"),
        )
        .rule(Rule::new(".text-secondary").decl("color", p.text_secondary.to_string()))
        .rule(
            Rule::new(".divider")
                .decl("border", "0")
                .decl("border-bottom", format!("1px solid {}", p.divider))
                .decl("margin", "0"),
        )
        .rule(
            Rule::new(".app-bar")
                .decl("position", "sticky")
                .decl("top", "0")
                .decl("z-index", "1100")
                .decl("background-color", p.background_paper.to_string())
                .decl("color", p.text_primary.to_string())
                .decl("border-bottom", format!("1px solid {}", p.divider)),
        )
        .rule(
            Rule::new(".toolbar")
                .decl("display", "flex")
                .decl("align-items", "center")
                .decl("justify-content", "space-between")
                .decl("gap", theme.spacing(2.0))
                .decl("min-height", "64px")
                .decl("padding", format!("0 {}", theme.spacing(2.0))),
        )
        .rule(
            Rule::new(".brand")
                .decl("font-size", "1.25rem")
                .decl("font-weight", "800"),
        )
        .rule(
            Rule::new(".nav-links")
                .decl("display", "none")
                .decl("align-items", "center"),
        )
        .rule(Rule::new(".nav-links .btn + .btn").decl("margin-left", theme.spacing(1.0)))
        .rule(
            Rule::new(".toolbar-actions")
                .decl("display", "flex")
                .decl("align-items", "center")
                .decl("gap", theme.spacing(1.5)),
        )
}

fn buttons(sheet: StyleSheet, theme: &Theme) -> StyleSheet {
    let p = &theme.palette;
    sheet
        .rule(
            Rule::new(".btn")
                .decl("display", "inline-flex")
                .decl("align-items", "center")
                .decl("justify-content", "center")
                .decl("padding", "6px 16px")
                .decl("border", "1px solid transparent")
                .decl("border-radius", theme.radius(1.0))
                .decl("background", "none")
                .decl("color", "inherit")
                .decl("font-family", "inherit")
                .decl("font-size", "0.875rem")
                .decl("font-weight", "500")
                .decl("line-height", "1.75")
                .decl("cursor", "pointer")
                .decl("transition", "background-color 250ms"),
        )
        .rule(Rule::new(".btn-text:hover").decl("background-color", "rgba(0, 0, 0, 0.04)"))
        .rule(
            Rule::new(".btn-contained")
                .decl("background-color", p.primary.main.to_string())
                .decl("color", p.primary.contrast_text.to_string())
                .decl("box-shadow", "0 3px 1px -2px rgba(0,0,0,0.2), 0 2px 2px 0 rgba(0,0,0,0.14)"),
        )
        .rule(
            Rule::new(".btn-outlined")
                .decl("border-color", p.primary.main.to_string())
                .decl("color", p.primary.main.to_string()),
        )
        .rule(Rule::new(".btn-nav").decl("border-radius", theme.radius(2.0)))
        .rule(Rule::new(".btn-login").decl("display", "none"))
        .rule(
            Rule::new(".btn-pill")
                .decl("border-radius", "999px")
                .decl("padding", format!("6px {}", theme.spacing(3.0))),
        )
        .rule(
            Rule::new(".btn-cta")
                .decl("background-color", p.info.main.to_string())
                .decl("color", p.info.contrast_text.to_string())
                .decl("padding", format!("{} {}", theme.spacing(2.0), theme.spacing(6.0)))
                .decl("border-radius", theme.radius(3.0))
                .decl("font-size", "1.1rem")
                .decl("font-weight", "600"),
        )
        .rule(
            Rule::new(".btn-block")
                .decl("flex", "1")
                .decl("border-radius", theme.radius(3.0)),
        )
}

fn sections(sheet: StyleSheet, theme: &Theme) -> StyleSheet {
    let p = &theme.palette;
    sheet
        // hero
        .rule(
            Rule::new(".hero")
                .decl("padding", format!("{} 0", theme.spacing(10.0)))
                .decl("color", p.primary.contrast_text.to_string()),
        )
        .rule(
            Rule::new(".hero-stack")
                .decl("align-items", "center")
                .decl("text-align", "center")
                .decl("gap", theme.spacing(3.0)),
        )
        .rule(
            Rule::new(".hero-title")
                .decl("font-size", "3rem")
                .decl("line-height", "1.167")
                .decl("font-weight", "800")
                .decl("max-width", "720px"),
        )
        .rule(
            Rule::new(".hero-subtitle")
                .decl("font-size", "1.25rem")
                .decl("font-weight", "300")
                .decl("max-width", "640px")
                .decl("line-height", "1.8"),
        )
        // features
        .rule(
            Rule::new(".features")
                .decl("padding", format!("{} 0", theme.spacing(8.0)))
                .decl("background-color", p.background_default.to_string()),
        )
        .rule(
            Rule::new(".features-stack")
                .decl("gap", theme.spacing(6.0))
                .decl("text-align", "center"),
        )
        .rule(Rule::new(".section-heading").decl("gap", theme.spacing(1.0)))
        .rule(
            Rule::new(".section-title")
                .decl("font-size", "2.125rem")
                .decl("font-weight", "700"),
        )
        .rule(
            Rule::new(".feature-grid")
                .decl("display", "grid")
                .decl("grid-template-columns", "1fr")
                .decl("gap", theme.spacing(3.0)),
        )
        .rule(
            Rule::new(".feature-card")
                .decl("height", "100%")
                .decl("border-radius", theme.radius(4.0))
                .decl("border", format!("1px solid {}", p.divider))
                .decl("background-color", p.background_paper.to_string())
                .decl("padding", theme.spacing(2.0))
                .decl("text-align", "left"),
        )
        .rule(
            Rule::new(".feature-title")
                .decl("font-size", "1.25rem")
                .decl("font-weight", "700")
                .decl("margin-bottom", theme.spacing(1.5)),
        )
        .rule(
            Rule::new(".feature-description")
                .decl("color", p.text_secondary.to_string())
                .decl("line-height", "1.9"),
        )
        // preview
        .rule(Rule::new(".preview").decl("padding", format!("{} 0", theme.spacing(8.0))))
        .rule(
            Rule::new(".preview-grid")
                .decl("display", "grid")
                .decl("grid-template-columns", "1fr")
                .decl("gap", theme.spacing(6.0))
                .decl("align-items", "center"),
        )
        .rule(Rule::new(".preview-copy").decl("gap", theme.spacing(2.0)))
        .rule(Rule::new(".preview-copy .divider").decl("margin", format!("{} 0", theme.spacing(2.0))))
        .rule(Rule::new(".preview-subtitle").decl("line-height", "1.9"))
        .rule(
            Rule::new(".metric-row")
                .decl("display", "flex")
                .decl("flex-direction", "column")
                .decl("gap", theme.spacing(2.0)),
        )
        .rule(
            Rule::new(".metric-tile")
                .decl("flex", "1")
                .decl("padding", format!("{} {}", theme.spacing(2.0), theme.spacing(3.0)))
                .decl("border", format!("1px solid {}", p.divider))
                .decl("border-radius", theme.radius(3.0))
                .decl("background-color", p.background_paper.to_string())
                .decl("text-align", "center"),
        )
        .rule(
            Rule::new(".metric-value")
                .decl("font-size", "1.5rem")
                .decl("font-weight", "700"),
        )
        .rule(
            Rule::new(".metric-label")
                .decl("font-size", "0.875rem")
                .decl("color", p.text_secondary.to_string()),
        )
        // mock card
        .rule(
            Rule::new(".card-mockup")
                .decl("padding", theme.spacing(4.0))
                .decl("border-radius", theme.radius(4.0))
                .decl("display", "flex")
                .decl("flex-direction", "column")
                .decl("gap", theme.spacing(2.0))
                .decl(
                    "box-shadow",
                    "0 5px 5px -3px rgba(0,0,0,0.2), 0 8px 10px 1px rgba(0,0,0,0.14), 0 3px 14px 2px rgba(0,0,0,0.12)",
                ),
        )
        .rule(
            Rule::new(".card-identity")
                .decl("display", "flex")
                .decl("align-items", "center"),
        )
        .rule(
            Rule::new(".card-avatar")
                .decl("width", "64px")
                .decl("height", "64px")
                .decl("flex-shrink", "0")
                .decl("border-radius", "50%")
                .decl("background-color", p.primary.main.to_string())
                .decl("color", p.primary.contrast_text.to_string())
                .decl("display", "flex")
                .decl("align-items", "center")
                .decl("justify-content", "center")
                .decl("font-weight", "700")
                .decl("font-size", "22px")
                .decl("margin-right", theme.spacing(2.0)),
        )
        .rule(Rule::new(".card-name").decl("font-size", "1.25rem").decl("font-weight", "700"))
        .rule(Rule::new(".card-contact").decl("gap", theme.spacing(1.5)))
        .rule(Rule::new(".card-contact-title").decl("font-weight", "600"))
        .rule(Rule::new(".card-contact-lines").decl("gap", theme.spacing(0.5)))
        .rule(Rule::new(".card-quote").decl("line-height", "1.8"))
        .rule(
            Rule::new(".card-actions")
                .decl("display", "flex")
                .decl("gap", theme.spacing(2.0)),
        )
        // footer
        .rule(
            Rule::new(".footer")
                .decl("background-color", p.grey_900.to_string())
                .decl("color", p.grey_100.to_string())
                .decl("padding", format!("{} 0", theme.spacing(4.0)))
                .decl("margin-top", "auto"),
        )
        .rule(
            Rule::new(".footer-row")
                .decl("display", "flex")
                .decl("flex-direction", "column")
                .decl("justify-content", "space-between")
                .decl("align-items", "flex-start")
                .decl("gap", theme.spacing(2.0)),
        )
        .rule(Rule::new(".footer-copyright").decl("font-size", "0.875rem"))
        .rule(Rule::new(".footer-contact").decl("font-weight", "500"))
        .rule(Rule::new(".footer-contact:hover").decl("text-decoration", "underline"))
}

fn responsive(sheet: StyleSheet) -> StyleSheet {
    sheet
        .media(
            BREAKPOINT_SM,
            vec![
                Rule::new(".container")
                    .decl("padding-left", "24px")
                    .decl("padding-right", "24px"),
                Rule::new(".toolbar").decl("padding", "0 24px"),
                Rule::new(".btn-login").decl("display", "inline-flex"),
                Rule::new(".metric-row").decl("flex-direction", "row"),
                Rule::new(".footer-row")
                    .decl("flex-direction", "row")
                    .decl("align-items", "center"),
            ],
        )
        .media(
            BREAKPOINT_MD,
            vec![
                Rule::new(".nav-links").decl("display", "flex"),
                Rule::new(".hero").decl("padding", "112px 0"),
                Rule::new(".features").decl("padding", "80px 0"),
                Rule::new(".preview").decl("padding", "80px 0"),
                Rule::new(".feature-grid").decl("grid-template-columns", "repeat(3, 1fr)"),
                Rule::new(".preview-grid").decl("grid-template-columns", "repeat(2, 1fr)"),
            ],
        )
}
